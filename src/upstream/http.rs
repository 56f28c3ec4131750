//! HTTP implementation of [`ResourceLookup`].

use super::{LookupError, ResourceLookup, Upstream, UPSTREAM_TIMEOUT};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Errors raised while building an [`HttpLookup`].
#[derive(Debug, Error)]
pub enum HttpLookupError {
    #[error("Invalid {upstream} service URL '{url}': {reason}")]
    InvalidUrl {
        upstream: Upstream,
        url: String,
        reason: String,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Looks ids up with `GET {base_url}/{resource}/{id}`.
///
/// Classification of the outcome:
///
/// | Outcome | Result |
/// |---|---|
/// | 2xx | `Ok(())` |
/// | 404 | [`LookupError::NotFound`] |
/// | deadline exceeded | [`LookupError::Timeout`] |
/// | connect failure | [`LookupError::Unavailable`] |
/// | anything else | [`LookupError::Failed`] |
#[derive(Debug, Clone)]
pub struct HttpLookup {
    http: Client,
    base_url: Url,
    upstream: Upstream,
    timeout: Duration,
}

impl HttpLookup {
    /// Builds a lookup for the collaborator on `host` at its fixed port.
    pub fn for_host(upstream: Upstream, host: &str) -> Result<Self, HttpLookupError> {
        let base_url = format!("http://{}:{}", host, upstream.port());
        Self::new(upstream, &base_url, UPSTREAM_TIMEOUT)
    }

    /// Builds a lookup against an explicit base URL.
    pub fn new(upstream: Upstream, base_url: &str, timeout: Duration) -> Result<Self, HttpLookupError> {
        let invalid = |reason: String| HttpLookupError::InvalidUrl {
            upstream,
            url: base_url.to_string(),
            reason,
        };
        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            upstream,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The full lookup URL for `id`, with `id` percent-encoded as a single path segment.
    pub fn lookup_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(self.upstream.resource()).push(id);
        }
        url
    }

    fn classify(&self, e: reqwest::Error) -> LookupError {
        if e.is_timeout() {
            LookupError::Timeout
        } else if e.is_connect() {
            LookupError::Unavailable(e.to_string())
        } else {
            LookupError::Failed(e.to_string())
        }
    }
}

#[async_trait]
impl ResourceLookup for HttpLookup {
    fn upstream(&self) -> Upstream {
        self.upstream
    }

    #[instrument(skip(self))]
    async fn lookup(&self, id: &str) -> Result<(), LookupError> {
        let url = self.lookup_url(id);
        info!(upstream = %self.upstream, %url, "Calling upstream service");

        let response = match self.http.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                let failure = self.classify(e);
                match &failure {
                    LookupError::Timeout => {
                        error!(%url, timeout_secs = self.timeout.as_secs_f64(), "Upstream call timed out")
                    }
                    LookupError::Unavailable(detail) => {
                        error!(%url, error = %detail, "Connection error calling upstream")
                    }
                    other => error!(%url, error = %other, "Error calling upstream"),
                }
                return Err(failure);
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(%url, id, "Upstream reported not found");
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            error!(%url, %status, "Upstream returned error status");
            return Err(LookupError::Failed(format!("HTTP {}", status)));
        }

        info!(upstream = %self.upstream, id, "Upstream check OK");
        Ok(())
    }
}
