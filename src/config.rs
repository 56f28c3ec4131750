// Configuration management

use reqwest::Url;
use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

/// Errors raised while loading [`Config`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, read from environment variables.
///
/// | Variable | Default | Used by |
/// |---|---|---|
/// | `BIND_ADDRESS` | `0.0.0.0` | every service |
/// | `USER_SERVICE_HOST` | `user-service` | order service |
/// | `PRODUCT_SERVICE_HOST` | `product-service` | order service |
///
/// Ports are not configurable. Each service listens on its fixed port and the collaborator
/// hosts are combined with theirs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: IpAddr,
    pub user_service_host: String,
    pub product_service_host: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source. Unset or empty values take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_address = get("BIND_ADDRESS", "0.0.0.0");
        let bind_address = bind_address
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "BIND_ADDRESS",
                value: bind_address.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            bind_address,
            user_service_host: Self::validate_host(
                "USER_SERVICE_HOST",
                get("USER_SERVICE_HOST", "user-service"),
            )?,
            product_service_host: Self::validate_host(
                "PRODUCT_SERVICE_HOST",
                get("PRODUCT_SERVICE_HOST", "product-service"),
            )?,
        })
    }

    /// Load configuration from a map, mostly for tests.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// A host must be a bare name or address: no scheme, no port, no path.
    fn validate_host(key: &'static str, host: String) -> Result<String, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key,
            value: host.clone(),
            reason: reason.to_string(),
        };

        if host.contains("://") {
            return Err(invalid("expected a host name without scheme"));
        }

        let url = Url::parse(&format!("http://{}", host)).map_err(|e| invalid(&e.to_string()))?;
        // `Url` hides default ports, so look for the separator outside an IPv6 literal too.
        let after_literal = host.rsplit_once(']').map_or(host.as_str(), |(_, rest)| rest);
        if url.port().is_some() || after_literal.contains(':') {
            return Err(invalid("port is fixed and must not be given"));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("expected a host name without path"));
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(invalid("expected a host name without credentials"));
        }

        Ok(host)
    }
}
