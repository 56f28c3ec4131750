use crate::api::{order_routes, product_routes, user_routes};
use crate::config::Config;
use crate::orchestrator::OrderOrchestrator;
use crate::upstream::{HttpLookup, HttpLookupError, Upstream};
use axum::Router;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The three independently deployable services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Service {
    User,
    Product,
    Order,
}

impl Service {
    /// Fixed listening port.
    pub fn port(self) -> u16 {
        match self {
            Service::User => Upstream::User.port(),
            Service::Product => Upstream::Product.port(),
            Service::Order => 5003,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Service::User => "user",
            Service::Product => "product",
            Service::Order => "order",
        }
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while building, serving or stopping a service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Upstream(#[from] HttpLookupError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// One running service: its store actors and the router that owns their clients.
///
/// `ServiceSystem` is responsible for:
/// - **Lifecycle Management**: spawning the store actors the service needs and stopping them
/// - **Dependency Wiring**: handing store clients and upstream lookups to the router
///
/// | Service | Stores | Upstreams |
/// |---|---|---|
/// | user | users | none |
/// | product | products (seeded) | none |
/// | order | orders | user service, product service |
///
/// # Example
///
/// ```ignore
/// let system = ServiceSystem::build(Service::User, &config)?;
/// let listener = TcpListener::bind(("0.0.0.0", Service::User.port())).await?;
/// system.serve(listener, shutdown_signal()).await?;
/// ```
pub struct ServiceSystem {
    service: Service,
    router: Router,

    /// Task handles of the store actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl ServiceSystem {
    /// Builds the given service. Only the order service reads `config`.
    pub fn build(service: Service, config: &Config) -> Result<Self, ServiceError> {
        match service {
            Service::User => Ok(Self::user()),
            Service::Product => Ok(Self::product()),
            Service::Order => Self::order(config),
        }
    }

    /// The user directory service.
    pub fn user() -> Self {
        let (actor, users) = crate::user_actor::new();
        let handle = tokio::spawn(actor.run());

        Self {
            service: Service::User,
            router: user_routes::router(users),
            handles: vec![handle],
        }
    }

    /// The product catalog service, seeded with the catalog.
    pub fn product() -> Self {
        let (actor, products) = crate::product_actor::new();
        let handle = tokio::spawn(actor.run());

        Self {
            service: Service::Product,
            router: product_routes::router(products),
            handles: vec![handle],
        }
    }

    /// The order service, calling the collaborators named in `config`.
    pub fn order(config: &Config) -> Result<Self, ServiceError> {
        let users = HttpLookup::for_host(Upstream::User, &config.user_service_host)?;
        let products = HttpLookup::for_host(Upstream::Product, &config.product_service_host)?;
        info!(
            user_service = %users.base_url(),
            product_service = %products.base_url(),
            "Upstream services configured"
        );

        Ok(Self::order_with(Arc::new(users), Arc::new(products)))
    }

    /// The order service with explicit collaborators.
    pub fn order_with(
        users: Arc<dyn crate::upstream::ResourceLookup>,
        products: Arc<dyn crate::upstream::ResourceLookup>,
    ) -> Self {
        let (actor, orders) = crate::order_actor::new();
        let handle = tokio::spawn(actor.run());
        let orchestrator = OrderOrchestrator::new(users, products, orders);

        Self {
            service: Service::Order,
            router: order_routes::router(orchestrator),
            handles: vec![handle],
        }
    }

    pub fn service(&self) -> Service {
        self.service
    }

    /// A handle on the router, for driving it without a listener.
    ///
    /// Clones keep the store actors alive; drop them before calling [`shutdown`](Self::shutdown).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serves on `listener` until `signal` completes, then stops the store actors.
    pub async fn serve(
        self,
        listener: TcpListener,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServiceError> {
        let Self {
            service,
            router,
            handles,
        } = self;

        if let Ok(addr) = listener.local_addr() {
            info!(%service, %addr, "Listening");
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(signal)
            .await?;

        Self::join(service, handles).await
    }

    /// Stops the store actors without serving.
    ///
    /// Dropping the router drops the store clients it owns, which closes the actors' channels.
    pub async fn shutdown(self) -> Result<(), ServiceError> {
        let Self {
            service,
            router,
            handles,
        } = self;
        drop(router);
        Self::join(service, handles).await
    }

    async fn join(service: Service, handles: Vec<JoinHandle<()>>) -> Result<(), ServiceError> {
        info!(%service, "Shutting down service...");
        for handle in handles {
            if let Err(e) = handle.await {
                error!(%service, "Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }
        info!(%service, "Service shutdown complete.");
        Ok(())
    }
}

/// Completes on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
