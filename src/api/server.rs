use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::signal;
use tracing::{debug, error, info};

use crate::api::routes;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::store::CertStore;

/// API server configuration and runtime management
///
/// Handles startup and shutdown of the HTTP boundary around the issuance
/// engine and certificate store.
pub struct ApiServer {
    /// Listening address
    address: SocketAddr,
    /// Router
    router: Router,
}

impl ApiServer {
    /// Create a new API server serving the given store
    pub fn new(config: Arc<Settings>, store: Arc<dyn CertStore>) -> Result<Self> {
        let address = config
            .api_address()
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("Invalid API address: {}", e)))?;

        let router = routes::create_router(store);

        Ok(Self { address, router })
    }

    /// Start the API server with graceful shutdown handling
    ///
    /// Blocks until the server is shut down.
    pub async fn start_with_shutdown(&self) -> Result<()> {
        info!("Starting API server on {}", self.address);

        let server = axum::Server::bind(&self.address)
            .serve(self.router.clone().into_make_service());

        let shutdown_future = server.with_graceful_shutdown(Self::shutdown_signal());

        if let Err(e) = shutdown_future.await {
            error!("API server error: {}", e);
            return Err(Error::Internal(format!("API server error: {}", e)));
        }

        info!("API server shut down gracefully");
        Ok(())
    }

    /// Wait for CTRL+C or SIGTERM
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            debug!("Received Ctrl+C signal");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
            debug!("Received SIGTERM signal");
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        info!("Shutdown signal received, starting graceful shutdown");
    }

    /// Get the address the server binds to
    pub fn address(&self) -> &SocketAddr {
        &self.address
    }
}
