//! Listener setup and graceful shutdown.

use portfolio_core::Result;
use portfolio_store::StoreHandle;
use serde::{Deserialize, Serialize};

use crate::routes::router;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8750
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// The `host:port` string the listener binds.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The read API server.
pub struct Server {
    config: ApiConfig,
    store: StoreHandle,
}

impl Server {
    /// Creates a server over the given store.
    pub fn new(config: ApiConfig, store: StoreHandle) -> Self {
        Self { config, store }
    }

    /// Binds the listener and serves requests until ctrl-c.
    pub async fn run(self) -> Result<()> {
        let app = router(self.store);
        let listener = tokio::net::TcpListener::bind(self.config.listen_addr()).await?;
        tracing::info!(addr = %listener.local_addr()?, "read API listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("shutdown signal received");
}
