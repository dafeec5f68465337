//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;

use crate::api::build_router;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {

        let addr: SocketAddr = format!("{}:{}", self.config.http_host, self.config.http_port)
            .parse()
            .map_err(|e| {
                ServerError::Config(format!(
                    "invalid listen address {}:{}: {e}",
                    self.config.http_host, self.config.http_port
                ))
            })?;

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("🍽️  Restaurant CMS listening on http://{}", addr);

        let app = build_router(self.state.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
