use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{config::ServerConfig, errors::AdminError};

use super::routes::{build_router, ApiState};

pub async fn start_api_server(config: &ServerConfig, state: ApiState) -> crate::Result<()> {
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| AdminError::config(format!("Invalid server address: {}", e)))?;

    let router: Router = build_router(state);

    let listener = TcpListener::bind(addr).await.map_err(|e| AdminError::Io {
        source: e,
        context: format!("Failed to bind admin server to {}", addr),
    })?;

    info!(address = %addr, "Starting admin HTTP server");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Admin server shutdown listener failed");
            }
        })
        .await
        .map_err(|e| AdminError::Io { source: e, context: "Admin server error".to_string() })?;

    info!("Admin server shutdown completed");
    Ok(())
}
