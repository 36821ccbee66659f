use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::infrastructure::paths::PortalPaths;

use super::router::{AppState, create_router};

pub struct Server {
    state: Arc<AppState>,
    port: u16,
}

impl Server {
    pub fn new(paths: PortalPaths, port: u16) -> Result<Self> {
        std::fs::create_dir_all(&paths.data_dir).with_context(|| {
            format!(
                "Failed to create data directory {}",
                paths.data_dir.display()
            )
        })?;

        let state = Arc::new(AppState::new(paths)?);
        Ok(Self { state, port })
    }

    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let router = create_router(self.state);

        let listener = TcpListener::bind(addr).await.context(format!(
            "Failed to bind to port {}. Is another service using it? Try: sudo lsof -i :{}",
            self.port, self.port
        ))?;

        info!("Portal listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down");
}
