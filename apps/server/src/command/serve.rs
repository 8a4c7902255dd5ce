use super::Command;
use crate::api;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use search_core::SearchEngine;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct ServeCommand {
    config: Config,
    eager: bool,
}

impl ServeCommand {
    pub fn new(mut cfg: Config, bind: Option<SocketAddr>, content_root: Option<PathBuf>, eager: bool) -> Self {
        if let Some(bind) = bind {
            cfg.bind_address = bind;
        }
        if let Some(content_root) = content_root {
            cfg.content_root = content_root;
        }
        Self {
            config: cfg,
            eager,
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[async_trait::async_trait]
impl Command for ServeCommand {
    async fn execute(&self) -> Result<()> {
        let engine = Arc::new(SearchEngine::new(self.config.search_config()));
        info!("Content root: {}", self.config.content_root.display());

        if self.eager {
            let warm = Arc::clone(&engine);
            let index = tokio::task::spawn_blocking(move || warm.index())
                .await?
                .wrap_err("Initial indexing failed")?;
            info!("Index ready with {} documents", index.len());
        }

        let listener = tokio::net::TcpListener::bind(self.config.bind_address)
            .await
            .wrap_err_with(|| format!("Cannot bind {}", self.config.bind_address))?;
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, api::router(engine))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
