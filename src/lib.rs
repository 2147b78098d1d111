pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod metrics_defs;
pub mod pagination;
pub mod types;

#[cfg(test)]
mod testutils;

use crate::api::AppState;
use crate::cache::SessionCache;
use crate::client::SessionClient;
use crate::config::Config;
use tokio::net::TcpListener;

#[derive(thiserror::Error, Debug)]
pub enum ServeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Binds the configured listener and serves the session API until the
/// listener fails or the task is cancelled.
pub async fn run(config: Config) -> Result<(), ServeError> {
    let state = AppState {
        client: SessionClient::new(config.upstream.base_url),
        cache: SessionCache::new(),
    };
    let app = api::router(state);

    let addr = format!("{}:{}", config.listener.host, config.listener.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
