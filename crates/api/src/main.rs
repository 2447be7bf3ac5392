use std::sync::Arc;

use anyhow::Context;

use bankledger_api::app::{self, services::AppServices};
use bankledger_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bankledger_observability::init();

    let config = ServerConfig::from_env()?;
    let app = app::build_app(Arc::new(AppServices::in_memory()));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
