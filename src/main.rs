use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use traffic_chat::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);

    let app = routes::create_router(&config.static_dir).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        routing = config.ors_api_key.is_some(),
        "traffic chat running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
