//! Sauti Server - HTTP API streaming script-to-speech progress

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod error;
mod state;

use sauti_core::{PipelineConfig, ServerConfig, SimulatedBackend};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sauti_server=debug,sauti_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sauti Server");

    let server_config = ServerConfig::default();
    let pipeline_config = PipelineConfig::default();
    info!(
        max_unit_chars = pipeline_config.max_unit_chars,
        "pipeline configured"
    );

    // The simulated backend stands in for a real synthesis engine.
    let backend = Arc::new(SimulatedBackend::new(
        Duration::from_millis(200),
        24000,
        pipeline_config.base_words_per_minute,
    ));
    let state = AppState::new(backend, pipeline_config);

    let app = api::create_router(state, server_config.cors_enabled);

    let addr = format!("{}:{}", server_config.host, server_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
