mod coaching;
mod config;
mod errors;
mod guidance;
mod llm_client;
mod matching;
mod models;
mod routes;
mod sessions;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{DisabledOracle, LlmClient, TextOracle};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mentora API v{}", env!("CARGO_PKG_VERSION"));

    // Text oracle: Claude when a key is configured, fallbacks only otherwise
    let oracle: Arc<dyn TextOracle> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.oracle_max_retries)?;
            info!(
                "LLM client initialized (model: {}, timeout: {}s)",
                llm_client::MODEL,
                config.oracle_timeout.as_secs()
            );
            Arc::new(llm)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; generative answers will use fallback text");
            Arc::new(DisabledOracle)
        }
    };

    let state = AppState::new(config.clone(), oracle);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
