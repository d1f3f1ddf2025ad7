mod config;
mod curation;
mod errors;
mod layout;
mod llm_client;
mod models;
mod routes;
mod state;
mod story;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::story::typeface::Typeface;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PicToPoem API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize vision client
    let llm = LlmClient::new(config.gemini_api_key.clone())?;
    info!("Vision client initialized (model: {})", llm_client::MODEL);

    // Load the story typeface once; every request shares it
    let typeface = Typeface::load(&config.font_path)
        .with_context(|| format!("Failed to load font from {}", config.font_path.display()))?;
    info!("Font loaded from {}", config.font_path.display());

    let state = AppState {
        vision: Arc::new(llm),
        faces: Arc::new(typeface),
    };

    let app = build_router(state, &config.frontend_dir, config.max_upload_bytes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
