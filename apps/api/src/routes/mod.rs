pub mod health;
pub mod upload;

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::curation::handlers::handle_generate;
use crate::state::AppState;
use crate::story::handlers::handle_create_story;

pub fn build_router(state: AppState, frontend_dir: &Path, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quote curation
        .route("/api/generate", post(handle_generate))
        // Story composition
        .route("/api/create-story", post(handle_create_story))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .fallback_service(ServeDir::new(frontend_dir))
        .with_state(state)
}
