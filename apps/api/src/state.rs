use std::sync::Arc;

use crate::llm_client::VisionModel;
use crate::story::typeface::FaceSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Vision model backend. Production: `LlmClient`.
    pub vision: Arc<dyn VisionModel>,
    /// Font used to measure and draw story text. Production: `Typeface` loaded at startup.
    pub faces: Arc<dyn FaceSource>,
}
