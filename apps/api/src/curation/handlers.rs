use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::curation::curator::recommend_quote;
use crate::errors::AppError;
use crate::models::quote::QuoteRecommendation;
use crate::routes::upload::read_upload;
use crate::state::AppState;

/// POST /api/generate
///
/// Multipart field: `image` (file). Responds with the recommended passage as JSON.
pub async fn handle_generate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<QuoteRecommendation>, AppError> {
    let form = read_upload(multipart).await?;
    let recommendation = recommend_quote(state.vision.as_ref(), &form.image).await?;
    Ok(Json(recommendation))
}
