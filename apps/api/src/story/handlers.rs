use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::quote::Quotation;
use crate::routes::upload::read_upload;
use crate::state::AppState;
use crate::story::composer::{compose_story, STORY_FILENAME};
use crate::story::design::request_design;
use crate::story::photo::prepare_photo;

/// POST /api/create-story
///
/// Multipart fields: `image` (file), `quote`, `author`, `title`.
/// Responds with the composed story as a PNG attachment.
pub async fn handle_create_story(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_upload(multipart).await?;
    let quotation = Quotation {
        text: form.field("quote").to_string(),
        author: form.field("author").to_string(),
        title: form.field("title").to_string(),
    };
    info!(
        "Creating story: {} chars by '{}'",
        quotation.text.chars().count(),
        quotation.author
    );

    // Decode first so an unreadable upload never reaches the model.
    let bytes = form.image.data.clone();
    let photo = tokio::task::spawn_blocking(move || prepare_photo(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed decoding photo: {e}")))??;

    let directive = request_design(state.vision.as_ref(), &form.image, &quotation).await?;

    let faces = state.faces.clone();
    let png = tokio::task::spawn_blocking(move || {
        compose_story(&photo, &quotation, &directive, faces.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed composing story: {e}")))??;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{STORY_FILENAME}\""),
            ),
        ],
        png,
    ))
}
