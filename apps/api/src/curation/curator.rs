//! Curator: asks the vision model for a real passage that matches the photo.

use tracing::{info, warn};

use crate::curation::prompts::CURATOR_PROMPT;
use crate::errors::AppError;
use crate::llm_client::prompts::{FACTUALITY_INSTRUCTION, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{parse_json_reply, ImagePart, VisionModel};
use crate::models::quote::QuoteRecommendation;

/// Low temperature keeps the curator close to passages it actually knows.
const CURATOR_TEMPERATURE: f32 = 0.2;

pub(crate) fn build_curator_prompt() -> String {
    format!("{CURATOR_PROMPT}\n\n{FACTUALITY_INSTRUCTION}\n\n{JSON_ONLY_INSTRUCTION}")
}

/// Recommends a passage for the uploaded photo.
///
/// A reply without a parsable JSON object is `MalformedReply`; a failed call is `Llm`.
pub async fn recommend_quote(
    model: &dyn VisionModel,
    image: &ImagePart,
) -> Result<QuoteRecommendation, AppError> {
    let reply = model
        .generate(&build_curator_prompt(), image, CURATOR_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Quote request failed: {e}")))?;

    let recommendation: QuoteRecommendation = parse_json_reply(&reply).map_err(|e| {
        warn!(error = %e, reply = %reply, "Curator reply could not be parsed");
        AppError::MalformedReply(e.to_string())
    })?;

    info!(
        "Quote recommended: '{}' by {}",
        recommendation.source.title, recommendation.source.author
    );
    Ok(recommendation)
}
