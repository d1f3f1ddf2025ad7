// Quote curation: the vision model reads the photo and picks a real literary passage
// that fits it. All model calls go through llm_client::VisionModel.

pub mod curator;
pub mod handlers;
pub mod prompts;
