use pulse_core::{Result, SentimentModel};
use std::sync::Arc;

pub mod huggingface;
pub mod lexicon;

pub use huggingface::HuggingFaceModel;
pub use lexicon::LexiconModel;

#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
}

/// Build the shared classifier instance. With an API key the remote
/// HuggingFace classifier is used; otherwise the offline lexicon model.
pub fn create_model(config: Option<ModelConfig>) -> Result<Arc<dyn SentimentModel>> {
    let config = config.unwrap_or_default();
    match config.api_key {
        Some(api_key) => Ok(Arc::new(HuggingFaceModel::new(
            api_key,
            config.model_name,
        )?)),
        None => Ok(Arc::new(LexiconModel::new())),
    }
}
