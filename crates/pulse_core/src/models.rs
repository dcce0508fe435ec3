use async_trait::async_trait;
use std::fmt::Debug;

use crate::types::SentimentScore;
use crate::Result;

/// A pretrained text classifier shared across the pipeline. Inference is
/// stateless over shared immutable weights; implementations must be safe
/// to call concurrently.
#[async_trait]
pub trait SentimentModel: Send + Sync + Debug {
    fn name(&self) -> &str;

    /// Classify a piece of text into a sentiment label with confidence.
    async fn classify(&self, text: &str) -> Result<SentimentScore>;
}

/// A text-to-speech engine accepting a locale code.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &str;

    /// Render spoken audio (MP3 bytes) for the given text and language.
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>>;
}
