use pulse_core::{SentimentModel, SentimentScore};
use std::sync::Arc;
use tracing::warn;

// Character cap standing in for the classifier's token limit.
const MODEL_INPUT_CHARS: usize = 512;

/// Wraps the shared classifier instance. Sentiment is best-effort: a
/// failed model call degrades to neutral instead of failing the article.
pub struct SentimentScorer {
    model: Arc<dyn SentimentModel>,
}

impl SentimentScorer {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    pub async fn score(&self, text: &str) -> SentimentScore {
        let truncated: String = text.chars().take(MODEL_INPUT_CHARS).collect();
        match self.model.classify(&truncated).await {
            Ok(score) => score,
            Err(e) => {
                warn!("Sentiment model '{}' failed, defaulting to neutral: {}", self.model.name(), e);
                SentimentScore::neutral()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pulse_core::{Error, Result, Sentiment};

    #[derive(Debug)]
    struct FailingModel;

    #[async_trait]
    impl SentimentModel for FailingModel {
        fn name(&self) -> &str {
            "Failing"
        }

        async fn classify(&self, _text: &str) -> Result<SentimentScore> {
            Err(Error::Inference("model unavailable".to_string()))
        }
    }

    #[derive(Debug)]
    struct LengthCheckModel;

    #[async_trait]
    impl SentimentModel for LengthCheckModel {
        fn name(&self) -> &str {
            "LengthCheck"
        }

        async fn classify(&self, text: &str) -> Result<SentimentScore> {
            assert!(text.chars().count() <= 512);
            Ok(SentimentScore {
                sentiment: Sentiment::Positive,
                confidence: 1.0,
            })
        }
    }

    #[tokio::test]
    async fn test_model_failure_defaults_to_neutral() {
        let scorer = SentimentScorer::new(Arc::new(FailingModel));
        let score = scorer.score("anything").await;
        assert_eq!(score.sentiment, Sentiment::Neutral);
        assert_eq!(score.confidence, 0.5);
    }

    #[tokio::test]
    async fn test_input_truncated_to_model_limit() {
        let scorer = SentimentScorer::new(Arc::new(LengthCheckModel));
        let long_text = "word ".repeat(500);
        let score = scorer.score(&long_text).await;
        assert_eq!(score.sentiment, Sentiment::Positive);
    }
}
