use async_trait::async_trait;
use pulse_core::{Result, Sentiment, SentimentModel, SentimentScore};
use std::fmt;

// Small keyword lexicon for business news. Coarse on purpose: this model
// is the offline default when no inference API key is configured.
const POSITIVE_WORDS: &[&str] = &[
    "gain", "gains", "growth", "profit", "profits", "surge", "surges", "rally",
    "record", "strong", "beat", "beats", "upgrade", "partnership", "expansion",
    "success", "successful", "innovative", "breakthrough", "soar", "soars",
    "rise", "rises", "optimistic", "opportunity", "win", "wins",
];

const NEGATIVE_WORDS: &[&str] = &[
    "loss", "losses", "decline", "declines", "drop", "drops", "fall", "falls",
    "lawsuit", "fraud", "scandal", "layoff", "layoffs", "recall", "fine",
    "fines", "crash", "crashes", "plunge", "plunges", "weak", "miss", "misses",
    "downgrade", "investigation", "bankruptcy", "controversy", "risk",
];

pub struct LexiconModel;

impl LexiconModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LexiconModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconModel").finish()
    }
}

#[async_trait]
impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "Lexicon"
    }

    async fn classify(&self, text: &str) -> Result<SentimentScore> {
        let lowered = text.to_lowercase();
        let mut positive = 0usize;
        let mut negative = 0usize;
        for word in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            if POSITIVE_WORDS.contains(&word) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word) {
                negative += 1;
            }
        }

        let total = positive + negative;
        if total == 0 || positive == negative {
            return Ok(SentimentScore::neutral());
        }

        let (sentiment, hits) = if positive > negative {
            (Sentiment::Positive, positive)
        } else {
            (Sentiment::Negative, negative)
        };

        Ok(SentimentScore {
            sentiment,
            confidence: hits as f64 / total as f64,
        })
    }
}
