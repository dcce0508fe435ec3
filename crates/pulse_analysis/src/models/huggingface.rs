use async_trait::async_trait;
use pulse_core::{Error, Result, Sentiment, SentimentModel, SentimentScore};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

const DEFAULT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Remote text classifier backed by the HuggingFace inference API.
/// The underlying model yields a binary POSITIVE/NEGATIVE verdict.
pub struct HuggingFaceModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl HuggingFaceModel {
    pub fn new(api_key: String, model: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// POSITIVE and NEGATIVE map directly; any other label is Neutral.
pub(crate) fn map_label(label: &str, score: f64) -> SentimentScore {
    let sentiment = match label {
        "POSITIVE" => Sentiment::Positive,
        "NEGATIVE" => Sentiment::Negative,
        _ => Sentiment::Neutral,
    };
    SentimentScore {
        sentiment,
        confidence: score,
    }
}

#[async_trait]
impl SentimentModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn classify(&self, text: &str) -> Result<SentimentScore> {
        let request = ClassifyRequest { inputs: text };

        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Vec<LabelScore>>>()
            .await?;

        let best = response
            .first()
            .and_then(|labels| {
                labels.iter().max_by(|a, b| {
                    a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal)
                })
            })
            .ok_or_else(|| Error::Inference("Empty classifier response".to_string()))?;

        Ok(map_label(&best.label, best.score))
    }
}
