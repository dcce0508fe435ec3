pub mod comparative;
pub mod models;
pub mod pipeline;
pub mod sentiment;
pub mod speech;
pub mod summary;
pub mod topics;

pub use models::{create_model, ModelConfig};
pub use pipeline::Pipeline;
pub use sentiment::SentimentScorer;
pub use speech::GoogleTranslateTts;
pub use summary::{SummaryRenderer, DEFAULT_LOCALE};
pub use topics::TopicExtractor;

pub mod prelude {
    pub use super::comparative::aggregate;
    pub use super::models::create_model;
    pub use super::Pipeline;
    pub use pulse_core::{AnalyzedArticle, CompanyReport, ComparativeReport, Result};
}
