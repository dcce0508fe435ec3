pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use error::Error;
pub use models::{SentimentModel, SpeechSynthesizer};
pub use storage::ReportStore;
pub use types::{
    AnalysisRequest, AnalyzedArticle, CompanyReport, ComparativeReport, CoverageDifference,
    RawArticle, Sentiment, SentimentDistribution, SentimentScore,
};

pub type Result<T> = std::result::Result<T, Error>;
