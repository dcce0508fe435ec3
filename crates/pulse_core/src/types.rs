use serde::{Deserialize, Serialize};
use std::fmt;

fn default_article_count() -> usize {
    10
}

/// One analysis request, as received from the web API or CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub company_name: String,
    #[serde(default = "default_article_count")]
    pub num_articles: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Classifier verdict for one article body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl SentimentScore {
    /// Default returned when the model is unavailable or errors out.
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.5,
        }
    }
}

/// A scraped article before sentiment/topic processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    pub url: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub published_at: Option<String>,
}

/// A scraped article after sentiment and topic processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyzedArticle {
    pub title: String,
    pub summary: String,
    pub sentiment: Sentiment,
    pub topics: Vec<String>,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Per-label article tally. All three labels are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// A generated statement contrasting sentiment or topic patterns
/// across articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoverageDifference {
    pub comparison: String,
    pub impact: String,
}

/// Cross-article aggregate: distribution, common topics, narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparativeReport {
    #[serde(rename = "Sentiment Distribution")]
    pub sentiment_distribution: SentimentDistribution,
    #[serde(rename = "Coverage Differences")]
    pub coverage_differences: Vec<CoverageDifference>,
    #[serde(rename = "Common Topics")]
    pub common_topics: Vec<String>,
    #[serde(rename = "Final Sentiment Analysis")]
    pub final_sentiment: String,
}

impl ComparativeReport {
    /// Zero-filled fallback used when there is no article batch to
    /// aggregate.
    pub fn empty() -> Self {
        Self {
            sentiment_distribution: SentimentDistribution::default(),
            coverage_differences: Vec::new(),
            common_topics: vec!["No common topics".to_string()],
            final_sentiment: "Could not determine overall sentiment.".to_string(),
        }
    }
}

/// Top-level result of one pipeline run. Immutable once assembled;
/// cached externally keyed by (company, article count).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyReport {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<AnalyzedArticle>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub comparative: ComparativeReport,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Audio")]
    pub audio: Option<String>,
}

impl CompanyReport {
    /// Uniform error shape: empty articles, empty comparative block, an
    /// explanatory message where the summary would be.
    pub fn failed(company: &str, message: &str) -> Self {
        Self {
            company: company.to_string(),
            articles: Vec::new(),
            comparative: ComparativeReport::empty(),
            summary: message.to_string(),
            audio: None,
        }
    }
}
