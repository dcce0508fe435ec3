use pulse_core::{
    AnalyzedArticle, CompanyReport, RawArticle, ReportStore, Result, SentimentModel,
    SpeechSynthesizer,
};
use pulse_scrapers::{ArticleExtractor, GoogleNewsDiscovery};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::comparative;
use crate::sentiment::SentimentScorer;
use crate::summary::{SummaryRenderer, DEFAULT_LOCALE};
use crate::topics::TopicExtractor;

/// Key under which a run's audio blob is stored, shared with the report
/// cache key.
pub fn audio_key(company_name: &str, num_articles: usize) -> String {
    format!(
        "{}_{}.mp3",
        company_name.to_lowercase().replace(' ', "_"),
        num_articles
    )
}

/// Sequences discovery, extraction, scoring, aggregation, rendering and
/// synthesis for one request. `run` is the sole place total failure is
/// absorbed; every inner stage degrades to a default on its own.
pub struct Pipeline {
    discovery: GoogleNewsDiscovery,
    extractor: ArticleExtractor,
    scorer: SentimentScorer,
    topics: TopicExtractor,
    renderer: SummaryRenderer,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn ReportStore>,
    locale: String,
}

impl Pipeline {
    pub fn new(
        model: Arc<dyn SentimentModel>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: Arc<dyn ReportStore>,
    ) -> Result<Self> {
        Ok(Self {
            discovery: GoogleNewsDiscovery::new()?,
            extractor: ArticleExtractor::new()?,
            scorer: SentimentScorer::new(model),
            topics: TopicExtractor::new(),
            renderer: SummaryRenderer::new(),
            synthesizer,
            store,
            locale: DEFAULT_LOCALE.to_string(),
        })
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn with_discovery(mut self, discovery: GoogleNewsDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    pub fn with_extractor(mut self, extractor: ArticleExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_renderer(mut self, renderer: SummaryRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Runs the full pipeline. Never fails: an error escaping the inner
    /// run is converted into the uniform error-shaped report here.
    pub async fn run(&self, company_name: &str, num_articles: usize) -> CompanyReport {
        match self.run_inner(company_name, num_articles).await {
            Ok(report) => report,
            Err(e) => {
                error!("Pipeline failed for {}: {}", company_name, e);
                CompanyReport::failed(company_name, "Error processing news.")
            }
        }
    }

    async fn run_inner(&self, company_name: &str, num_articles: usize) -> Result<CompanyReport> {
        let urls = match self.discovery.discover(company_name, num_articles).await {
            Ok(urls) => urls,
            Err(e) => {
                warn!("News search failed for {}: {}", company_name, e);
                Vec::new()
            }
        };

        let raw_articles = self.collect_articles(&urls, num_articles).await;
        info!(
            "Successfully extracted {} articles about {}",
            raw_articles.len(),
            company_name
        );

        // Scoring has no cross-article dependency; run it concurrently,
        // order preserved by join_all.
        let scores = futures::future::join_all(
            raw_articles.iter().map(|article| self.scorer.score(&article.content)),
        )
        .await;

        let articles: Vec<AnalyzedArticle> = raw_articles
            .iter()
            .zip(scores)
            .map(|(raw, score)| AnalyzedArticle {
                title: raw.title.clone(),
                summary: raw.summary.clone(),
                sentiment: score.sentiment,
                topics: self.topics.extract(&raw.content),
                url: raw.url.clone(),
            })
            .collect();

        let comparative = comparative::aggregate(&articles);
        let summary = self.renderer.render(company_name, &comparative, &self.locale);

        let audio = match self.synthesizer.synthesize(&summary, &self.locale).await {
            Ok(bytes) => {
                let key = audio_key(company_name, num_articles);
                self.store.store_audio(&key, bytes).await?;
                Some(key)
            }
            Err(e) => {
                warn!("Speech synthesis failed for {}: {}", company_name, e);
                None
            }
        };

        let report = CompanyReport {
            company: company_name.to_string(),
            articles,
            comparative,
            summary,
            audio,
        };
        self.store.store_report(&report, num_articles).await?;
        Ok(report)
    }

    /// Extracts candidates in discovery order, dropping failures, until
    /// enough valid articles have accumulated or candidates run out.
    async fn collect_articles(&self, urls: &[String], num_articles: usize) -> Vec<RawArticle> {
        let mut articles = Vec::new();
        for url in urls {
            if articles.len() >= num_articles {
                break;
            }
            match self.extractor.extract(url).await {
                Ok(article) => {
                    info!("Successfully scraped article: {}", article.title);
                    articles.push(article);
                }
                Err(e) => debug!("Dropping candidate {}: {}", url, e),
            }
        }
        articles
    }
}
