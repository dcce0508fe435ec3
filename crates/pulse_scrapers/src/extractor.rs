use pulse_core::{Error, RawArticle, Result};
use rand::Rng;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

const MIN_CONTENT_CHARS: usize = 100;
const SUMMARY_SENTENCES: usize = 3;
const SUMMARY_MAX_CHARS: usize = 300;

const CONTENT_CLASS_KEYWORDS: &[&str] = &["article", "content", "story", "body"];
const DATE_CLASS_KEYWORDS: &[&str] = &["date", "time", "published"];

/// One way of locating the article body in a document. Strategies are
/// tried in order; the first one producing non-empty text wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStrategy {
    /// Paragraphs inside article/div containers whose class attribute
    /// matches a content-indicating keyword.
    ContentContainers,
    /// Every paragraph in the document.
    AllParagraphs,
}

impl ContentStrategy {
    fn extract(&self, document: &Html) -> String {
        match self {
            ContentStrategy::ContentContainers => {
                let container = Selector::parse("article, div").unwrap();
                let paragraph = Selector::parse("p").unwrap();
                let mut text = String::new();
                for element in document.select(&container) {
                    let class = element.value().attr("class").unwrap_or("").to_lowercase();
                    if !CONTENT_CLASS_KEYWORDS.iter().any(|k| class.contains(k)) {
                        continue;
                    }
                    for p in element.select(&paragraph) {
                        text.push_str(&p.text().collect::<String>());
                        text.push(' ');
                    }
                }
                text
            }
            ContentStrategy::AllParagraphs => {
                let paragraph = Selector::parse("p").unwrap();
                let mut text = String::new();
                for p in document.select(&paragraph) {
                    text.push_str(&p.text().collect::<String>());
                    text.push(' ');
                }
                text
            }
        }
    }
}

/// Fetches one candidate URL and parses it into a `RawArticle`.
/// Every step is best-effort; a failed candidate is simply dropped by
/// the caller.
pub struct ArticleExtractor {
    client: reqwest::Client,
    strategies: Vec<ContentStrategy>,
    delay_range: Option<(f64, f64)>,
}

impl ArticleExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: crate::build_client()?,
            strategies: vec![
                ContentStrategy::ContentContainers,
                ContentStrategy::AllParagraphs,
            ],
            // Politeness pause before each fetch, in seconds.
            delay_range: Some((1.0, 3.0)),
        })
    }

    pub fn with_strategies(mut self, strategies: Vec<ContentStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn without_delay(mut self) -> Self {
        self.delay_range = None;
        self
    }

    pub async fn extract(&self, url: &str) -> Result<RawArticle> {
        if let Some((min, max)) = self.delay_range {
            let secs = rand::thread_rng().gen_range(min..max);
            tokio::time::sleep(Duration::from_secs_f64(secs)).await;
        }

        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        debug!("Fetched {} ({} bytes)", url, html.len());

        self.parse_article(url, &html)
    }

    /// Parses a fetched document. Synchronous so the non-`Send` parse
    /// tree never crosses an await point.
    pub fn parse_article(&self, url: &str, html: &str) -> Result<RawArticle> {
        let document = Html::parse_document(html);

        let title = document
            .select(&Selector::parse("title").unwrap())
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "No title found".to_string());

        let mut content = String::new();
        for strategy in &self.strategies {
            content = strategy.extract(&document);
            if !content.trim().is_empty() {
                break;
            }
        }
        let content = normalize_whitespace(&content);

        if content.chars().count() <= MIN_CONTENT_CHARS {
            return Err(Error::Scraping(format!(
                "Content too short ({} chars) for {}",
                content.chars().count(),
                url
            )));
        }

        let summary = summarize(&content);
        let published_at = extract_publish_date(&document);

        Ok(RawArticle {
            url: url.to_string(),
            title,
            content,
            summary,
            published_at,
        })
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First 3 sentence-delimited segments, hard-capped at 300 characters
/// with an ellipsis when truncated.
fn summarize(content: &str) -> String {
    let summary = content
        .split(['.', '!', '?'])
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    if summary.chars().count() > SUMMARY_MAX_CHARS {
        let truncated: String = summary.chars().take(SUMMARY_MAX_CHARS - 3).collect();
        format!("{}...", truncated)
    } else {
        summary
    }
}

/// Best-effort publish date from keyword-matched elements. Absence is
/// not an error.
fn extract_publish_date(document: &Html) -> Option<String> {
    let selector = Selector::parse("time, span, p, div").unwrap();
    document
        .select(&selector)
        .find(|el| {
            let class = el.value().attr("class").unwrap_or("").to_lowercase();
            DATE_CLASS_KEYWORDS.iter().any(|k| class.contains(k))
        })
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ArticleExtractor {
        ArticleExtractor::new().unwrap().without_delay()
    }

    fn page_with_body(body: &str) -> String {
        format!(
            r#"<html><head><title>Acme profits rise</title></head>
               <body><div class="article-body"><p>{}</p></div></body></html>"#,
            body
        )
    }

    #[test]
    fn test_rejects_short_content() {
        let body = "x".repeat(99);
        let result = extractor().parse_article("http://test.com", &page_with_body(&body));
        assert!(result.is_err());
    }

    #[test]
    fn test_accepts_long_enough_content() {
        let body = "x".repeat(101);
        let article = extractor()
            .parse_article("http://test.com", &page_with_body(&body))
            .unwrap();
        assert_eq!(article.title, "Acme profits rise");
        assert_eq!(article.content.chars().count(), 101);
    }

    #[test]
    fn test_title_fallback() {
        let body = "y".repeat(150);
        let html = format!(
            r#"<html><body><div class="content"><p>{}</p></div></body></html>"#,
            body
        );
        let article = extractor().parse_article("http://test.com", &html).unwrap();
        assert_eq!(article.title, "No title found");
    }

    #[test]
    fn test_paragraph_fallback_strategy() {
        // No content-indicating classes anywhere, so the container
        // strategy yields nothing and the paragraph strategy kicks in.
        let body = "z".repeat(150);
        let html = format!(
            r#"<html><head><title>T</title></head>
               <body><div class="sidebar"><p>{}</p></div></body></html>"#,
            body
        );
        let article = extractor().parse_article("http://test.com", &html).unwrap();
        assert_eq!(article.content.chars().count(), 150);
    }

    #[test]
    fn test_summary_untruncated() {
        let content = "First sentence. Second sentence! Third sentence? Fourth sentence.";
        let summary = summarize(content);
        assert_eq!(summary, "First sentence  Second sentence  Third sentence");
    }

    #[test]
    fn test_summary_truncated_to_exactly_300() {
        let sentence = "a".repeat(150);
        let content = format!("{s}. {s}. {s}. tail", s = sentence);
        let summary = summarize(&content);
        assert_eq!(summary.chars().count(), 300);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_publish_date_extraction() {
        let body = "w".repeat(150);
        let html = format!(
            r#"<html><head><title>T</title></head><body>
               <span class="published-date">March 3, 2025</span>
               <div class="article"><p>{}</p></div></body></html>"#,
            body
        );
        let article = extractor().parse_article("http://test.com", &html).unwrap();
        assert_eq!(article.published_at, Some("March 3, 2025".to_string()));
    }

    #[test]
    fn test_publish_date_absent() {
        let body = "w".repeat(150);
        let article = extractor()
            .parse_article("http://test.com", &page_with_body(&body))
            .unwrap();
        assert!(article.published_at.is_none());
    }

    #[test]
    fn test_whitespace_normalization() {
        assert_eq!(
            normalize_whitespace("  a \n\n b\t c  "),
            "a b c".to_string()
        );
    }
}
