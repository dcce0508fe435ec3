use pulse_core::Result;
use scraper::{Html, Selector};
use tracing::info;
use url::Url;

/// Finds candidate article URLs for a company on the Google News search
/// surface. URLs are unverified; downstream must tolerate failures.
pub struct GoogleNewsDiscovery {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleNewsDiscovery {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: crate::build_client()?,
            base_url: "https://www.google.com/search".to_string(),
        })
    }

    /// Overrides the search surface, e.g. for a proxy or a test stub.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Returns up to `2 * requested_count` candidate URLs, since a
    /// fraction will fail to scrape downstream. A search failure is
    /// reported to the caller, not retried.
    pub async fn discover(&self, company_name: &str, requested_count: usize) -> Result<Vec<String>> {
        let query = company_name.replace(' ', "+");
        let search_url = format!("{}?q={}+news&tbm=nws", self.base_url, query);

        let response = self.client.get(&search_url).send().await?.error_for_status()?;
        let html = response.text().await?;

        let urls = Self::parse_result_links(&html, requested_count * 2);
        info!(
            "Found {} potential news articles about {}",
            urls.len(),
            company_name
        );
        Ok(urls)
    }

    /// Pulls article links out of a search results page. Links come
    /// either as Google redirect URLs (`/url?q=...&sa=...`) or direct
    /// absolute URLs.
    fn parse_result_links(html: &str, limit: usize) -> Vec<String> {
        let document = Html::parse_document(html);
        let result_selector = Selector::parse("div.SoaBEf").unwrap();
        let link_selector = Selector::parse("a").unwrap();

        let mut urls = Vec::new();
        for result in document.select(&result_selector) {
            if urls.len() >= limit {
                break;
            }
            let href = result
                .select(&link_selector)
                .next()
                .and_then(|link| link.value().attr("href"));
            let Some(href) = href else { continue };

            let candidate = if let Some(wrapped) = href.strip_prefix("/url?q=") {
                wrapped.split("&sa=").next().unwrap_or(wrapped)
            } else if href.starts_with("http") {
                href
            } else {
                continue;
            };

            if Url::parse(candidate).is_ok() {
                urls.push(candidate.to_string());
            }
        }
        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><body>
            <div class="SoaBEf">
                <a href="/url?q=https://example.com/story-1&sa=U&ved=x">Story 1</a>
            </div>
            <div class="SoaBEf">
                <a href="https://example.com/story-2">Story 2</a>
            </div>
            <div class="SoaBEf">
                <a href="/relative/not-an-article">Nope</a>
            </div>
            <div class="other">
                <a href="https://example.com/unrelated">Unrelated</a>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_result_links() {
        let urls = GoogleNewsDiscovery::parse_result_links(RESULTS_PAGE, 10);
        assert_eq!(
            urls,
            vec![
                "https://example.com/story-1".to_string(),
                "https://example.com/story-2".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_result_links_respects_limit() {
        let urls = GoogleNewsDiscovery::parse_result_links(RESULTS_PAGE, 1);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0], "https://example.com/story-1");
    }

    #[test]
    fn test_parse_result_links_empty_page() {
        let urls = GoogleNewsDiscovery::parse_result_links("<html></html>", 10);
        assert!(urls.is_empty());
    }
}
