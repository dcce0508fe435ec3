use lazy_static::lazy_static;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

pub mod discovery;
pub mod extractor;

pub use discovery::GoogleNewsDiscovery;
pub use extractor::{ArticleExtractor, ContentStrategy};

pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    // Browser-identifying headers so news sites serve us the same markup
    // they serve a desktop browser.
    pub(crate) static ref BROWSER_HEADERS: HeaderMap = {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.5"),
        );
        headers.insert(
            reqwest::header::CONNECTION,
            HeaderValue::from_static("keep-alive"),
        );
        headers.insert(
            reqwest::header::UPGRADE_INSECURE_REQUESTS,
            HeaderValue::from_static("1"),
        );
        headers.insert(
            reqwest::header::CACHE_CONTROL,
            HeaderValue::from_static("max-age=0"),
        );
        headers
    };
}

pub(crate) fn build_client() -> pulse_core::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .default_headers(BROWSER_HEADERS.clone())
        .build()
        .map_err(pulse_core::Error::Http)
}

pub mod prelude {
    pub use super::discovery::GoogleNewsDiscovery;
    pub use super::extractor::{ArticleExtractor, ContentStrategy};
    pub use pulse_core::{RawArticle, Result};
}
