use async_trait::async_trait;

use crate::types::CompanyReport;
use crate::Result;

/// Result cache keyed by (company, article count). The pipeline assumes
/// at most one writer per key at a time; callers serialize duplicate
/// requests for the same key.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Store a finished report under its request key.
    async fn store_report(&self, report: &CompanyReport, num_articles: usize) -> Result<()>;

    /// Fetch the report for an exact (company, article count) key.
    async fn get_report(&self, company: &str, num_articles: usize)
        -> Result<Option<CompanyReport>>;

    /// Fetch the most recently stored report for a company, any count.
    async fn find_by_company(&self, company: &str) -> Result<Option<CompanyReport>>;

    /// Store an audio blob under a string key.
    async fn store_audio(&self, key: &str, bytes: Vec<u8>) -> Result<()>;

    /// Fetch an audio blob by key.
    async fn get_audio(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// List all companies with a stored report.
    async fn list_companies(&self) -> Result<Vec<String>>;
}
