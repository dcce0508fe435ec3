use async_trait::async_trait;
use pulse_core::{CompanyReport, ReportStore, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

struct MemoryStore {
    // (company, article count) -> report, in insertion order so
    // find_by_company can return the most recent run.
    reports: Vec<((String, usize), CompanyReport)>,
    audio: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    fn new() -> Self {
        Self {
            reports: Vec::new(),
            audio: HashMap::new(),
        }
    }

    fn store_report(&mut self, report: &CompanyReport, num_articles: usize) {
        let key = (report.company.clone(), num_articles);
        if let Some((_, existing)) = self.reports.iter_mut().find(|(k, _)| *k == key) {
            *existing = report.clone();
        } else {
            self.reports.push((key, report.clone()));
        }
    }

    fn get_report(&self, company: &str, num_articles: usize) -> Option<CompanyReport> {
        self.reports
            .iter()
            .find(|((c, n), _)| c == company && *n == num_articles)
            .map(|(_, report)| report.clone())
    }

    fn find_by_company(&self, company: &str) -> Option<CompanyReport> {
        self.reports
            .iter()
            .rev()
            .find(|((c, _), _)| c == company)
            .map(|(_, report)| report.clone())
    }

    fn list_companies(&self) -> Vec<String> {
        let mut companies = Vec::new();
        for ((company, _), _) in &self.reports {
            if !companies.contains(company) {
                companies.push(company.clone());
            }
        }
        companies
    }
}

/// In-memory report cache. Cheap to clone via `Arc`; all access goes
/// through an async `RwLock`.
pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportStore for MemoryStorage {
    async fn store_report(&self, report: &CompanyReport, num_articles: usize) -> Result<()> {
        let mut store = self.store.write().await;
        store.store_report(report, num_articles);
        Ok(())
    }

    async fn get_report(
        &self,
        company: &str,
        num_articles: usize,
    ) -> Result<Option<CompanyReport>> {
        let store = self.store.read().await;
        Ok(store.get_report(company, num_articles))
    }

    async fn find_by_company(&self, company: &str) -> Result<Option<CompanyReport>> {
        let store = self.store.read().await;
        Ok(store.find_by_company(company))
    }

    async fn store_audio(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let mut store = self.store.write().await;
        store.audio.insert(key.to_string(), bytes);
        Ok(())
    }

    async fn get_audio(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let store = self.store.read().await;
        Ok(store.audio.get(key).cloned())
    }

    async fn list_companies(&self) -> Result<Vec<String>> {
        let store = self.store.read().await;
        Ok(store.list_companies())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_report_round_trip() {
        let storage = MemoryStorage::new();
        let report = CompanyReport::failed("Acme", "no news");
        storage.store_report(&report, 10).await.unwrap();

        let found = storage.get_report("Acme", 10).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().company, "Acme");

        assert!(storage.get_report("Acme", 5).await.unwrap().is_none());
        assert!(storage.get_report("Other", 10).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_company_returns_latest() {
        let storage = MemoryStorage::new();
        let first = CompanyReport::failed("Acme", "first");
        let second = CompanyReport::failed("Acme", "second");
        storage.store_report(&first, 5).await.unwrap();
        storage.store_report(&second, 10).await.unwrap();

        let found = storage.find_by_company("Acme").await.unwrap().unwrap();
        assert_eq!(found.summary, "second");
    }

    #[tokio::test]
    async fn test_audio_round_trip() {
        let storage = MemoryStorage::new();
        storage
            .store_audio("acme_10", vec![0x49, 0x44, 0x33])
            .await
            .unwrap();
        let bytes = storage.get_audio("acme_10").await.unwrap().unwrap();
        assert_eq!(bytes.len(), 3);
        assert!(storage.get_audio("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_companies() {
        let storage = MemoryStorage::new();
        storage
            .store_report(&CompanyReport::failed("Acme", ""), 10)
            .await
            .unwrap();
        storage
            .store_report(&CompanyReport::failed("Globex", ""), 10)
            .await
            .unwrap();
        storage
            .store_report(&CompanyReport::failed("Acme", ""), 5)
            .await
            .unwrap();

        let companies = storage.list_companies().await.unwrap();
        assert_eq!(companies, vec!["Acme".to_string(), "Globex".to_string()]);
    }
}
