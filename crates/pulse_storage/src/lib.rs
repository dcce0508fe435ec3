use pulse_core::{Error, ReportStore, Result};
use std::sync::Arc;

pub mod backends;

pub use backends::MemoryStorage;

/// Build a report store by backend name.
pub fn create_store(kind: &str) -> Result<Arc<dyn ReportStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        other => Err(Error::Storage(format!(
            "Unknown storage backend: {}",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::backends::MemoryStorage;
    pub use super::create_store;
    pub use pulse_core::ReportStore;
}
