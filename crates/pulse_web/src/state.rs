use pulse_analysis::Pipeline;
use pulse_core::ReportStore;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub store: Arc<dyn ReportStore>,
    // Keys with a pipeline run in progress. The store assumes at most
    // one writer per key; this set is what enforces it.
    pub in_flight: Mutex<HashSet<(String, usize)>>,
}

impl AppState {
    pub fn new(pipeline: Arc<Pipeline>, store: Arc<dyn ReportStore>) -> Self {
        Self {
            pipeline,
            store,
            in_flight: Mutex::new(HashSet::new()),
        }
    }
}
