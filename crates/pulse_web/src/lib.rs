use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/results/:company", get(handlers::get_results))
        .route("/api/audio/:company", get(handlers::get_audio))
        .route("/api/companies", get(handlers::list_companies))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use pulse_core::{AnalysisRequest, CompanyReport, Result};
}
