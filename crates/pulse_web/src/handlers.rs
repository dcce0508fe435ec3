use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pulse_core::AnalysisRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::AppState;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "News analyzer API is running" }))
}

/// Submit an analysis request. A cached report is returned immediately;
/// otherwise the pipeline runs as a background task and the caller polls
/// the results endpoint.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    let company_name = request.company_name;
    let num_articles = request.num_articles;

    if let Ok(Some(report)) = state.store.get_report(&company_name, num_articles).await {
        info!("Returning cached results for {}", company_name);
        return Json(report).into_response();
    }

    let key = (company_name.clone(), num_articles);
    {
        let mut in_flight = state.in_flight.lock().await;
        if !in_flight.insert(key.clone()) {
            info!("Analysis for {} already in progress", company_name);
            return processing_response(&company_name);
        }
    }

    let task_state = state.clone();
    tokio::spawn(async move {
        // The pipeline stores its own result; nothing to do with it here.
        task_state.pipeline.run(&key.0, key.1).await;
        task_state.in_flight.lock().await.remove(&key);
    });

    processing_response(&company_name)
}

fn processing_response(company_name: &str) -> Response {
    Json(json!({
        "status": "processing",
        "message": format!(
            "Analysis for {} started. Check /api/results/{} for results.",
            company_name, company_name
        ),
        "company": company_name,
    }))
    .into_response()
}

pub async fn get_results(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Response {
    match state.store.find_by_company(&company).await {
        Ok(Some(report)) => Json(report).into_response(),
        Ok(None) => not_found(format!(
            "No results found for {}. Analysis may still be processing.",
            company
        )),
        Err(e) => internal_error(e),
    }
}

pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Response {
    let report = match state.store.find_by_company(&company).await {
        Ok(report) => report,
        Err(e) => return internal_error(e),
    };

    let audio_key = report.and_then(|r| r.audio);
    let Some(audio_key) = audio_key else {
        return not_found(format!("No audio file found for {}", company));
    };

    match state.store.get_audio(&audio_key).await {
        Ok(Some(bytes)) => {
            ([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response()
        }
        Ok(None) => not_found(format!("No audio file found for {}", company)),
        Err(e) => internal_error(e),
    }
}

pub async fn list_companies(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list_companies().await {
        Ok(companies) => Json(json!({ "companies": companies })).into_response(),
        Err(e) => internal_error(e),
    }
}

fn not_found(detail: String) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
}

fn internal_error(e: pulse_core::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": e.to_string() })),
    )
        .into_response()
}
