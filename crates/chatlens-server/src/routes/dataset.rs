use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chatlens_schema::TranscriptRecord;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub total_transcripts: usize,
    pub dataset_error: Option<String>,
    pub summarizer_configured: bool,
    pub loaded_at: String,
}

#[derive(Serialize)]
pub struct DebugTranscripts {
    pub first_5_transcripts: Vec<String>,
    pub fields: Vec<&'static str>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/debug-transcripts", get(debug_transcripts))
        .route("/dataset-summary", get(dataset_summary))
}

async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "chatlens API is running" }))
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let status = if state.index.load_error().is_some() {
        "degraded"
    } else {
        "ok"
    };
    Json(HealthReport {
        status,
        total_transcripts: state.index.len(),
        dataset_error: state.index.load_error().map(String::from),
        summarizer_configured: state.summarizer_configured,
        loaded_at: state.index.loaded_at().to_rfc3339(),
    })
}

async fn debug_transcripts(State(state): State<AppState>) -> Json<DebugTranscripts> {
    Json(DebugTranscripts {
        first_5_transcripts: state.index.first_ids(5),
        fields: TranscriptRecord::field_names().to_vec(),
    })
}

async fn dataset_summary(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let summary = state.index.summary();
    let body = serde_json::to_value(&summary).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": e.to_string() })),
        )
    })?;
    Ok(Json(body))
}
