use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chatlens_core::AnalyzeError;
use chatlens_schema::AnalysisReport;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub transcript_id: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze-transcript", post(analyze_transcript))
}

async fn analyze_transcript(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, (StatusCode, Json<serde_json::Value>)> {
    match state.analyzer.analyze(&body.transcript_id).await {
        Ok(report) => Ok(Json(report)),
        Err(AnalyzeError::TranscriptNotFound { transcript_id }) => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "detail": format!("Transcript ID {transcript_id} not found")
            })),
        )),
    }
}
