use crate::services::providers::ProviderError;
use crate::services::resolver::PROBE_PROMPT;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// `GET /health` — re-probe the resolved model.
///
/// The one endpoint that surfaces a non-200 status, for automated
/// liveness checks. A never-resolved model counts as a failure.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let probe = match &state.model {
        Some(handle) => state
            .provider
            .generate(handle.name(), PROBE_PROMPT)
            .await
            .map(|_| ()),
        None => Err(ProviderError::NotConfigured(
            "no model resolved".to_string(),
        )),
    };

    match probe {
        Ok(()) => (StatusCode::OK, Json(json!({"status": "ok"}))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "detail": e.to_string()})),
        ),
    }
}
