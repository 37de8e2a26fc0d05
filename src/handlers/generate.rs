//! Generation endpoints: single recipe and 7-day meal plan.
//!
//! Both endpoints always answer HTTP 200 with a single string field;
//! validation problems, an unresolved model, and provider failures are all
//! reported inside that string rather than as HTTP errors.

use crate::prompt::{build_prompt, PromptKind};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeekplanRequest {
    #[serde(default)]
    pub ingredients: String,
}

#[derive(Debug, Serialize)]
pub struct WeekplanResponse {
    pub plan: String,
}

/// `POST /generate` — build a recipe from an ingredient list or dish name.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Json<GenerateResponse> {
    // Malformed or absent bodies are treated as an empty request, never as
    // a parse error.
    let request: GenerateRequest = serde_json::from_slice(&body).unwrap_or_default();
    let query = request.query.trim();

    if query.is_empty() {
        return Json(GenerateResponse {
            result: "⚠️ Please enter an ingredient or dish name.".to_string(),
        });
    }

    let result = run_generation(&state, PromptKind::Recipe, query, "recipe").await;
    Json(GenerateResponse { result })
}

/// `POST /weekplan` — build a 7-day meal plan from an ingredient list.
pub async fn weekplan(State(state): State<AppState>, body: Bytes) -> Json<WeekplanResponse> {
    let request: WeekplanRequest = serde_json::from_slice(&body).unwrap_or_default();
    let ingredients = request.ingredients.trim();

    if ingredients.is_empty() {
        return Json(WeekplanResponse {
            plan: "⚠️ Please enter some ingredients for the weekly plan.".to_string(),
        });
    }

    let plan = run_generation(&state, PromptKind::WeeklyPlan, ingredients, "weekly plan").await;
    Json(WeekplanResponse { plan })
}

/// Shared generation path: prompt, model call, text extraction. Every
/// failure is folded into the returned string.
async fn run_generation(state: &AppState, kind: PromptKind, input: &str, task: &str) -> String {
    let Some(handle) = &state.model else {
        return "❌ AI model is not available. Check your API key or model configuration."
            .to_string();
    };

    let prompt = build_prompt(kind, input);

    match state.provider.generate(handle.name(), &prompt).await {
        Ok(reply) => match reply.into_text() {
            Some(text) => text,
            None => {
                tracing::warn!(model = %handle.name(), "Model returned no usable text");
                format!("❌ Error generating {}: Empty response from model.", task)
            }
        },
        Err(e) => {
            tracing::warn!(model = %handle.name(), error = %e, "Generation failed");
            format!("❌ Error generating {}: {}", task, e)
        }
    }
}
