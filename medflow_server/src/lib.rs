//! Router and handlers for the MedFlow suggestion gateway.
//!
//! Kept out of `main.rs` so the HTTP contract is testable with
//! `tower::ServiceExt::oneshot` and no bound socket.

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info, warn};
use medflow_ai::{simulated_suggestion, SuggestClient};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

/// Shared handler state. `client` is `None` when no upstream API key is
/// configured; the suggest endpoint then serves the simulated payload.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub client: Option<SuggestClient>,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/ai-suggest", post(ai_suggest))
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /api/ai-suggest
///
/// The body is read as loose JSON and `transcript` checked by hand: a typed
/// extractor would turn an absent field into a 422, and the published
/// contract is 400. Without an upstream key the response is the simulated
/// suggestion, byte-for-byte the payload clients already pin in their tests.
/// Upstream detail never reaches the response body; it goes to the log and
/// the client sees one fixed error string.
async fn ai_suggest(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let transcript = body
        .get("transcript")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let Some(transcript) = transcript else {
        warn!("ai-suggest rejected: transcript missing or empty");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Transcript is required" })),
        )
            .into_response();
    };

    let Some(client) = &state.client else {
        info!(
            "ai-suggest served simulated suggestion ({} byte transcript)",
            transcript.len()
        );
        return Json(simulated_suggestion()).into_response();
    };

    match client.suggest(transcript).await {
        Ok(suggestion) => {
            info!(
                "ai-suggest ok: {} diagnoses, {} recommendations",
                suggestion.diagnoses.len(),
                suggestion.recommendations.len()
            );
            Json(suggestion).into_response()
        }
        Err(err) => {
            error!("ai-suggest upstream failure: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to get AI suggestions" })),
            )
                .into_response()
        }
    }
}
