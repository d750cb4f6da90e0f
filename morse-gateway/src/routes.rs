//! Axum route handlers for the Morse gateway API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use morse_core::{translate, MorseTable};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

// ── Shared state ─────────────────────────────────────────────────────────────

type Table = Arc<MorseTable>;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router, mounting the translation routes under
/// `prefix` (e.g. `/api/morse`, or `""` for the root). Request bodies are
/// not size-limited.
pub fn create_router(table: Table, prefix: &str) -> Router {
    Router::new()
        .route(&format!("{prefix}/text-to-morse"), post(text_to_morse))
        .route(&format!("{prefix}/morse-to-text"), post(morse_to_text))
        .route("/health", get(health))
        .with_state(table)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

/// `POST {prefix}/text-to-morse` — encode the raw body.
///
/// Invalid UTF-8 is replaced with U+FFFD, which then encodes to the sentinel.
pub async fn text_to_morse(State(table): State<Table>, body: Bytes) -> String {
    let text = String::from_utf8_lossy(&body);
    let morse = translate::encode(&table, &text);
    debug!(input_len = text.len(), output_len = morse.len(), "encoded text");
    morse
}

/// `POST {prefix}/morse-to-text` — decode the raw body.
pub async fn morse_to_text(State(table): State<Table>, body: Bytes) -> String {
    let morse = String::from_utf8_lossy(&body);
    let text = translate::decode(&table, &morse);
    debug!(input_len = morse.len(), output_len = text.len(), "decoded morse");
    text
}
