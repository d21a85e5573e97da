//! Chat relay HTTP handler.

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::relay::{ChatRequest, RelayError};
use crate::server::AppState;

/// POST /api/v1/chat
///
/// Forwards the conversation to the selected provider through the memory
/// proxy and relays the upstream chat-completion body unmodified.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>, RelayError> {
    let body = state.relay.forward(request).await?;
    Ok(Json(body))
}

// ============================================================================
// Tests
// ============================================================================
