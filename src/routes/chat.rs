use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    error::{AppError, AppResult},
    models::Message,
    state::AppState,
};

use super::parse_body;

const CHAT_ERROR: &str = "Chat request failed";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    workspace_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    #[serde(default)]
    workspace_id: Option<String>,
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    success: bool,
    response: Message,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    success: bool,
    messages: Vec<Message>,
}

/// Appends the user message and its synchronously produced assistant reply,
/// returning only the reply; the caller already rendered the user message
/// optimistically.
pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<SendMessageResponse>> {
    let payload: SendMessageRequest = parse_body(&body, CHAT_ERROR)?;

    let message = payload
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());
    let workspace_id = payload
        .workspace_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let (message, workspace_id) = match (message, workspace_id) {
        (Some(message), Some(workspace_id)) => (message, workspace_id),
        _ => {
            return Err(AppError::bad_request(
                "Message and workspaceId are required",
            ))
        }
    };

    // The keyword responder ignores the source list, but a retrieval-backed
    // replacement receives the workspace context through the same call.
    let sources = state.sources.list(workspace_id).await;
    let timeout = Duration::from_secs(state.config.responder_timeout_secs);

    let reply = match tokio::time::timeout(timeout, state.responder.respond(message, &sources))
        .await
    {
        Ok(Ok(reply)) => reply,
        Ok(Err(err)) => {
            error!(error = %err, "responder failed");
            return Err(AppError::internal(CHAT_ERROR));
        }
        Err(_) => {
            error!(timeout_secs = state.config.responder_timeout_secs, "responder timed out");
            return Err(AppError::internal(CHAT_ERROR));
        }
    };

    let (_user, assistant) = state
        .conversations
        .append_turn(workspace_id, message.to_string(), reply)
        .await;

    Ok(Json(SendMessageResponse {
        success: true,
        response: assistant,
    }))
}

pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistoryResponse>> {
    let workspace_id = query
        .workspace_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("workspaceId is required"))?;

    let messages = state.conversations.list(workspace_id).await;

    Ok(Json(HistoryResponse {
        success: true,
        messages,
    }))
}
