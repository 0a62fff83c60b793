use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::Workspace,
    state::AppState,
};

use super::{parse_body, settings::DEFAULT_USER_ID};

const CREATE_ERROR: &str = "Internal server error";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkspacesQuery {
    #[serde(default)]
    user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateWorkspaceRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteWorkspaceQuery {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Serialize)]
pub struct WorkspaceListResponse {
    success: bool,
    workspaces: Vec<Workspace>,
}

#[derive(Serialize)]
pub struct WorkspaceResponse {
    success: bool,
    workspace: Workspace,
}

#[derive(Serialize)]
pub struct DeleteWorkspaceResponse {
    success: bool,
    message: String,
}

pub async fn list_workspaces(
    State(state): State<AppState>,
    Query(query): Query<ListWorkspacesQuery>,
) -> Json<WorkspaceListResponse> {
    let user_id = query.user_id.as_deref().unwrap_or(DEFAULT_USER_ID);
    let workspaces = state.workspaces.list(user_id).await;

    Json(WorkspaceListResponse {
        success: true,
        workspaces,
    })
}

pub async fn create_workspace(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<WorkspaceResponse>)> {
    let payload: CreateWorkspaceRequest = parse_body(&body, CREATE_ERROR)?;

    let name = payload.name.as_deref().unwrap_or_default();
    let user_id = payload.user_id.as_deref().unwrap_or(DEFAULT_USER_ID);

    let workspace = state
        .workspaces
        .create(user_id, name, payload.description)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WorkspaceResponse {
            success: true,
            workspace,
        }),
    ))
}

pub async fn delete_workspace(
    State(state): State<AppState>,
    Query(query): Query<DeleteWorkspaceQuery>,
) -> AppResult<Json<DeleteWorkspaceResponse>> {
    let id = query
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("Workspace ID is required"))?;

    // Deleting an id that was never created still reports success.
    state.workspaces.delete(id).await;

    Ok(Json(DeleteWorkspaceResponse {
        success: true,
        message: "Workspace deleted successfully".to_string(),
    }))
}
