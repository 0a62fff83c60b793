use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    error::{AppError, AppResult},
    models::{SourceFile, SourceKind},
    state::AppState,
};

const UPLOAD_ERROR: &str = "File upload failed";
const MISSING_FIELDS: &str = "File and workspaceId are required";

pub const AUDIO_ADVISORY: &str = "Audio file stored but not yet queryable";
pub const UPLOAD_OK: &str = "File processed successfully";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesQuery {
    #[serde(default)]
    workspace_id: Option<String>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    success: bool,
    file: SourceFile,
    message: String,
}

#[derive(Serialize)]
pub struct FileListResponse {
    success: bool,
    files: Vec<SourceFile>,
}

pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(String, String, u64)> = None;
    let mut workspace_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        error!(error = %err, "invalid multipart data");
        AppError::internal(UPLOAD_ERROR)
    })? {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(|n| n.to_string());
                let content_type = field
                    .content_type()
                    .map(|mime| mime.to_string())
                    .unwrap_or_default();
                let data = field.bytes().await.map_err(|err| {
                    error!(error = %err, "failed to read file bytes");
                    AppError::internal(UPLOAD_ERROR)
                })?;
                if let Some(file_name) = file_name {
                    file = Some((file_name, content_type, data.len() as u64));
                }
            }
            Some("workspaceId") => {
                let value = field.text().await.map_err(|err| {
                    error!(error = %err, "invalid workspaceId field");
                    AppError::internal(UPLOAD_ERROR)
                })?;
                if !value.trim().is_empty() {
                    workspace_id = Some(value.trim().to_string());
                }
            }
            _ => {}
        }
    }

    let ((file_name, content_type, byte_len), workspace_id) = match (file, workspace_id) {
        (Some(file), Some(workspace_id)) => (file, workspace_id),
        _ => return Err(AppError::bad_request(MISSING_FIELDS)),
    };

    let source = state
        .sources
        .add(&workspace_id, &file_name, byte_len, &content_type)
        .await;

    // Audio sources are accepted but the analysis engine cannot query them
    // yet; the caller learns that through the advisory message only.
    let message = if source.kind == SourceKind::Audio {
        AUDIO_ADVISORY
    } else {
        UPLOAD_OK
    };

    Ok(Json(UploadResponse {
        success: true,
        file: source,
        message: message.to_string(),
    }))
}

pub async fn list_files(
    State(state): State<AppState>,
    Query(query): Query<ListFilesQuery>,
) -> AppResult<Json<FileListResponse>> {
    let workspace_id = query
        .workspace_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("workspaceId is required"))?;

    let files = state.sources.list(workspace_id).await;

    Ok(Json(FileListResponse {
        success: true,
        files,
    }))
}
