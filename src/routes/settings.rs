use axum::{
    extract::{Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{Settings, SettingsPatch},
    state::AppState,
};

use super::parse_body;

const UPDATE_ERROR: &str = "Failed to update settings";

pub(crate) const DEFAULT_USER_ID: &str = "1";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsQuery {
    #[serde(default)]
    user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSettingsRequest {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(flatten)]
    patch: SettingsPatch,
}

#[derive(Serialize)]
pub struct SettingsResponse {
    success: bool,
    settings: Settings,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub async fn get_settings(
    State(state): State<AppState>,
    Query(query): Query<SettingsQuery>,
) -> Json<SettingsResponse> {
    let user_id = query.user_id.as_deref().unwrap_or(DEFAULT_USER_ID);
    let settings = state.settings.get(user_id).await;

    Json(SettingsResponse {
        success: true,
        settings,
        message: None,
    })
}

pub async fn update_settings(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<SettingsResponse>> {
    let payload: UpdateSettingsRequest = parse_body(&body, UPDATE_ERROR)?;
    let user_id = payload.user_id.as_deref().unwrap_or(DEFAULT_USER_ID);

    let settings = state.settings.update(user_id, payload.patch).await;

    Ok(Json(SettingsResponse {
        success: true,
        settings,
        message: Some("Settings updated successfully".to_string()),
    }))
}
