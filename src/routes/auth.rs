use axum::{extract::State, http::StatusCode, Json};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    state::AppState,
};

use super::parse_body;

const LOGIN_ERROR: &str = "Internal server error";
const SIGNUP_ERROR: &str = "Internal server error";

#[derive(Deserialize)]
struct CredentialsRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Serialize)]
pub struct SessionResponse {
    success: bool,
    user: AuthUser,
    token: String,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<SessionResponse>> {
    let payload: CredentialsRequest = parse_body(&body, LOGIN_ERROR)?;

    let (email, password) = match (present(&payload.email), present(&payload.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(AppError::unauthorized("Invalid credentials")),
    };

    let session = state.auth.login(email, password).await.map_err(|err| {
        error!(error = %err, "login failed");
        AppError::internal(LOGIN_ERROR)
    })?;

    Ok(Json(SessionResponse {
        success: true,
        user: session.user,
        token: session.token,
    }))
}

pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let payload: CredentialsRequest = parse_body(&body, SIGNUP_ERROR)?;

    let (email, password) = match (present(&payload.email), present(&payload.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(AppError::bad_request("Missing required fields")),
    };

    let session = state
        .auth
        .signup(email, password, present(&payload.name))
        .await
        .map_err(|err| {
            error!(error = %err, "signup failed");
            AppError::internal(SIGNUP_ERROR)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            success: true,
            user: session.user,
            token: session.token,
        }),
    ))
}
