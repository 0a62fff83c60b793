use axum::http::HeaderValue;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::error;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub mod auth;
pub mod chat;
pub mod health;
pub mod settings;
pub mod upload;
pub mod workspaces;

/// Bodies are parsed by hand rather than through the `Json` extractor: a
/// malformed body is an internal failure (500 with the endpoint's fixed
/// message), not a validation failure, and the parse detail stays in the log.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8], error_message: &str) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|err| {
        error!(error = %err, "malformed request body");
        AppError::internal(error_message)
    })
}

pub fn create_router(state: AppState) -> Router<()> {
    let cors = if let Some(origins) = state.config.cors_allowed_origin.as_ref() {
        let headers: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|value| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| {
                    trimmed
                        .parse::<HeaderValue>()
                        .expect("invalid CORS allowed origin")
                })
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(headers))
            .allow_methods(tower_http::cors::AllowMethods::mirror_request())
            .allow_headers(tower_http::cors::AllowHeaders::mirror_request())
            .allow_credentials(true)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(tower_http::cors::AllowMethods::mirror_request())
            .allow_headers(tower_http::cors::AllowHeaders::mirror_request())
            .allow_credentials(true)
    };

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup));

    Router::new()
        .nest("/auth", auth_routes)
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route(
            "/workspaces",
            get(workspaces::list_workspaces)
                .post(workspaces::create_workspace)
                .delete(workspaces::delete_workspace),
        )
        .route(
            "/upload",
            get(upload::list_files).post(upload::upload_file),
        )
        .route("/chat", get(chat::history).post(chat::send_message))
        .route("/health", get(health::health_check))
        .with_state(state)
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024 * 64))
}
