use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_RESPONDER_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origin: Option<String>,
    /// Upper bound on a single responder call. The in-process keyword
    /// responder never gets near it; it guards a future remote engine.
    pub responder_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("SERVER_PORT must be a valid u16")?;
        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN").ok();
        let responder_timeout_secs = env::var("RESPONDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_RESPONDER_TIMEOUT_SECS.to_string())
            .parse()
            .context("RESPONDER_TIMEOUT_SECS must be an integer")?;

        Ok(Self {
            server_host,
            server_port,
            cors_allowed_origin,
            responder_timeout_secs,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            cors_allowed_origin: None,
            responder_timeout_secs: DEFAULT_RESPONDER_TIMEOUT_SECS,
        }
    }
}
