use anyhow::Result;
use async_trait::async_trait;
use rand::{rngs::OsRng, RngCore};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
}

/// Credential checking and account creation. The handlers only require that
/// a session carries an identity and an opaque bearer token; a real identity
/// provider slots in behind this trait.
#[async_trait]
pub trait AuthProvider: Send + Sync + 'static {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;

    async fn signup(&self, email: &str, password: &str, name: Option<&str>) -> Result<AuthSession>;
}

/// Accepts any non-empty credentials. Logins resolve to the fixed user id
/// "1" (the same default the settings and workspace handlers assume);
/// signups allocate a fresh id.
#[derive(Default)]
pub struct StubAuthProvider;

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthSession> {
        Ok(AuthSession {
            user: AuthUser {
                id: "1".to_string(),
                email: email.to_string(),
                name: "User".to_string(),
            },
            token: generate_token(),
        })
    }

    async fn signup(&self, email: &str, _password: &str, name: Option<&str>) -> Result<AuthSession> {
        Ok(AuthSession {
            user: AuthUser {
                id: Uuid::new_v4().to_string(),
                email: email.to_string(),
                name: name.unwrap_or("User").to_string(),
            },
            token: generate_token(),
        })
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
