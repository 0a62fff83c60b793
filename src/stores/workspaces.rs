use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult};
use crate::models::Workspace;

/// Workspace records scoped to a user id. `list` preserves insertion order;
/// `delete` of an id that does not exist is a silent success.
#[async_trait]
pub trait WorkspaceStore: Send + Sync + 'static {
    async fn list(&self, user_id: &str) -> Vec<Workspace>;

    async fn create(
        &self,
        user_id: &str,
        name: &str,
        description: Option<String>,
    ) -> StoreResult<Workspace>;

    async fn delete(&self, id: &str);
}

#[derive(Default)]
pub struct InMemoryWorkspaceStore {
    entries: RwLock<Vec<Workspace>>,
}

#[async_trait]
impl WorkspaceStore for InMemoryWorkspaceStore {
    async fn list(&self, user_id: &str) -> Vec<Workspace> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|workspace| workspace.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn create(
        &self,
        user_id: &str,
        name: &str,
        description: Option<String>,
    ) -> StoreResult<Workspace> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation(
                "Workspace name is required".to_string(),
            ));
        }

        let workspace = Workspace {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.unwrap_or_default(),
            pdf_count: 0,
            image_count: 0,
            audio_count: 0,
            modified: Utc::now(),
            user_id: user_id.to_string(),
        };

        let mut entries = self.entries.write().await;
        entries.push(workspace.clone());
        Ok(workspace)
    }

    async fn delete(&self, id: &str) {
        let mut entries = self.entries.write().await;
        entries.retain(|workspace| workspace.id != id);
    }
}
