use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{format_size, SourceFile, SourceKind};

/// Uploaded-file metadata scoped to a workspace id, kept in upload order.
/// Records are immutable once added; the kind is derived from the declared
/// content type at upload time and never changes.
#[async_trait]
pub trait SourceStore: Send + Sync + 'static {
    async fn list(&self, workspace_id: &str) -> Vec<SourceFile>;

    async fn add(
        &self,
        workspace_id: &str,
        file_name: &str,
        byte_len: u64,
        content_type: &str,
    ) -> SourceFile;

    async fn remove(&self, workspace_id: &str, source_id: &str);
}

#[derive(Default)]
pub struct InMemorySourceStore {
    by_workspace: RwLock<HashMap<String, Vec<SourceFile>>>,
}

#[async_trait]
impl SourceStore for InMemorySourceStore {
    async fn list(&self, workspace_id: &str) -> Vec<SourceFile> {
        let by_workspace = self.by_workspace.read().await;
        by_workspace
            .get(workspace_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn add(
        &self,
        workspace_id: &str,
        file_name: &str,
        byte_len: u64,
        content_type: &str,
    ) -> SourceFile {
        let source = SourceFile {
            id: Uuid::new_v4().to_string(),
            name: file_name.to_string(),
            size: format_size(byte_len),
            kind: SourceKind::from_content_type(content_type),
            uploaded_at: Utc::now(),
            workspace_id: workspace_id.to_string(),
        };

        let mut by_workspace = self.by_workspace.write().await;
        by_workspace
            .entry(workspace_id.to_string())
            .or_default()
            .push(source.clone());
        source
    }

    async fn remove(&self, workspace_id: &str, source_id: &str) {
        let mut by_workspace = self.by_workspace.write().await;
        if let Some(sources) = by_workspace.get_mut(workspace_id) {
            sources.retain(|source| source.id != source_id);
        }
    }
}
