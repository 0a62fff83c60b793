use std::sync::Arc;

use crate::{
    auth::{AuthProvider, StubAuthProvider},
    config::AppConfig,
    responder::{ChatResponder, KeywordResponder},
    stores::{
        ConversationStore, InMemoryConversationStore, InMemorySettingsStore, InMemorySourceStore,
        InMemoryWorkspaceStore, SettingsStore, SourceStore, WorkspaceStore,
    },
};

/// Shared handles to every collaborator the handlers touch. Each is a trait
/// object so the in-memory stores, the stub auth provider, and the keyword
/// responder can be swapped for real backends without touching the routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<dyn AuthProvider>,
    pub settings: Arc<dyn SettingsStore>,
    pub workspaces: Arc<dyn WorkspaceStore>,
    pub sources: Arc<dyn SourceStore>,
    pub conversations: Arc<dyn ConversationStore>,
    pub responder: Arc<dyn ChatResponder>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: AppConfig,
        auth: Arc<dyn AuthProvider>,
        settings: Arc<dyn SettingsStore>,
        workspaces: Arc<dyn WorkspaceStore>,
        sources: Arc<dyn SourceStore>,
        conversations: Arc<dyn ConversationStore>,
        responder: Arc<dyn ChatResponder>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            auth,
            settings,
            workspaces,
            sources,
            conversations,
            responder,
        }
    }

    /// Process-lifetime state: in-memory stores, stub auth, keyword responder.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(StubAuthProvider),
            Arc::new(InMemorySettingsStore::default()),
            Arc::new(InMemoryWorkspaceStore::default()),
            Arc::new(InMemorySourceStore::default()),
            Arc::new(InMemoryConversationStore::default()),
            Arc::new(KeywordResponder),
        )
    }
}
