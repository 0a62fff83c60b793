pub mod conversations;
pub mod settings;
pub mod sources;
pub mod workspaces;

use thiserror::Error;

pub use conversations::{ConversationStore, InMemoryConversationStore};
pub use settings::{InMemorySettingsStore, SettingsStore};
pub use sources::{InMemorySourceStore, SourceStore};
pub use workspaces::{InMemoryWorkspaceStore, WorkspaceStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
