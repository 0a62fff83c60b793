use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::models::{Citation, Message, Role};

/// Append-only message log per workspace id. Message ids are time-derived
/// (millisecond stamps) and strictly increasing within the process, so the
/// log order is recoverable from ids alone.
#[async_trait]
pub trait ConversationStore: Send + Sync + 'static {
    async fn append(
        &self,
        workspace_id: &str,
        role: Role,
        content: String,
        citations: Option<Vec<Citation>>,
    ) -> Message;

    /// Appends a user message and its assistant reply under one lock
    /// acquisition, so concurrent chats against the same workspace can never
    /// interleave between the two halves of a turn.
    async fn append_turn(
        &self,
        workspace_id: &str,
        user_content: String,
        assistant_content: String,
    ) -> (Message, Message);

    async fn list(&self, workspace_id: &str) -> Vec<Message>;
}

#[derive(Default)]
struct ConversationLog {
    by_workspace: HashMap<String, Vec<Message>>,
    // Last issued id stamp; bumped past the wall clock when two appends land
    // in the same millisecond.
    clock: i64,
}

impl ConversationLog {
    fn next_stamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.clock = self.clock.max(now - 1) + 1;
        self.clock
    }

    fn push(
        &mut self,
        workspace_id: &str,
        role: Role,
        content: String,
        citations: Option<Vec<Citation>>,
    ) -> Message {
        let message = Message {
            id: self.next_stamp().to_string(),
            role,
            content,
            citations,
            timestamp: Utc::now(),
        };
        self.by_workspace
            .entry(workspace_id.to_string())
            .or_default()
            .push(message.clone());
        message
    }
}

#[derive(Default)]
pub struct InMemoryConversationStore {
    log: Mutex<ConversationLog>,
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn append(
        &self,
        workspace_id: &str,
        role: Role,
        content: String,
        citations: Option<Vec<Citation>>,
    ) -> Message {
        let mut log = self.log.lock().await;
        log.push(workspace_id, role, content, citations)
    }

    async fn append_turn(
        &self,
        workspace_id: &str,
        user_content: String,
        assistant_content: String,
    ) -> (Message, Message) {
        let mut log = self.log.lock().await;
        let user = log.push(workspace_id, Role::User, user_content, None);
        let assistant = log.push(workspace_id, Role::Assistant, assistant_content, None);
        (user, assistant)
    }

    async fn list(&self, workspace_id: &str) -> Vec<Message> {
        let log = self.log.lock().await;
        log.by_workspace
            .get(workspace_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_workspace_lists_empty() {
        let store = InMemoryConversationStore::default();
        assert!(store.list("nowhere").await.is_empty());
    }

    #[tokio::test]
    async fn turn_appends_an_adjacent_user_assistant_pair() {
        let store = InMemoryConversationStore::default();
        let (user, assistant) = store
            .append_turn("w1", "hi".to_string(), "Hello!".to_string())
            .await;

        assert_eq!(user.role, Role::User);
        assert_eq!(assistant.role, Role::Assistant);

        let log = store.list("w1").await;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].id, user.id);
        assert_eq!(log[1].id, assistant.id);
    }

    #[tokio::test]
    async fn ids_are_strictly_increasing_even_within_one_millisecond() {
        let store = InMemoryConversationStore::default();
        let mut previous = 0i64;
        for n in 0..20 {
            let message = store
                .append("w1", Role::User, format!("msg {n}"), None)
                .await;
            let stamp: i64 = message.id.parse().unwrap();
            assert!(stamp > previous);
            previous = stamp;
        }
    }

    #[tokio::test]
    async fn logs_are_partitioned_by_workspace() {
        let store = InMemoryConversationStore::default();
        store
            .append("w1", Role::User, "here".to_string(), None)
            .await;
        store
            .append("w2", Role::User, "there".to_string(), None)
            .await;

        assert_eq!(store.list("w1").await.len(), 1);
        assert_eq!(store.list("w2").await.len(), 1);
        assert_eq!(store.list("w1").await[0].content, "here");
    }
}
