//! Conversation memory backed by a [`MessageStore`].
//!
//! Owns the append side of a session: every completed exchange is written
//! back as the stored history plus the human prompt and the AI response.

use crate::ports::message_store::{MessageStore, StoreError};
use convo_domain::{Message, SessionId};
use std::sync::Arc;
use tracing::debug;

/// Buffer memory bound to one session of one collection.
pub struct ConversationMemory {
    store: Arc<dyn MessageStore>,
    table: String,
    session_id: SessionId,
}

impl ConversationMemory {
    pub fn new(store: Arc<dyn MessageStore>, table: impl Into<String>, session_id: SessionId) -> Self {
        Self {
            store,
            table: table.into(),
            session_id,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Load the stored history.
    pub async fn load(&self) -> Result<Vec<Message>, StoreError> {
        self.store.read(&self.table, &self.session_id).await
    }

    /// Append one exchange (human input, then AI output) to the stored history.
    pub async fn save_context(&self, input: &str, output: &str) -> Result<(), StoreError> {
        let mut messages = self.load().await?;
        messages.push(Message::human(input));
        messages.push(Message::ai(output));

        debug!(
            session_id = %self.session_id,
            messages = messages.len(),
            "Saving conversation context"
        );
        self.store
            .write(&self.table, &self.session_id, &messages)
            .await
    }
}
