//! Show History use case.
//!
//! Read-only listing of the messages stored for a session. Never forks and
//! never writes.

use crate::ports::message_store::{MessageStore, StoreError};
use convo_domain::{DomainError, Message, SessionId};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a session's history.
#[derive(Error, Debug)]
pub enum ShowHistoryError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Session store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

pub struct ShowHistoryUseCase {
    store: Arc<dyn MessageStore>,
    table_name: String,
}

impl ShowHistoryUseCase {
    pub fn new(store: Arc<dyn MessageStore>, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table_name: table_name.into(),
        }
    }

    /// Messages stored for `session_id`; an unknown session yields an empty list.
    pub async fn execute(&self, session_id: &str) -> Result<Vec<Message>, ShowHistoryError> {
        let id: SessionId = session_id.parse()?;
        let messages = self.store.read(&self.table_name, &id).await?;
        debug!(session_id = %id, messages = messages.len(), "Loaded session history");
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::RecordingStore;

    #[tokio::test]
    async fn test_reads_stored_messages() {
        let store = Arc::new(RecordingStore::default());
        let id = SessionId::generate();
        let history = vec![Message::human("Hello"), Message::ai("Hi")];
        store.seed("sessions", &id, history.clone());

        let use_case = ShowHistoryUseCase::new(store.clone(), "sessions");

        assert_eq!(use_case.execute(id.as_str()).await.unwrap(), history);
        // Reading again without writes returns the same sequence
        assert_eq!(use_case.execute(id.as_str()).await.unwrap(), history);
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let use_case = ShowHistoryUseCase::new(Arc::new(RecordingStore::default()), "sessions");
        assert!(use_case.execute("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_id_is_invalid() {
        let use_case = ShowHistoryUseCase::new(Arc::new(RecordingStore::default()), "sessions");
        let err = use_case.execute("").await.unwrap_err();
        assert!(matches!(err, ShowHistoryError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let use_case = ShowHistoryUseCase::new(Arc::new(RecordingStore::failing_reads()), "sessions");
        let err = use_case.execute("s1").await.unwrap_err();
        assert!(matches!(err, ShowHistoryError::StoreUnavailable(_)));
    }
}
