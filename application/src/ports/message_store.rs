//! Message store port
//!
//! Read-all / write-all persistence of a session's ordered messages, keyed by
//! session id inside a named collection (a DynamoDB table, a directory, ...).

use async_trait::async_trait;
use convo_domain::{Message, SessionId};
use thiserror::Error;

/// Errors raised by message store adapters
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt record for session {session_id}: {reason}")]
    Corrupt { session_id: String, reason: String },

    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}

/// Persistence of session histories
///
/// Writes replace the whole record (last write wins). Concurrent writers to
/// the same session are not coordinated.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// All messages stored for `session_id`, in insertion order.
    ///
    /// A missing record reads as an empty history.
    async fn read(&self, table: &str, session_id: &SessionId) -> Result<Vec<Message>, StoreError>;

    /// Replace the record for `session_id` with `messages`.
    async fn write(
        &self,
        table: &str,
        session_id: &SessionId,
        messages: &[Message],
    ) -> Result<(), StoreError>;
}
