use async_trait::async_trait;
use convo_application::ports::message_store::{MessageStore, StoreError};
use convo_domain::{Message, SessionId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory storage for testing and local development.
#[derive(Default)]
pub struct InMemoryMessageStore {
    records: RwLock<HashMap<(String, String), Vec<Message>>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(table: &str, session_id: &SessionId) -> (String, String) {
        (table.to_string(), session_id.to_string())
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn read(&self, table: &str, session_id: &SessionId) -> Result<Vec<Message>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .get(&Self::key(table, session_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn write(
        &self,
        table: &str,
        session_id: &SessionId,
        messages: &[Message],
    ) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.insert(Self::key(table, session_id), messages.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_session_reads_empty() {
        let store = InMemoryMessageStore::new();
        assert!(store.read("t", &SessionId::generate()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let store = InMemoryMessageStore::new();
        let id = SessionId::generate();

        store.write("t", &id, &[Message::human("one")]).await.unwrap();
        store
            .write("t", &id, &[Message::human("two"), Message::ai("three")])
            .await
            .unwrap();

        assert_eq!(
            store.read("t", &id).await.unwrap(),
            vec![Message::human("two"), Message::ai("three")]
        );
    }

    #[tokio::test]
    async fn test_tables_are_separate() {
        let store = InMemoryMessageStore::new();
        let id = SessionId::generate();

        store.write("a", &id, &[Message::human("hi")]).await.unwrap();

        assert!(store.read("b", &id).await.unwrap().is_empty());
    }
}
