//! JSON file message store.
//!
//! Layout: `<base>/<table>/<session_id>.json`, each file holding the full
//! history as a JSON array of [`StoredMessage`] records.

use super::record::StoredMessage;
use async_trait::async_trait;
use convo_application::ports::message_store::{MessageStore, StoreError};
use convo_domain::{Message, SessionId};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileMessageStore {
    base_path: PathBuf,
}

impl FileMessageStore {
    /// Create a new file store rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn session_path(&self, table: &str, session_id: &SessionId) -> Result<PathBuf, StoreError> {
        Self::validate_component("table", table)?;
        Self::validate_component("session id", session_id.as_str())?;
        Ok(self
            .base_path
            .join(table)
            .join(format!("{}.json", session_id)))
    }

    /// Reject names that would escape the base directory.
    fn validate_component(what: &str, value: &str) -> Result<(), StoreError> {
        if value.is_empty() {
            return Err(StoreError::InvalidKey(format!("{what} cannot be empty")));
        }
        if value.contains('/') || value.contains('\\') || value.contains("..") || value.contains('\0')
        {
            return Err(StoreError::InvalidKey(format!(
                "{what} contains invalid characters: {value:?}"
            )));
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(StoreError::InvalidKey(format!(
                "{what} contains control characters: {value:?}"
            )));
        }
        Ok(())
    }

    fn io_error(path: &Path, e: std::io::Error) -> StoreError {
        StoreError::Unavailable(format!("{}: {}", path.display(), e))
    }
}

#[async_trait]
impl MessageStore for FileMessageStore {
    async fn read(&self, table: &str, session_id: &SessionId) -> Result<Vec<Message>, StoreError> {
        let path = self.session_path(table, session_id)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Self::io_error(&path, e)),
        };

        let corrupt = |reason: String| StoreError::Corrupt {
            session_id: session_id.to_string(),
            reason,
        };
        let records: Vec<StoredMessage> =
            serde_json::from_str(&content).map_err(|e| corrupt(e.to_string()))?;
        records
            .into_iter()
            .map(StoredMessage::into_message)
            .collect::<Result<Vec<_>, _>>()
            .map_err(corrupt)
    }

    async fn write(
        &self,
        table: &str,
        session_id: &SessionId,
        messages: &[Message],
    ) -> Result<(), StoreError> {
        let path = self.session_path(table, session_id)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::io_error(parent, e))?;
        }

        let records: Vec<StoredMessage> = messages.iter().map(StoredMessage::from).collect();
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| StoreError::Unavailable(format!("serialize history: {e}")))?;

        // Write then rename so readers never see a half-written file.
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| Self::io_error(&tmp_path, e))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| Self::io_error(&path, e))?;

        debug!(path = %path.display(), messages = messages.len(), "Wrote session file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> SessionId {
        raw.parse().unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMessageStore::new(dir.path());

        assert!(store.read("sessions", &id("nope")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMessageStore::new(dir.path());
        let session = SessionId::generate();
        let history = vec![
            Message::system("be nice"),
            Message::human("Hello"),
            Message::ai("Hi there"),
        ];

        store.write("sessions", &session, &history).await.unwrap();

        assert!(dir.path().join("sessions").join(format!("{session}.json")).exists());
        assert_eq!(store.read("sessions", &session).await.unwrap(), history);
        assert_eq!(store.read("sessions", &session).await.unwrap(), history);
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMessageStore::new(dir.path());
        let session = SessionId::generate();

        store
            .write("sessions", &session, &[Message::human("a"), Message::ai("b")])
            .await
            .unwrap();
        store
            .write("sessions", &session, &[Message::human("c")])
            .await
            .unwrap();

        assert_eq!(
            store.read("sessions", &session).await.unwrap(),
            vec![Message::human("c")]
        );
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMessageStore::new(dir.path());

        let err = store.read("sessions", &id("../etc")).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));

        let err = store
            .write("a/b", &SessionId::generate(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMessageStore::new(dir.path());
        let session = id("broken");
        std::fs::create_dir_all(dir.path().join("sessions")).unwrap();
        std::fs::write(dir.path().join("sessions").join("broken.json"), "{not json").unwrap();

        let err = store.read("sessions", &session).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_reads_records_written_by_other_tools() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMessageStore::new(dir.path());
        std::fs::create_dir_all(dir.path().join("sessions")).unwrap();
        std::fs::write(
            dir.path().join("sessions").join("legacy.json"),
            r#"[{"type": "human", "data": {"content": "Hello", "additional_kwargs": {}}},
                {"type": "ai", "data": {"content": "Hi", "additional_kwargs": {}}}]"#,
        )
        .unwrap();

        assert_eq!(
            store.read("sessions", &id("legacy")).await.unwrap(),
            vec![Message::human("Hello"), Message::ai("Hi")]
        );
    }
}
