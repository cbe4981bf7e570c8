//! Session store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which backend holds the session histories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// AWS DynamoDB table (one item per session)
    #[default]
    Dynamodb,
    /// JSON files under a local directory
    File,
    /// Process memory, lost on exit
    Memory,
}

/// Raw store configuration from TOML
///
/// # Example
///
/// ```toml
/// [store]
/// backend = "dynamodb"
/// table_name = "conversation-sessions"
/// region = "us-west-2"
/// endpoint_url = "http://localhost:8000"   # DynamoDB Local
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// Table (collection) holding the sessions.
    pub table_name: String,
    /// AWS region; falls back to the SDK's default chain when unset.
    pub region: Option<String>,
    /// AWS shared-config profile.
    pub profile: Option<String>,
    /// Endpoint override, e.g. DynamoDB Local.
    pub endpoint_url: Option<String>,
    /// Base directory for the file backend.
    pub directory: Option<String>,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Dynamodb,
            table_name: "conversation-sessions".to_string(),
            region: None,
            profile: None,
            endpoint_url: None,
            directory: None,
        }
    }
}

impl FileStoreConfig {
    /// Directory used by the file backend.
    ///
    /// Explicit `directory` wins; otherwise `$XDG_DATA_HOME/convo-chain/sessions`.
    pub fn resolved_directory(&self) -> Option<PathBuf> {
        self.directory
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|d| d.join("convo-chain").join("sessions")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_deserialize() {
        let config: FileStoreConfig = toml::from_str(r#"backend = "file""#).unwrap();
        assert_eq!(config.backend, StoreBackend::File);
        assert_eq!(config.table_name, "conversation-sessions");
    }

    #[test]
    fn test_explicit_directory_wins() {
        let config = FileStoreConfig {
            directory: Some("/tmp/convo".to_string()),
            ..FileStoreConfig::default()
        };
        assert_eq!(config.resolved_directory(), Some(PathBuf::from("/tmp/convo")));
    }
}
