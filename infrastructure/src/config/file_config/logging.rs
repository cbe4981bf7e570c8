//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write diagnostic logs to this file.
    pub file: Option<String>,
    /// Write the JSONL conversation transcript to this file.
    pub transcript: Option<String>,
}
