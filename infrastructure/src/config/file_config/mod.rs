//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod chain;
mod logging;
mod output;
mod providers;
mod store;
mod validation;

pub use chain::FileChainConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::{FileBedrockConfig, FileOpenAiConfig, FileProvidersConfig};
pub use store::{FileStoreConfig, StoreBackend};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};

use crate::providers::ProviderKind;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session store settings
    pub store: FileStoreConfig,
    /// Completion provider settings
    pub providers: FileProvidersConfig,
    /// Conversation template settings
    pub chain: FileChainConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log and transcript destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Resolve `providers.default`, reporting unknown names.
    ///
    /// Unknown or missing names fall back to OpenAI.
    pub fn provider_kind(&self) -> (ProviderKind, Vec<ConfigIssue>) {
        let Some(raw) = self.providers.default.as_deref() else {
            return (ProviderKind::default(), Vec::new());
        };
        match raw.parse::<ProviderKind>() {
            Ok(kind) => (kind, Vec::new()),
            Err(_) => (
                ProviderKind::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "providers.default".to_string(),
                        value: raw.to_string(),
                        valid_values: vec!["openai".to_string(), "bedrock".to_string()],
                    },
                    message: format!(
                        "providers.default: unknown provider '{}', falling back to 'openai'",
                        raw
                    ),
                }],
            ),
        }
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.store.table_name.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "store.table_name".to_string(),
                },
                message: "store.table_name cannot be empty".to_string(),
            });
        }

        if self.store.backend == StoreBackend::File && self.store.directory.is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyValue {
                    field: "store.directory".to_string(),
                },
                message: "store.directory is not set, using the platform data directory"
                    .to_string(),
            });
        }

        let temperature = self.providers.openai.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "providers.openai.temperature".to_string(),
                    value: temperature.to_string(),
                },
                message: format!(
                    "providers.openai.temperature must be between 0 and 2, got {}",
                    temperature
                ),
            });
        }

        if self.providers.openai.timeout_seconds == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "providers.openai.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                message: "providers.openai.timeout_seconds cannot be 0".to_string(),
            });
        }

        for (field, value) in [
            ("chain.human_prefix", &self.chain.human_prefix),
            ("chain.ai_prefix", &self.chain.ai_prefix),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    message: format!(
                        "{}: empty prefix makes the logged transcript ambiguous \
                         (prefixes are not sent to the provider)",
                        field
                    ),
                });
            }
        }

        issues.extend(self.provider_kind().1);
        issues
    }
}
