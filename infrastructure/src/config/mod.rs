//! Configuration file loading for convo-chain
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DYNAMODB_TABLE_NAME` (table name only)
//! 2. `CONVO_*` environment variables (`__` separates sections)
//! 3. `--config <path>` specified file
//! 4. Project root: `./convo.toml` or `./.convo.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/convo-chain/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileBedrockConfig, FileChainConfig, FileConfig,
    FileLoggingConfig, FileOpenAiConfig, FileOutputConfig, FileOutputFormat, FileProvidersConfig,
    FileStoreConfig, Severity, StoreBackend,
};
pub use loader::ConfigLoader;
