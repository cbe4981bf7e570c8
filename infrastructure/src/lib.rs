//! Infrastructure layer for convo-chain
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileOutputConfig, FileOutputFormat,
    FileStoreConfig, Severity, StoreBackend,
};
pub use logging::JsonlConversationLogger;
pub use providers::{OpenAiGateway, ProviderKind, build_gateway};
pub use store::{
    DynamoDbMessageStore, FileMessageStore, InMemoryMessageStore, StoredMessage,
    build_message_store,
};
