//! Message store adapters
//!
//! Implementations of the [`MessageStore`] port:
//!
//! - [`DynamoDbMessageStore`]: one DynamoDB item per session (production)
//! - [`FileMessageStore`]: one JSON file per session (local development)
//! - [`InMemoryMessageStore`]: process memory (tests, throwaway runs)

mod dynamodb;
mod file;
mod memory;
mod record;

pub use dynamodb::DynamoDbMessageStore;
pub use file::FileMessageStore;
pub use memory::InMemoryMessageStore;
pub use record::StoredMessage;

use crate::config::{FileStoreConfig, StoreBackend};
use convo_application::ports::message_store::{MessageStore, StoreError};
use std::sync::Arc;
use tracing::info;

/// Build the store selected by `[store] backend`.
pub async fn build_message_store(
    config: &FileStoreConfig,
) -> Result<Arc<dyn MessageStore>, StoreError> {
    let store: Arc<dyn MessageStore> = match config.backend {
        StoreBackend::Dynamodb => Arc::new(DynamoDbMessageStore::new(config).await),
        StoreBackend::File => {
            let directory = config.resolved_directory().ok_or_else(|| {
                StoreError::Unavailable("no directory available for the file store".to_string())
            })?;
            Arc::new(FileMessageStore::new(directory))
        }
        StoreBackend::Memory => Arc::new(InMemoryMessageStore::new()),
    };
    info!(backend = ?config.backend, table = %config.table_name, "Message store ready");
    Ok(store)
}
