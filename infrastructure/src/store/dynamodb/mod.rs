//! DynamoDB message store
//!
//! One item per session: partition key `SessionId` (S) and the history in
//! `History` (L), see [`codec`] for the element layout.

mod codec;

use crate::config::FileStoreConfig;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use convo_application::ports::message_store::{MessageStore, StoreError};
use convo_domain::{Message, SessionId};
use tracing::debug;

const KEY_ATTRIBUTE: &str = "SessionId";
const HISTORY_ATTRIBUTE: &str = "History";

pub struct DynamoDbMessageStore {
    client: DynamoDbClient,
}

impl DynamoDbMessageStore {
    /// Create a store from `[store]` settings.
    ///
    /// Credentials come from the standard AWS provider chain; `region`,
    /// `profile` and `endpoint_url` override it when set.
    pub async fn new(config: &FileStoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(ref region) = config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(ref profile) = config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(ref endpoint) = config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::from_client(DynamoDbClient::new(&sdk_config))
    }

    pub fn from_client(client: DynamoDbClient) -> Self {
        Self { client }
    }

    fn key(session_id: &SessionId) -> AttributeValue {
        AttributeValue::S(session_id.to_string())
    }
}

#[async_trait]
impl MessageStore for DynamoDbMessageStore {
    async fn read(&self, table: &str, session_id: &SessionId) -> Result<Vec<Message>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .key(KEY_ATTRIBUTE, Self::key(session_id))
            .send()
            .await
            .map_err(|e| {
                StoreError::Unavailable(format!("GetItem on {}: {}", table, DisplayErrorContext(&e)))
            })?;

        let Some(history) = output.item().and_then(|item| item.get(HISTORY_ATTRIBUTE)) else {
            debug!(table, session_id = %session_id, "No stored history");
            return Ok(Vec::new());
        };

        codec::decode_history(history).map_err(|reason| StoreError::Corrupt {
            session_id: session_id.to_string(),
            reason,
        })
    }

    async fn write(
        &self,
        table: &str,
        session_id: &SessionId,
        messages: &[Message],
    ) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table)
            .item(KEY_ATTRIBUTE, Self::key(session_id))
            .item(HISTORY_ATTRIBUTE, codec::encode_history(messages))
            .send()
            .await
            .map_err(|e| {
                StoreError::Unavailable(format!("PutItem on {}: {}", table, DisplayErrorContext(&e)))
            })?;

        debug!(table, session_id = %session_id, messages = messages.len(), "Stored history");
        Ok(())
    }
}
