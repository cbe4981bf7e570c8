//! Persisted message record.
//!
//! Both the DynamoDB and file backends store a history as a list of
//! `{"type": "human" | "ai" | "system", "data": {"content": "..."}}` objects.
//! Extra fields written by other tools (e.g. `additional_kwargs`) are ignored.

use convo_domain::{Message, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: StoredMessageData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessageData {
    pub content: String,
}

impl StoredMessage {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: StoredMessageData {
                content: content.into(),
            },
        }
    }

    /// Convert to a domain message; fails on an unknown `type` tag.
    pub fn into_message(self) -> Result<Message, String> {
        let role: Role = self.kind.parse()?;
        Ok(Message {
            role,
            content: self.data.content,
        })
    }
}

impl From<&Message> for StoredMessage {
    fn from(message: &Message) -> Self {
        Self::new(message.role.as_str(), message.content.clone())
    }
}
