//! Session domain entities

use super::id::SessionId;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Ai,
    System,
}

impl Role {
    /// Stable tag used by the persisted record format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Human => "human",
            Role::Ai => "ai",
            Role::System => "system",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Role::Human),
            "ai" => Ok(Role::Ai),
            "system" => Ok(Role::System),
            other => Err(format!("unknown message type '{}'", other)),
        }
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// A stored conversation session (Entity)
///
/// Holds the history as read from the store. A session that already has
/// messages must not be appended to under its own id; [`Session::resume`]
/// enforces this by forking such sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    messages: Vec<Message>,
}

impl Session {
    pub fn new(id: SessionId, messages: Vec<Message>) -> Self {
        Self { id, messages }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Copy this session's history under a freshly generated id.
    pub fn fork(&self) -> Session {
        Session {
            id: SessionId::generate(),
            messages: self.messages.clone(),
        }
    }

    /// Decide which session the next turn is appended to.
    ///
    /// An empty session is resumed as-is. A non-empty one is forked and the
    /// fork is returned together with the id it was copied from.
    pub fn resume(self) -> (Session, Option<SessionId>) {
        if self.is_empty() {
            (self, None)
        } else {
            let fork = self.fork();
            (fork, Some(self.id))
        }
    }
}
