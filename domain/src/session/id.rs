//! Session identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored conversation session (Value Object)
///
/// Callers treat it as opaque. New ids are random UUID v4 strings, but any
/// non-empty id without control characters is accepted so sessions written
/// by other tools can still be read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse a caller-supplied identifier.
    ///
    /// Returns `Ok(None)` for the empty string, which callers use to mean
    /// "start a new session". Anything else is kept verbatim, surrounding
    /// whitespace included, since it is the store key.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, DomainError> {
        if raw.is_empty() {
            return Ok(None);
        }
        if raw.chars().any(char::is_control) {
            return Err(DomainError::InvalidSessionId(raw.escape_debug().to_string()));
        }
        Ok(Some(Self(raw.to_string())))
    }

    /// Use the supplied identifier, or generate one when it is empty.
    pub fn or_generate(raw: &str) -> Result<Self, DomainError> {
        Ok(Self::parse_optional(raw)?.unwrap_or_else(Self::generate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_optional(s)?
            .ok_or_else(|| DomainError::InvalidSessionId("session id cannot be empty".to_string()))
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
