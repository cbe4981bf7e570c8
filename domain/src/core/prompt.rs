//! Prompt value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A prompt entered by the user (Value Object)
///
/// Guaranteed to contain at least one non-whitespace character. The content
/// is kept verbatim; only the emptiness check looks at the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Create a new prompt, rejecting empty or whitespace-only input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyPrompt)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Prompt {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Prompt::try_new(s)
    }
}

impl TryFrom<&str> for Prompt {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Prompt::try_new(s)
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.content
    }
}
