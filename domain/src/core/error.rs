//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All of these describe input that was rejected before any store or
/// completion call was made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("API key cannot be empty")]
    EmptyApiKey,

    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),
}

impl DomainError {
    /// Check if this error was caused by the prompt
    pub fn is_prompt_error(&self) -> bool {
        matches!(self, DomainError::EmptyPrompt)
    }
}
