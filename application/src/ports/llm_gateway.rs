//! LLM Gateway port
//!
//! Defines the interface for communicating with completion providers.

use async_trait::async_trait;
use convo_domain::{ApiKey, Message, Prompt};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// Check if the provider rejected the credential
    pub fn is_authentication(&self) -> bool {
        matches!(self, GatewayError::Authentication(_))
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches a completion provider.
/// The credential is supplied per call, so a gateway is shared across callers
/// and each call opens its own [`LlmCompletion`].
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Open a completion handle authenticated with `api_key`
    async fn open(&self, api_key: &ApiKey) -> Result<Box<dyn LlmCompletion>, GatewayError>;

    /// Open a completion handle that sends `system_prompt` ahead of the history
    async fn open_with_system_prompt(
        &self,
        api_key: &ApiKey,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmCompletion>, GatewayError>;
}

/// An opened completion capability
///
/// Stateless: the full history is passed on every call and nothing is
/// remembered between calls.
#[async_trait]
pub trait LlmCompletion: Send + Sync {
    /// Model identifier used for the request
    fn model(&self) -> &str;

    /// Produce the model's reply to `prompt` given the prior `history`
    async fn complete(&self, history: &[Message], prompt: &Prompt) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_authentication() {
        assert!(GatewayError::Authentication("bad key".to_string()).is_authentication());
        assert!(!GatewayError::Timeout.is_authentication());
    }

    #[test]
    fn test_error_display() {
        let error = GatewayError::RequestFailed("HTTP 500".to_string());
        assert_eq!(error.to_string(), "Request failed: HTTP 500");
    }
}
