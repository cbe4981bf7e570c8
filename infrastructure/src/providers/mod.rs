//! Completion providers
//!
//! Adapters implementing the [`LlmGateway`] port:
//!
//! - [`OpenAiGateway`]: OpenAI Chat Completions over HTTPS (default)
//! - `BedrockGateway`: AWS Bedrock Converse API (feature `bedrock`)

pub mod openai;

#[cfg(feature = "bedrock")]
pub mod bedrock;

pub use openai::OpenAiGateway;

use crate::config::FileProvidersConfig;
use convo_application::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Bedrock,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Bedrock => "bedrock",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "bedrock" => Ok(ProviderKind::Bedrock),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// Build the gateway for `kind` from `[providers]` settings.
pub async fn build_gateway(
    kind: ProviderKind,
    config: &FileProvidersConfig,
) -> Result<Arc<dyn LlmGateway>, GatewayError> {
    match kind {
        ProviderKind::OpenAi => Ok(Arc::new(OpenAiGateway::new(&config.openai)?)),
        #[cfg(feature = "bedrock")]
        ProviderKind::Bedrock => Ok(Arc::new(
            bedrock::BedrockGateway::new(&config.bedrock).await,
        )),
        #[cfg(not(feature = "bedrock"))]
        ProviderKind::Bedrock => Err(GatewayError::ModelNotAvailable(
            "Bedrock support is not compiled in (enable the `bedrock` feature)".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!(" Bedrock ".parse::<ProviderKind>().unwrap(), ProviderKind::Bedrock);
        assert!("anthropic".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_default_is_openai() {
        assert_eq!(ProviderKind::default(), ProviderKind::OpenAi);
        assert_eq!(ProviderKind::default().to_string(), "openai");
    }
}
