//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable read when no key is passed on the command line.
    pub api_key_env: String,
    /// Base URL for the OpenAI API (can be overridden for compatible APIs).
    pub base_url: String,
    /// Chat model name.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Max tokens per response (provider default when unset).
    pub max_tokens: Option<u32>,
    /// HTTP request timeout.
    pub timeout_seconds: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.9,
            max_tokens: None,
            timeout_seconds: 120,
        }
    }
}

/// AWS Bedrock provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS region for Bedrock models (default: "us-east-1")
    pub region: String,
    /// AWS profile name for credentials
    pub profile: Option<String>,
    /// Bedrock model id
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Max Tokens per response (default: 1024)
    pub max_tokens: u32,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
            model: "anthropic.claude-3-haiku-20240307-v1:0".to_string(),
            temperature: 0.9,
            max_tokens: 1024,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "openai" or "bedrock".
    pub default: Option<String>,
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// AWS Bedrock settings.
    pub bedrock: FileBedrockConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_defaults() {
        let config = FileOpenAiConfig::default();
        assert_eq!(config.temperature, 0.9);
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_partial_openai_section() {
        let config: FileProvidersConfig = toml::from_str(
            r#"
default = "openai"

[openai]
model = "gpt-4o"
"#,
        )
        .unwrap();
        assert_eq!(config.default.as_deref(), Some("openai"));
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.openai.base_url, "https://api.openai.com");
    }
}
