//! Bedrock gateway
//!
//! Handles AWS credential initialization and hands out completion handles.

use super::session::BedrockCompletion;
use crate::config::FileBedrockConfig;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use convo_application::ports::llm_gateway::{GatewayError, LlmCompletion, LlmGateway};
use convo_domain::ApiKey;
use std::sync::Arc;
use tracing::{debug, info};

pub struct BedrockGateway {
    client: Arc<BedrockClient>,
    model_id: String,
    temperature: f32,
    max_tokens: i32,
}

impl BedrockGateway {
    /// Create a new Bedrock gateway.
    ///
    /// Initializes AWS credentials and creates a Bedrock Runtime client.
    pub async fn new(config: &FileBedrockConfig) -> Self {
        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref profile) = config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        let aws_config = aws_config_loader.load().await;
        info!(region = %config.region, model = %config.model, "Bedrock provider initialized");

        Self {
            client: Arc::new(BedrockClient::new(&aws_config)),
            model_id: config.model.clone(),
            temperature: config.temperature,
            max_tokens: i32::try_from(config.max_tokens).unwrap_or(i32::MAX),
        }
    }

    fn completion(&self, api_key: &ApiKey, system_prompt: Option<String>) -> Box<dyn LlmCompletion> {
        debug!(
            key = ?api_key,
            "Bedrock authenticates with IAM; ignoring supplied API key"
        );
        Box::new(BedrockCompletion::new(
            self.client.clone(),
            self.model_id.clone(),
            system_prompt,
            self.temperature,
            self.max_tokens,
        ))
    }
}

#[async_trait]
impl LlmGateway for BedrockGateway {
    async fn open(&self, api_key: &ApiKey) -> Result<Box<dyn LlmCompletion>, GatewayError> {
        Ok(self.completion(api_key, None))
    }

    async fn open_with_system_prompt(
        &self,
        api_key: &ApiKey,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmCompletion>, GatewayError> {
        Ok(self.completion(api_key, Some(system_prompt.to_string())))
    }
}
