//! Bedrock completion handle
//!
//! The Converse API is stateless, so every call sends the full history.

use super::types;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use convo_application::ports::llm_gateway::{GatewayError, LlmCompletion};
use convo_domain::{Message, Prompt};
use std::sync::Arc;
use tracing::debug;

pub struct BedrockCompletion {
    client: Arc<BedrockClient>,
    model_id: String,
    system_prompt: Option<String>,
    temperature: f32,
    max_tokens: i32,
}

impl BedrockCompletion {
    pub fn new(
        client: Arc<BedrockClient>,
        model_id: String,
        system_prompt: Option<String>,
        temperature: f32,
        max_tokens: i32,
    ) -> Self {
        Self {
            client,
            model_id,
            system_prompt,
            temperature,
            max_tokens,
        }
    }
}

#[async_trait]
impl LlmCompletion for BedrockCompletion {
    fn model(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, history: &[Message], prompt: &Prompt) -> Result<String, GatewayError> {
        let (system, messages) =
            types::build_conversation(self.system_prompt.as_deref(), history, prompt.content())?;

        debug!(
            model = %self.model_id,
            messages = messages.len(),
            "Calling Bedrock Converse API"
        );

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .set_system(Some(system))
            .set_messages(Some(messages))
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(self.max_tokens)
                    .temperature(self.temperature)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        debug!(stop_reason = ?response.stop_reason(), "Bedrock response received");

        let output = response.output().ok_or_else(|| {
            GatewayError::InvalidResponse("No output in Bedrock response".to_string())
        })?;
        types::output_text(output)
    }
}
