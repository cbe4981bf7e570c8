//! OpenAI gateway and per-call completion handle.

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, build_messages, extract_text, status_error,
};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use convo_application::ports::llm_gateway::{GatewayError, LlmCompletion, LlmGateway};
use convo_domain::{ApiKey, Message, Prompt};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct RequestSettings {
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

/// Gateway to an OpenAI-compatible Chat Completions endpoint.
pub struct OpenAiGateway {
    client: reqwest::Client,
    settings: RequestSettings,
}

impl OpenAiGateway {
    pub fn new(config: &FileOpenAiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let endpoint = format!(
            "{}/v1/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        info!(endpoint = %endpoint, model = %config.model, "OpenAI gateway ready");

        Ok(Self {
            client,
            settings: RequestSettings {
                endpoint,
                model: config.model.clone(),
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            },
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn open(&self, api_key: &ApiKey) -> Result<Box<dyn LlmCompletion>, GatewayError> {
        Ok(Box::new(OpenAiCompletion {
            client: self.client.clone(),
            settings: self.settings.clone(),
            api_key: api_key.clone(),
            system_prompt: None,
        }))
    }

    async fn open_with_system_prompt(
        &self,
        api_key: &ApiKey,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmCompletion>, GatewayError> {
        Ok(Box::new(OpenAiCompletion {
            client: self.client.clone(),
            settings: self.settings.clone(),
            api_key: api_key.clone(),
            system_prompt: Some(system_prompt.to_string()),
        }))
    }
}

struct OpenAiCompletion {
    client: reqwest::Client,
    settings: RequestSettings,
    api_key: ApiKey,
    system_prompt: Option<String>,
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmCompletion for OpenAiCompletion {
    fn model(&self) -> &str {
        &self.settings.model
    }

    async fn complete(&self, history: &[Message], prompt: &Prompt) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: build_messages(self.system_prompt.as_deref(), history, prompt.content()),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        if let Some(choice) = parsed.choices.first() {
            debug!(
                model = parsed.model.as_deref().unwrap_or(&self.settings.model),
                finish_reason = choice.finish_reason.as_deref().unwrap_or("unknown"),
                "Received chat completion"
            );
        }

        extract_text(parsed)
    }
}
