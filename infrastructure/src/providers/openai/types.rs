//! OpenAI Chat Completions wire types and conversions.

use convo_application::ports::llm_gateway::GatewayError;
use convo_domain::{Message, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            Role::Human => "user",
            Role::Ai => "assistant",
            Role::System => "system",
        };
        Self::new(role, message.content.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Messages for one request: optional system prompt, history, then the prompt.
pub fn build_messages(
    system_prompt: Option<&str>,
    history: &[Message],
    prompt: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    if let Some(system) = system_prompt.filter(|s| !s.is_empty()) {
        messages.push(ChatMessage::new("system", system));
    }
    messages.extend(history.iter().map(ChatMessage::from));
    messages.push(ChatMessage::new("user", prompt));
    messages
}

/// Pull the reply text out of a parsed response.
pub fn extract_text(response: ChatCompletionResponse) -> Result<String, GatewayError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GatewayError::InvalidResponse("response contained no choices".to_string()))
}

/// Map a non-success HTTP status and its body to a gateway error.
pub fn status_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        401 | 403 => GatewayError::Authentication(message),
        404 => GatewayError::ModelNotAvailable(message),
        408 => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, message)),
    }
}
