//! Type conversions between AWS Bedrock SDK and domain types

use aws_sdk_bedrockruntime::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types as bedrock;
use convo_application::ports::llm_gateway::GatewayError;
use convo_domain::{Message, Role};

// ─── Domain → Bedrock ────────────────────────────────────────────

fn bedrock_message(
    role: bedrock::ConversationRole,
    text: String,
) -> Result<bedrock::Message, GatewayError> {
    bedrock::Message::builder()
        .role(role)
        .content(bedrock::ContentBlock::Text(text))
        .build()
        .map_err(|e| GatewayError::RequestFailed(format!("Failed to build message: {}", e)))
}

/// Build the system blocks and alternating message list for a Converse call.
///
/// Stored system messages join the system prompt. Converse rejects two
/// consecutive turns from the same role, so adjacent same-role messages are
/// merged with a blank line between them.
pub fn build_conversation(
    system_prompt: Option<&str>,
    history: &[Message],
    prompt: &str,
) -> Result<(Vec<bedrock::SystemContentBlock>, Vec<bedrock::Message>), GatewayError> {
    let mut system: Vec<bedrock::SystemContentBlock> = system_prompt
        .filter(|p| !p.is_empty())
        .map(|p| bedrock::SystemContentBlock::Text(p.to_string()))
        .into_iter()
        .collect();

    let mut turns: Vec<(bedrock::ConversationRole, String)> = Vec::new();
    let mut push_turn = |role: bedrock::ConversationRole, text: &str| match turns.last_mut() {
        Some((last_role, last_text)) if *last_role == role => {
            last_text.push_str("\n\n");
            last_text.push_str(text);
        }
        _ => turns.push((role, text.to_string())),
    };

    for message in history {
        match message.role {
            Role::System => {
                system.push(bedrock::SystemContentBlock::Text(message.content.clone()))
            }
            Role::Human => push_turn(bedrock::ConversationRole::User, &message.content),
            Role::Ai => push_turn(bedrock::ConversationRole::Assistant, &message.content),
        }
    }
    push_turn(bedrock::ConversationRole::User, prompt);

    let messages = turns
        .into_iter()
        .map(|(role, text)| bedrock_message(role, text))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((system, messages))
}

// ─── Bedrock → Domain ────────────────────────────────────────────

/// Concatenate the text blocks of a Converse output.
pub fn output_text(output: &bedrock::ConverseOutput) -> Result<String, GatewayError> {
    match output {
        bedrock::ConverseOutput::Message(message) => Ok(message
            .content()
            .iter()
            .filter_map(|block| match block {
                bedrock::ContentBlock::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")),
        other => Err(GatewayError::InvalidResponse(format!(
            "Unexpected Bedrock output: {:?}",
            other
        ))),
    }
}

/// Convert a Bedrock SDK error to a GatewayError.
pub fn convert_converse_error(err: &SdkError<ConverseError>) -> GatewayError {
    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::AccessDeniedException(e) => {
                GatewayError::Authentication(format!("Bedrock access denied: {}", e))
            }
            ConverseError::ThrottlingException(e) => {
                GatewayError::RequestFailed(format!("Bedrock throttled: {}", e))
            }
            ConverseError::ModelNotReadyException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock model not ready: {}", e))
            }
            ConverseError::ResourceNotFoundException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock model not found: {}", e))
            }
            ConverseError::ValidationException(e) => {
                GatewayError::RequestFailed(format!("Bedrock validation error: {}", e))
            }
            ConverseError::ModelTimeoutException(_) => GatewayError::Timeout,
            other
                if matches!(
                    other.code(),
                    Some("UnrecognizedClientException" | "ExpiredTokenException")
                ) =>
            {
                GatewayError::Authentication(format!(
                    "Bedrock rejected credentials: {}",
                    other.message().unwrap_or("no message")
                ))
            }
            other => GatewayError::RequestFailed(format!("Bedrock error: {:?}", other)),
        },
        other => GatewayError::ConnectionError(format!("Bedrock SDK error: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(message: &bedrock::Message) -> String {
        message
            .content()
            .iter()
            .filter_map(|b| b.as_text().ok().cloned())
            .collect()
    }

    #[test]
    fn test_prompt_is_last_user_turn() {
        let history = vec![Message::human("Hello"), Message::ai("Hi!")];
        let (system, messages) =
            build_conversation(Some("Be friendly."), &history, "How are you?").unwrap();

        assert_eq!(system.len(), 1);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role(), &bedrock::ConversationRole::User);
        assert_eq!(messages[1].role(), &bedrock::ConversationRole::Assistant);
        assert_eq!(messages[2].role(), &bedrock::ConversationRole::User);
        assert_eq!(text_of(&messages[2]), "How are you?");
    }

    #[test]
    fn test_system_messages_move_to_system_blocks() {
        let history = vec![Message::system("Remember the user likes cats.")];
        let (system, messages) = build_conversation(None, &history, "Hi").unwrap();

        assert_eq!(system.len(), 1);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_consecutive_user_turns_are_merged() {
        let history = vec![Message::human("first"), Message::human("second")];
        let (_, messages) = build_conversation(None, &history, "third").unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(text_of(&messages[0]), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn test_output_text_joins_text_blocks() {
        let message = bedrock::Message::builder()
            .role(bedrock::ConversationRole::Assistant)
            .content(bedrock::ContentBlock::Text("Hello ".to_string()))
            .content(bedrock::ContentBlock::Text("there".to_string()))
            .build()
            .unwrap();
        let output = bedrock::ConverseOutput::Message(message);

        assert_eq!(output_text(&output).unwrap(), "Hello there");
    }
}
