//! Turn runner configuration.

use convo_domain::ConversationTemplate;
use serde::{Deserialize, Serialize};

/// Settings for [`RunTurnUseCase`](crate::use_cases::run_turn::RunTurnUseCase).
///
/// Passed in by value at construction so the runner never reads process-wide
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnConfig {
    /// Store collection (DynamoDB table) holding the sessions.
    pub table_name: String,
    /// Transcript template used to render the conversation context.
    pub template: ConversationTemplate,
}

impl TurnConfig {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            template: ConversationTemplate::default(),
        }
    }

    pub fn with_template(mut self, template: ConversationTemplate) -> Self {
        self.template = template;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_template() {
        let config = TurnConfig::new("sessions");
        assert_eq!(config.table_name, "sessions");
        assert_eq!(config.template, ConversationTemplate::default());
    }

    #[test]
    fn test_with_template() {
        let template = ConversationTemplate {
            human_prefix: "User".to_string(),
            ..ConversationTemplate::default()
        };
        let config = TurnConfig::new("sessions").with_template(template.clone());
        assert_eq!(config.template, template);
    }
}
