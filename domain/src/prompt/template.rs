//! Buffer-style conversation template

use crate::session::entities::{Message, Role};
use serde::{Deserialize, Serialize};

const DEFAULT_PREAMBLE: &str = "The following is a friendly conversation between a human and an AI. \
The AI is talkative and provides lots of specific details from its context. \
If the AI does not know the answer to a question, it truthfully says it does not know.";

/// Template turning a history into a single conversation transcript.
///
/// ```text
/// {preamble}
///
/// Current conversation:
/// {history}
/// Human: {input}
/// AI:
/// ```
///
/// Each history line is `"{prefix}: {content}"`. Chat-style providers send
/// [`preamble`](Self::preamble) as the system message instead of the full
/// transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationTemplate {
    pub preamble: String,
    pub human_prefix: String,
    pub ai_prefix: String,
}

impl Default for ConversationTemplate {
    fn default() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            human_prefix: "Human".to_string(),
            ai_prefix: "AI".to_string(),
        }
    }
}

impl ConversationTemplate {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    fn prefix(&self, role: Role) -> &str {
        match role {
            Role::Human => &self.human_prefix,
            Role::Ai => &self.ai_prefix,
            Role::System => "System",
        }
    }

    /// Render the history buffer, one `"{prefix}: {content}"` line per message.
    pub fn render_history(&self, history: &[Message]) -> String {
        history
            .iter()
            .map(|m| format!("{}: {}", self.prefix(m.role), m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the complete transcript for `input`.
    pub fn render(&self, history: &[Message], input: &str) -> String {
        format!(
            "{}\n\nCurrent conversation:\n{}\n{}: {}\n{}:",
            self.preamble,
            self.render_history(history),
            self.human_prefix,
            input,
            self.ai_prefix
        )
    }
}
