//! Conversation template configuration from TOML (`[chain]` section)

use convo_domain::ConversationTemplate;
use serde::{Deserialize, Serialize};

/// Raw `[chain]` configuration
///
/// Only `preamble` reaches the completion provider, as its system prompt.
/// The prefixes label turns in the rendered transcript (debug log and the
/// `prompt_rendered` transcript event); providers receive role-tagged
/// messages and never see them.
///
/// ```toml
/// [chain]
/// human_prefix = "Human"
/// ai_prefix = "AI"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChainConfig {
    /// Transcript label for human turns.
    pub human_prefix: String,
    /// Transcript label for AI turns.
    pub ai_prefix: String,
    /// Overrides the built-in preamble when set.
    pub preamble: Option<String>,
}

impl Default for FileChainConfig {
    fn default() -> Self {
        let template = ConversationTemplate::default();
        Self {
            human_prefix: template.human_prefix,
            ai_prefix: template.ai_prefix,
            preamble: None,
        }
    }
}

impl FileChainConfig {
    pub fn to_template(&self) -> ConversationTemplate {
        let defaults = ConversationTemplate::default();
        ConversationTemplate {
            preamble: self.preamble.clone().unwrap_or(defaults.preamble),
            human_prefix: self.human_prefix.clone(),
            ai_prefix: self.ai_prefix.clone(),
        }
    }
}
