//! Prompt domain
//!
//! Renders stored history and the new input into the conversation transcript
//! sent to completion providers.

mod template;

pub use template::ConversationTemplate;
