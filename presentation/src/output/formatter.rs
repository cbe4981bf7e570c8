//! Output formatter trait

use convo_application::RunTurnOutput;
use convo_domain::{Message, OutputFormat, SessionId};

/// Trait for formatting turn results and stored histories
pub trait OutputFormatter {
    /// Only the response text
    fn format_text(&self, turn: &RunTurnOutput) -> String;

    /// Response plus session details
    fn format_full(&self, turn: &RunTurnOutput) -> String;

    /// Machine-readable JSON
    fn format_json(&self, turn: &RunTurnOutput) -> String;

    /// A session's stored messages
    fn format_history(
        &self,
        session_id: &SessionId,
        messages: &[Message],
        format: OutputFormat,
    ) -> String;

    fn format_turn(&self, turn: &RunTurnOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format_text(turn),
            OutputFormat::Full => self.format_full(turn),
            OutputFormat::Json => self.format_json(turn),
        }
    }
}
