//! Console output formatter for turns and session histories

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use convo_application::RunTurnOutput;
use convo_domain::{Message, OutputFormat, Role, SessionId};
use serde_json::json;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format only the model response
    pub fn format_text(turn: &RunTurnOutput) -> String {
        turn.response.clone()
    }

    /// Format the response followed by the session it was stored under
    pub fn format_full(turn: &RunTurnOutput) -> String {
        let mut output = String::new();

        output.push_str(&turn.response);
        output.push_str("\n\n");
        output.push_str(&format!(
            "{} {}\n",
            "Session:".cyan().bold(),
            turn.session_id
        ));
        if let Some(origin) = &turn.forked_from {
            output.push_str(&format!(
                "{} {}\n",
                "Forked from:".yellow().bold(),
                origin
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(turn: &RunTurnOutput) -> String {
        let value = json!({
            "response": turn.response,
            "session_id": turn.session_id,
            "forked_from": turn.forked_from,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line note about which session to continue from
    pub fn session_note(turn: &RunTurnOutput) -> String {
        match &turn.forked_from {
            Some(origin) => format!(
                "{} {} {}",
                "session:".dimmed(),
                turn.session_id,
                format!("(forked from {})", origin).dimmed()
            ),
            None => format!("{} {}", "session:".dimmed(), turn.session_id),
        }
    }

    /// Format a stored history
    pub fn format_history(
        session_id: &SessionId,
        messages: &[Message],
        format: OutputFormat,
    ) -> String {
        if format == OutputFormat::Json {
            let value = json!({
                "session_id": session_id,
                "messages": messages,
            });
            return serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
        }

        if messages.is_empty() {
            return format!("{} {}", "No messages stored for".dimmed(), session_id);
        }

        let mut output = format!(
            "{}\n",
            format!("Session {} ({} messages)", session_id, messages.len())
                .cyan()
                .bold()
        );
        for message in messages {
            let label = match message.role {
                Role::Human => "human".green().bold(),
                Role::Ai => "ai".yellow().bold(),
                Role::System => "system".magenta().bold(),
            };
            output.push_str(&format!(
                "\n{}\n{}\n",
                label,
                Self::indent(&message.content, "  ")
            ));
        }
        output
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_text(&self, turn: &RunTurnOutput) -> String {
        Self::format_text(turn)
    }

    fn format_full(&self, turn: &RunTurnOutput) -> String {
        Self::format_full(turn)
    }

    fn format_json(&self, turn: &RunTurnOutput) -> String {
        Self::format_json(turn)
    }

    fn format_history(
        &self,
        session_id: &SessionId,
        messages: &[Message],
        format: OutputFormat,
    ) -> String {
        Self::format_history(session_id, messages, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(forked_from: Option<&str>) -> RunTurnOutput {
        RunTurnOutput {
            response: "Hello there".to_string(),
            session_id: "new-id".parse().unwrap(),
            forked_from: forked_from.map(|id| id.parse().unwrap()),
        }
    }

    #[test]
    fn test_text_is_response_only() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter.format_turn(&turn(None), OutputFormat::Text),
            "Hello there"
        );
    }

    #[test]
    fn test_full_includes_session_and_origin() {
        colored::control::set_override(false);
        let output = ConsoleFormatter.format_turn(&turn(Some("old-id")), OutputFormat::Full);

        assert!(output.starts_with("Hello there\n"));
        assert!(output.contains("Session: new-id"));
        assert!(output.contains("Forked from: old-id"));
    }

    #[test]
    fn test_json_fields() {
        let output = ConsoleFormatter.format_turn(&turn(None), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["response"], "Hello there");
        assert_eq!(value["session_id"], "new-id");
        assert!(value["forked_from"].is_null());
    }

    #[test]
    fn test_history_json_lists_messages() {
        let id: SessionId = "abc".parse().unwrap();
        let messages = vec![Message::human("Hi"), Message::ai("Hello")];
        let output = ConsoleFormatter::format_history(&id, &messages, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["messages"][0]["role"], "human");
        assert_eq!(value["messages"][1]["content"], "Hello");
    }

    #[test]
    fn test_history_text_indents_content() {
        colored::control::set_override(false);
        let id: SessionId = "abc".parse().unwrap();
        let output = ConsoleFormatter::format_history(
            &id,
            &[Message::human("line one\nline two")],
            OutputFormat::Text,
        );

        assert!(output.contains("Session abc (1 messages)"));
        assert!(output.contains("  line one\n  line two"));
    }

    #[test]
    fn test_empty_history_message() {
        colored::control::set_override(false);
        let id: SessionId = "abc".parse().unwrap();
        let output = ConsoleFormatter::format_history(&id, &[], OutputFormat::Full);

        assert_eq!(output, "No messages stored for abc");
    }
}
