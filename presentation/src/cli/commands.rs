//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for a completed turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the model response
    Text,
    /// Response followed by session details
    Full,
    /// JSON object
    Json,
}

impl From<OutputFormat> for convo_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => convo_domain::OutputFormat::Text,
            OutputFormat::Full => convo_domain::OutputFormat::Full,
            OutputFormat::Json => convo_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for convo-chain
#[derive(Parser, Debug)]
#[command(name = "convo-chain")]
#[command(author, version, about = "Conversational LLM turns with forkable stored sessions")]
#[command(long_about = r#"
convo-chain runs one conversational turn against an LLM and stores the
exchange in a session store.

Pass --session to continue a conversation. Reusing a session that already
has history forks it: the history is copied under a new session id and the
new turn is appended there. The id to use next is always printed.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./convo.toml        Project-level config
3. ~/.config/convo-chain/config.toml   Global config

Example:
  convo-chain run "What's a good name for a cat?"
  convo-chain run --session 6f1c... "Why that one?"
  convo-chain history 6f1c...
"#)]
pub struct Cli {
    /// Required unless --show-config is given
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (default from config, else text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators and session notes
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one conversational turn
    Run {
        /// The prompt to send
        prompt: String,

        /// Session to continue (a new one is created when omitted)
        #[arg(short, long, value_name = "ID", default_value = "")]
        session: String,

        /// Provider API key (default: the variable named by providers.openai.api_key_env)
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,
    },

    /// Print the stored history of a session
    History {
        /// Session id to show
        session_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_session() {
        let cli = Cli::try_parse_from([
            "convo-chain",
            "run",
            "--session",
            "abc",
            "-o",
            "json",
            "Hello",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Command::Run {
                prompt,
                session,
                api_key,
            }) => {
                assert_eq!(prompt, "Hello");
                assert_eq!(session, "abc");
                assert!(api_key.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_without_session_defaults_to_empty() {
        let cli = Cli::try_parse_from(["convo-chain", "-vv", "run", "Hello"]).unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(
            matches!(cli.command, Some(Command::Run { ref session, .. }) if session.is_empty())
        );
    }

    #[test]
    fn test_parse_history() {
        let cli = Cli::try_parse_from(["convo-chain", "history", "abc", "--no-color"]).unwrap();

        assert!(cli.no_color);
        assert!(
            matches!(cli.command, Some(Command::History { ref session_id }) if session_id == "abc")
        );
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["convo-chain", "--show-config"]).unwrap();

        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_requires_prompt() {
        assert!(Cli::try_parse_from(["convo-chain", "run"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            convo_domain::OutputFormat::from(OutputFormat::Full),
            convo_domain::OutputFormat::Full
        );
    }
}
