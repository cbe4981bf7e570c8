//! CLI entrypoint for convo-chain
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use convo_application::{
    ConversationLogger, NoConversationLogger, RunTurnError, RunTurnInput, RunTurnUseCase,
    ShowHistoryError, ShowHistoryUseCase, TurnConfig,
};
use convo_domain::{OutputFormat, SessionId};
use convo_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, Severity, build_gateway,
    build_message_store,
};
use convo_presentation::{Cli, Command, ConsoleFormatter, OutputFormatter, TurnProgress};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code(&e)
        }
    }
}

/// 2 = invalid input, 3 = authentication, 4 = store unavailable, 1 = other.
fn exit_code(error: &anyhow::Error) -> ExitCode {
    if let Some(e) = error.downcast_ref::<RunTurnError>() {
        return match e {
            RunTurnError::InvalidInput(_) => ExitCode::from(2),
            RunTurnError::Authentication(_) => ExitCode::from(3),
            RunTurnError::StoreUnavailable(_) => ExitCode::from(4),
            RunTurnError::Completion(_) => ExitCode::FAILURE,
        };
    }
    if let Some(e) = error.downcast_ref::<ShowHistoryError>() {
        return match e {
            ShowHistoryError::InvalidInput(_) => ExitCode::from(2),
            ShowHistoryError::StoreUnavailable(_) => ExitCode::from(4),
        };
    }
    ExitCode::FAILURE
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let (_, provider_issues) = config.provider_kind();
    let mut has_errors = false;
    for issue in config.validate().into_iter().chain(provider_issues) {
        match issue.severity {
            Severity::Error => {
                has_errors = true;
                eprintln!("config error: {}", issue.message);
            }
            Severity::Warning => eprintln!("config warning: {}", issue.message),
        }
    }
    if has_errors {
        bail!("Invalid configuration");
    }

    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    let _guard = logging::init(cli.verbose, log_file.as_deref());

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let Some(command) = cli.command else {
        bail!("A command is required. Use `convo-chain run <PROMPT>` or `convo-chain --help`.");
    };

    info!("Starting convo-chain");

    // === Dependency Injection ===
    let store = build_message_store(&config.store)
        .await
        .map_err(RunTurnError::from)?;

    match command {
        Command::Run {
            prompt,
            session,
            api_key,
        } => {
            let (provider, _) = config.provider_kind();
            let gateway = build_gateway(provider, &config.providers).await?;

            let api_key = match api_key {
                Some(key) => key,
                None => std::env::var(&config.providers.openai.api_key_env).unwrap_or_else(|_| {
                    warn!(
                        var = %config.providers.openai.api_key_env,
                        "API key variable is not set"
                    );
                    String::new()
                }),
            };

            let conversation_logger: Arc<dyn ConversationLogger> = config
                .logging
                .transcript
                .as_deref()
                .and_then(JsonlConversationLogger::open)
                .map(|logger| Arc::new(logger) as Arc<dyn ConversationLogger>)
                .unwrap_or_else(|| Arc::new(NoConversationLogger));

            let turn_config = TurnConfig::new(config.store.table_name.clone())
                .with_template(config.chain.to_template());
            let use_case = RunTurnUseCase::new(store, gateway, turn_config)
                .with_conversation_logger(conversation_logger);

            let input = RunTurnInput::new(api_key, prompt).with_session_id(session);

            let progress = if cli.quiet || format == OutputFormat::Json {
                TurnProgress::hidden()
            } else {
                TurnProgress::start("Waiting for the model...")
            };
            let result = use_case.execute(input).await;
            match &result {
                Ok(_) => progress.finish(),
                Err(_) => progress.fail("Turn failed"),
            }
            let output = result?;

            println!("{}", ConsoleFormatter.format_turn(&output, format));
            if format == OutputFormat::Text && !cli.quiet {
                eprintln!("{}", ConsoleFormatter::session_note(&output));
            }
        }
        Command::History { session_id } => {
            let use_case = ShowHistoryUseCase::new(store, config.store.table_name.clone());
            let id: SessionId = session_id.parse().map_err(ShowHistoryError::from)?;
            let messages = use_case.execute(id.as_str()).await?;

            println!(
                "{}",
                ConsoleFormatter.format_history(&id, &messages, format)
            );
        }
    }

    Ok(())
}
