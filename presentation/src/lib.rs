//! Presentation layer for convo-chain
//!
//! This crate contains CLI definitions, output formatters
//! and the progress spinner.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::TurnProgress;
