//! Core domain concepts shared across all subdomains.
//!
//! - [`prompt::Prompt`]: a validated prompt to send for completion
//! - [`credential::ApiKey`]: the caller-supplied LLM credential
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod prompt;
pub mod string;
