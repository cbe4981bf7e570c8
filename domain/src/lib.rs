//! Domain layer for convo-chain
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session is a named, ordered history of conversational turns stored
//! under a [`SessionId`]. Sessions are append-only while fresh and frozen
//! once they have been handed back to a caller and reused:
//!
//! - **Fresh**: no stored messages yet, turns are appended under the same id
//! - **Fork**: a reused, non-empty session is copied verbatim under a new id
//!   before the next turn is appended, leaving the original untouched
//!
//! ## Conversation template
//!
//! [`ConversationTemplate`] renders stored history as a buffer transcript
//! (`Human: ...` / `AI: ...`) in front of the new input.

pub mod config;
pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{credential::ApiKey, error::DomainError, prompt::Prompt};
pub use prompt::ConversationTemplate;
pub use session::{
    entities::{Message, Role, Session},
    id::SessionId,
};
