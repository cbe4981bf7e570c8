//! Conversation session domain.
//!
//! - [`id::SessionId`]: opaque identifier of a stored session
//! - [`entities::Message`]: a single role-tagged message
//! - [`entities::Session`]: an ordered history plus the fork-on-reuse rule

pub mod entities;
pub mod id;
