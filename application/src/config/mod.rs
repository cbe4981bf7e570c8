//! Application-level configuration.
//!
//! - [`TurnConfig`]: explicit settings handed to the turn runner at construction

mod turn_config;

pub use turn_config::TurnConfig;
