//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod run_turn;
pub mod show_history;

#[cfg(test)]
pub(crate) mod test_support;
