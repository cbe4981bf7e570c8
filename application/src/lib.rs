//! Application layer for convo-chain
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod memory;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TurnConfig;
pub use memory::ConversationMemory;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmCompletion, LlmGateway},
    message_store::{MessageStore, StoreError},
};
pub use use_cases::run_turn::{RunTurnError, RunTurnInput, RunTurnOutput, RunTurnUseCase};
pub use use_cases::show_history::{ShowHistoryError, ShowHistoryUseCase};
