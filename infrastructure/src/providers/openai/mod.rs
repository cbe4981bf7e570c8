//! OpenAI Chat Completions provider
//!
//! The API key is supplied per call, so the shared HTTP client carries no
//! auth header; each [`LlmCompletion`](convo_application::LlmCompletion)
//! sends its own bearer token.

mod gateway;
mod types;

pub use gateway::OpenAiGateway;
