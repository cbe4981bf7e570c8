//! AWS Bedrock Converse API provider
//!
//! Authenticates with AWS IAM credentials from the environment, so the
//! caller-supplied API key is not used by this provider.

mod adapter;
mod session;
mod types;

pub use adapter::BedrockGateway;
