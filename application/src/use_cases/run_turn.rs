//! Run Turn use case.
//!
//! Executes one conversational turn against a stored session:
//!
//! 1. Validate the prompt and credential (nothing is read or written otherwise)
//! 2. Use the caller's session id, or generate one when it is empty
//! 3. Read the stored history
//! 4. Fork a non-empty session: copy its history under a new id and continue there
//! 5. Ask the completion provider for a reply given history + prompt
//! 6. Let [`ConversationMemory`] append the exchange to the (possibly forked) session
//!
//! A session id that has been returned once and reused therefore never sees
//! another append; every reuse branches. Two concurrent calls reusing the same
//! id produce two independent branches.

use crate::config::TurnConfig;
use crate::memory::ConversationMemory;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::message_store::{MessageStore, StoreError};
use convo_domain::core::string::preview;
use convo_domain::{ApiKey, DomainError, Prompt, Session, SessionId};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a turn.
#[derive(Error, Debug)]
pub enum RunTurnError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Session store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Completion failed: {0}")]
    Completion(GatewayError),
}

impl RunTurnError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, RunTurnError::Authentication(_))
    }

    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, RunTurnError::StoreUnavailable(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RunTurnError::InvalidInput(_))
    }
}

impl From<GatewayError> for RunTurnError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Authentication(message) => RunTurnError::Authentication(message),
            other => RunTurnError::Completion(other),
        }
    }
}

/// Input for the [`RunTurnUseCase`].
#[derive(Debug, Clone)]
pub struct RunTurnInput {
    /// Credential for the completion provider.
    pub api_key: String,
    /// Session id from a previous turn; empty to start a new session.
    pub session_id: String,
    /// The user's prompt.
    pub prompt: String,
}

impl RunTurnInput {
    pub fn new(api_key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            session_id: String::new(),
            prompt: prompt.into(),
        }
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }
}

/// Result of a completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTurnOutput {
    /// The model's reply.
    pub response: String,
    /// Session to pass on the next turn.
    pub session_id: SessionId,
    /// The reused session this turn branched from, if it forked.
    pub forked_from: Option<SessionId>,
}

/// Use case for running a single turn with fork-on-reuse persistence.
pub struct RunTurnUseCase {
    store: Arc<dyn MessageStore>,
    gateway: Arc<dyn LlmGateway>,
    config: TurnConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunTurnUseCase {
    pub fn new(
        store: Arc<dyn MessageStore>,
        gateway: Arc<dyn LlmGateway>,
        config: TurnConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            config,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    /// Execute one turn.
    pub async fn execute(&self, input: RunTurnInput) -> Result<RunTurnOutput, RunTurnError> {
        let prompt = Prompt::try_new(input.prompt)?;
        let api_key = ApiKey::try_new(input.api_key)?;
        let requested = SessionId::or_generate(&input.session_id)?;
        let table = self.config.table_name.as_str();

        info!(
            session_id = %requested,
            table,
            "Starting turn: {}",
            preview(prompt.content(), 100)
        );
        self.conversation_logger.log(ConversationEvent::new(
            "turn_started",
            json!({
                "session_id": requested.as_str(),
                "table": table,
                "prompt": prompt.content(),
            }),
        ));

        let history = self.store.read(table, &requested).await?;
        let (session, forked_from) = Session::new(requested, history).resume();

        if let Some(origin) = &forked_from {
            self.store
                .write(table, session.id(), session.messages())
                .await?;
            info!(
                from = %origin,
                to = %session.id(),
                messages = session.messages().len(),
                "Forked reused session"
            );
            self.conversation_logger.log(ConversationEvent::new(
                "session_forked",
                json!({
                    "from": origin.as_str(),
                    "to": session.id().as_str(),
                    "messages": session.messages().len(),
                }),
            ));
        }

        let template = &self.config.template;
        let completion = if template.preamble().is_empty() {
            self.gateway.open(&api_key).await?
        } else {
            self.gateway
                .open_with_system_prompt(&api_key, template.preamble())
                .await?
        };

        let rendered = template.render(session.messages(), prompt.content());
        debug!(model = completion.model(), "Rendered prompt:\n{}", rendered);
        self.conversation_logger.log(ConversationEvent::new(
            "prompt_rendered",
            json!({
                "session_id": session.id().as_str(),
                "model": completion.model(),
                "text": rendered,
            }),
        ));

        let response = completion.complete(session.messages(), &prompt).await?;
        self.conversation_logger.log(ConversationEvent::new(
            "llm_response",
            json!({
                "session_id": session.id().as_str(),
                "model": completion.model(),
                "bytes": response.len(),
                "text": response,
            }),
        ));

        let memory = ConversationMemory::new(self.store.clone(), table, session.id().clone());
        memory.save_context(prompt.content(), &response).await?;

        info!(session_id = %session.id(), "Turn completed");
        self.conversation_logger.log(ConversationEvent::new(
            "turn_completed",
            json!({
                "session_id": session.id().as_str(),
                "forked_from": forked_from.as_ref().map(SessionId::as_str),
            }),
        ));

        Ok(RunTurnOutput {
            response,
            session_id: session.id().clone(),
            forked_from,
        })
    }
}
