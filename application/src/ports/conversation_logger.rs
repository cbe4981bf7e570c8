//! Transcript port for conversation turns.
//!
//! [`RunTurnUseCase`](crate::RunTurnUseCase) emits one event per step of a
//! turn, in this order:
//!
//! | `event_type`      | Payload                                      |
//! |-------------------|----------------------------------------------|
//! | `turn_started`    | `session_id`, `table`, `prompt`              |
//! | `session_forked`  | `from`, `to`, `messages` (copied count)      |
//! | `prompt_rendered` | `session_id`, `model`, `text` (transcript)   |
//! | `llm_response`    | `session_id`, `model`, `bytes`, `text`       |
//! | `turn_completed`  | `session_id`, `forked_from`                  |
//!
//! `session_forked` only appears when a non-empty session was reused.
//! Diagnostics stay on `tracing`; this stream is the audit trail of what was
//! asked and answered, one JSON object per line when backed by the JSONL
//! adapter.

use serde_json::Value;

/// One step of a turn, as recorded in the transcript.
pub struct ConversationEvent {
    /// One of the event names listed in the module docs.
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for turn transcript events.
///
/// A failed transcript write must never fail the turn, so `log` is
/// synchronous and infallible and adapters swallow their own errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Used when no transcript path is configured.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
