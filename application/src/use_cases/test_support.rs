//! Port doubles shared by the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmCompletion, LlmGateway};
use crate::ports::message_store::{MessageStore, StoreError};
use async_trait::async_trait;
use convo_domain::{ApiKey, Message, Prompt, SessionId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory store that records every write and can be told to fail.
#[derive(Default)]
pub struct RecordingStore {
    records: Mutex<HashMap<(String, String), Vec<Message>>>,
    writes: Mutex<Vec<(String, SessionId)>>,
    fail_reads: bool,
    fail_writes: bool,
    /// Number of upcoming writes that fail before writes succeed again.
    failing_write_budget: Mutex<usize>,
}

impl RecordingStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_first_writes(count: usize) -> Self {
        Self {
            failing_write_budget: Mutex::new(count),
            ..Self::default()
        }
    }

    pub fn seed(&self, table: &str, id: &SessionId, messages: Vec<Message>) {
        self.records
            .lock()
            .unwrap()
            .insert((table.to_string(), id.to_string()), messages);
    }

    pub fn get(&self, table: &str, id: &SessionId) -> Vec<Message> {
        self.records
            .lock()
            .unwrap()
            .get(&(table.to_string(), id.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    pub fn writes(&self) -> Vec<(String, SessionId)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageStore for RecordingStore {
    async fn read(&self, table: &str, session_id: &SessionId) -> Result<Vec<Message>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("read refused".to_string()));
        }
        Ok(self.get(table, session_id))
    }

    async fn write(
        &self,
        table: &str,
        session_id: &SessionId,
        messages: &[Message],
    ) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("write refused".to_string()));
        }
        {
            let mut budget = self.failing_write_budget.lock().unwrap();
            if *budget > 0 {
                *budget -= 1;
                return Err(StoreError::Unavailable("write refused".to_string()));
            }
        }
        self.writes
            .lock()
            .unwrap()
            .push((table.to_string(), session_id.clone()));
        self.seed(table, session_id, messages.to_vec());
        Ok(())
    }
}

/// What a completion call received.
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub system_prompt: Option<String>,
    pub history: Vec<Message>,
    pub prompt: String,
}

/// Gateway that answers with `"reply N"` and accepts a single key.
pub struct ScriptedGateway {
    accepted_key: String,
    calls: Arc<Mutex<Vec<CompletionCall>>>,
}

impl ScriptedGateway {
    pub fn accepting(key: &str) -> Self {
        Self {
            accepted_key: key.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }

    fn completion(&self, api_key: &ApiKey, system_prompt: Option<String>) -> Box<dyn LlmCompletion> {
        Box::new(ScriptedCompletion {
            authorized: api_key.expose() == self.accepted_key,
            system_prompt,
            calls: self.calls.clone(),
        })
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn open(&self, api_key: &ApiKey) -> Result<Box<dyn LlmCompletion>, GatewayError> {
        Ok(self.completion(api_key, None))
    }

    async fn open_with_system_prompt(
        &self,
        api_key: &ApiKey,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmCompletion>, GatewayError> {
        Ok(self.completion(api_key, Some(system_prompt.to_string())))
    }
}

struct ScriptedCompletion {
    authorized: bool,
    system_prompt: Option<String>,
    calls: Arc<Mutex<Vec<CompletionCall>>>,
}

#[async_trait]
impl LlmCompletion for ScriptedCompletion {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, history: &[Message], prompt: &Prompt) -> Result<String, GatewayError> {
        if !self.authorized {
            return Err(GatewayError::Authentication(
                "Incorrect API key provided".to_string(),
            ));
        }
        let mut calls = self.calls.lock().unwrap();
        calls.push(CompletionCall {
            system_prompt: self.system_prompt.clone(),
            history: history.to_vec(),
            prompt: prompt.content().to_string(),
        });
        Ok(format!("reply {}", calls.len()))
    }
}
