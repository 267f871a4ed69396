//! In-process providers for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::ProviderError;
use crate::providers::traits::{ChatTurn, GenerationProvider};

#[derive(Debug, Clone)]
pub struct RecordedChat {
    pub system_instruction: String,
    pub history: Vec<ChatTurn>,
    pub message: String,
}

/// Replays canned replies in call order and records every request.
#[derive(Default)]
pub struct MockProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    pub prompts: Mutex<Vec<String>>,
    pub schemas: Mutex<Vec<Value>>,
    pub chats: Mutex<Vec<RecordedChat>>,
}

impl MockProvider {
    pub fn replying(replies: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().len() + self.chats.lock().len()
    }

    fn next_reply(&self) -> Result<String, ProviderError> {
        self.replies
            .lock()
            .pop_front()
            .unwrap_or(Err(ProviderError::Network("no canned reply left".to_string())))
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, ProviderError> {
        self.prompts.lock().push(prompt.to_string());
        self.schemas.lock().push(schema.clone());
        self.next_reply()
    }

    async fn chat(
        &self,
        system_instruction: &str,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<String, ProviderError> {
        self.chats.lock().push(RecordedChat {
            system_instruction: system_instruction.to_string(),
            history: history.to_vec(),
            message: message.to_string(),
        });
        self.next_reply()
    }

    fn get_model_info(&self) -> String {
        "mock".to_string()
    }
}

/// Holds each request open until the test releases it, so completion order
/// can differ from submission order.
#[derive(Default)]
pub struct GatedProvider {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<String, ProviderError>>>>,
}

impl GatedProvider {
    /// Registers the gate for the next call and returns its release handle.
    pub fn gate(&self) -> oneshot::Sender<Result<String, ProviderError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back(rx);
        tx
    }

    async fn wait(&self) -> Result<String, ProviderError> {
        let gate = self.gates.lock().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or(Err(ProviderError::Network("gate dropped".to_string()))),
            None => Err(ProviderError::Network("no gate registered".to_string())),
        }
    }
}

#[async_trait]
impl GenerationProvider for GatedProvider {
    async fn generate_json(&self, _prompt: &str, _schema: &Value) -> Result<String, ProviderError> {
        self.wait().await
    }

    async fn chat(
        &self,
        _system_instruction: &str,
        _history: &[ChatTurn],
        _message: &str,
    ) -> Result<String, ProviderError> {
        self.wait().await
    }

    fn get_model_info(&self) -> String {
        "gated".to_string()
    }
}
