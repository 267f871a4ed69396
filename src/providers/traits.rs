use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One prior turn of a conversation as forwarded to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

/// A hosted text-generation service.
///
/// Implementations make exactly one outbound request per call and keep no
/// conversation state between calls.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generates a JSON document constrained by `schema` and returns its raw text.
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, ProviderError>;

    /// Continues `history` with `message` under a fixed system instruction.
    async fn chat(
        &self,
        system_instruction: &str,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<String, ProviderError>;

    fn get_model_info(&self) -> String;
}
