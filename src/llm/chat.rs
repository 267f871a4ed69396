use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{ChatError, InputError, ProviderError};
use crate::providers::traits::{ChatTurn, GenerationProvider, Role};

pub const SYSTEM_INSTRUCTION: &str = "You are SynergyCore AI. You help people understand food combinations. \
Explain things simply, like you are talking to a friend. \
Be accurate but avoid using too much technical jargon.";

pub const GREETING: &str = "Hi! I'm here to help you with food combos. Ask me anything!";

const GREETING_ID: &str = "init";

/// A transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn to_turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            text: self.text.clone(),
        }
    }
}

/// Stateless chat: the caller owns the history and passes all of it on
/// every call.
#[derive(Clone)]
pub struct ChatClient {
    provider: Arc<dyn GenerationProvider>,
}

impl ChatClient {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    pub async fn send_message(&self, history: &[ChatTurn], new_message: &str) -> Result<String, ChatError> {
        info!(turns = history.len(), "sending chat message");

        let reply = self
            .provider
            .chat(SYSTEM_INSTRUCTION, history, new_message)
            .await
            .and_then(|text| {
                if text.trim().is_empty() {
                    Err(ProviderError::EmptyReply)
                } else {
                    Ok(text)
                }
            });

        reply.map_err(|e| {
            error!(kind = e.kind(), "chat request failed: {}", e);
            ChatError(e)
        })
    }
}

/// One chat panel's transcript.
///
/// Sending takes `&mut self`, so a session has at most one message in flight.
pub struct ChatSession {
    client: ChatClient,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(client: ChatClient) -> Self {
        let mut greeting = ChatMessage::new(Role::Model, GREETING);
        greeting.id = GREETING_ID.to_string();

        Self {
            client,
            messages: vec![greeting],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The turns forwarded to the service. The local greeting is not part of
    /// the conversation the model has seen.
    fn history(&self) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .filter(|m| m.id != GREETING_ID)
            .map(ChatMessage::to_turn)
            .collect()
    }

    /// Appends `input` and the model's reply to the transcript.
    ///
    /// A failed request appends an apology from the model instead, so the
    /// transcript always ends with a model message after a send.
    pub async fn send(&mut self, input: &str) -> Result<&ChatMessage, InputError> {
        if input.trim().is_empty() {
            return Err(InputError::EmptyMessage);
        }

        let history = self.history();
        let user_message = ChatMessage::new(Role::User, input);
        self.messages.push(user_message);

        let reply = match self.client.send_message(&history, input).await {
            Ok(text) => text,
            Err(e) => e.to_string(),
        };
        self.messages.push(ChatMessage::new(Role::Model, reply));

        Ok(&self.messages[self.messages.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockProvider;
    use std::collections::HashSet;

    #[tokio::test]
    async fn client_carries_no_state_between_calls() {
        let provider = Arc::new(MockProvider::replying(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]));
        let client = ChatClient::new(provider.clone());
        let history = vec![ChatTurn::user("Is coffee ok?"), ChatTurn::model("In moderation.")];

        client.send_message(&history, "With cocoa?").await.unwrap();
        client.send_message(&history, "With cocoa?").await.unwrap();

        let chats = provider.chats.lock();
        assert_eq!(chats.len(), 2);
        assert_eq!(chats[0].history, chats[1].history);
        assert_eq!(chats[0].history, history);
        assert_eq!(chats[1].message, "With cocoa?");
        assert_eq!(chats[0].system_instruction, SYSTEM_INSTRUCTION);
    }

    #[tokio::test]
    async fn blank_reply_is_an_empty_reply_error() {
        let provider = Arc::new(MockProvider::replying(vec![Ok("  \n".to_string())]));
        let client = ChatClient::new(provider);

        let err = client.send_message(&[], "hello").await.unwrap_err();
        assert_eq!(err.cause().kind(), "empty_reply");
    }

    #[tokio::test]
    async fn session_starts_with_greeting_and_records_turns() {
        let provider = Arc::new(MockProvider::replying(vec![
            Ok("Pair it with lemon.".to_string()),
            Ok("Yes, steak works too.".to_string()),
        ]));
        let mut session = ChatSession::new(ChatClient::new(provider.clone()));
        assert_eq!(session.messages()[0].text, GREETING);

        let reply = session.send("How do I absorb iron from spinach?").await.unwrap();
        assert_eq!(reply.text, "Pair it with lemon.");
        assert_eq!(reply.role, Role::Model);

        session.send("And meat?").await.unwrap();

        let chats = provider.chats.lock();
        assert!(chats[0].history.is_empty());
        assert_eq!(
            chats[1].history,
            vec![
                ChatTurn::user("How do I absorb iron from spinach?"),
                ChatTurn::model("Pair it with lemon."),
            ]
        );
        assert_eq!(session.messages().len(), 5);

        let ids: HashSet<&str> = session.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn failure_appends_apology() {
        let provider = Arc::new(MockProvider::replying(vec![Err(ProviderError::Network(
            "dns".to_string(),
        ))]));
        let mut session = ChatSession::new(ChatClient::new(provider));

        let reply = session.send("hello").await.unwrap();

        assert_eq!(
            reply.text,
            "Connection interruption detected. Please verify API Key configuration."
        );
        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Model, Role::User, Role::Model]);
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let provider = Arc::new(MockProvider::default());
        let mut session = ChatSession::new(ChatClient::new(provider.clone()));

        assert_eq!(session.send("   ").await.unwrap_err(), InputError::EmptyMessage);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(provider.calls(), 0);
    }
}
