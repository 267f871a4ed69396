pub mod chat;

pub use chat::{ChatClient, ChatMessage, ChatSession};
