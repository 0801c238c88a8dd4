//! UI-agnostic chat state types
//!
//! The transcript lives in whichever UI drives the session. These types are
//! also the wire format of `ChatRequest::messages`.

use serde::{Deserialize, Serialize};

/// Greeting shown as the first assistant turn of every lesson chat
pub const GREETING: &str = "Hi there! 👋 I'm your interactive documentation guide. \
I'll help you understand this demo better. Feel free to ask me any questions about \
what you're seeing or if you need clarification about any part of the demonstration. \
What would you like to know more about?";

/// A chat message in the assistant conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// The role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "ai")]
    Assistant,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A fresh transcript seeded with the greeting
pub fn initial_transcript() -> Vec<ChatMessage> {
    vec![ChatMessage::assistant(GREETING)]
}
