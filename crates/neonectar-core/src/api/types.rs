//! Request and response bodies of the documentation API.

use serde::{Deserialize, Serialize};

use crate::state::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDocumentationRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
}

impl ProcessDocumentationRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sections: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDocumentationResponse {
    pub success: bool,
    pub message: String,
    pub script: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
}

/// A chat turn request. `messages` is the whole transcript so far, including
/// the user turn that was just added; the server keeps no conversation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub doc_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// Narrated audio for the reply, when the backend produced one
    #[serde(default)]
    pub audio_url: Option<String>,
}
