//! Documentation assistant client.
//!
//! [`ApiService`] is what callers hold. It routes every call either to the
//! live HTTP client or to the in-memory mock, depending on how it was built.

pub mod error;
pub mod http;
pub mod mock;
pub mod service;
pub mod types;

use async_trait::async_trait;

pub use error::ApiError;
pub use http::{HttpDocsClient, ReqwestTransport, Transport, CHAT_SEND_PATH, PROCESS_DOCS_PATH};
pub use mock::{MockResponder, DEFAULT_MOCK_DELAY};
pub use service::ApiService;
pub use types::{ChatRequest, ChatResponse, ProcessDocumentationRequest, ProcessDocumentationResponse};

/// The two operations every backing of the client offers.
#[async_trait]
pub trait DocsAssistant: Send + Sync {
    /// Turn a documentation URL into a narration script.
    async fn process_documentation(
        &self,
        request: &ProcessDocumentationRequest,
    ) -> Result<ProcessDocumentationResponse, ApiError>;

    /// Answer the newest turn of `request.messages`.
    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}
