use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::error::ApiError;
use super::http::{HttpDocsClient, Transport};
use super::mock::MockResponder;
use super::types::{ChatRequest, ChatResponse, ProcessDocumentationRequest, ProcessDocumentationResponse};
use super::DocsAssistant;

/// The documentation client callers hold.
///
/// The backing (live HTTP or mock) is chosen once at construction. To switch
/// modes, build a new service.
#[derive(Clone)]
pub struct ApiService {
    use_mock: bool,
    backend: Arc<dyn DocsAssistant>,
}

impl ApiService {
    pub fn new(use_mock: bool, base_url: &str) -> Self {
        let backend: Arc<dyn DocsAssistant> = if use_mock {
            Arc::new(MockResponder::new())
        } else {
            Arc::new(HttpDocsClient::new(base_url))
        };
        info!(mode = mode_label(use_mock), base_url, "documentation client ready");
        Self { use_mock, backend }
    }

    /// Build with explicit backings. Only the one selected by `use_mock` is
    /// ever called.
    pub fn with_backends(use_mock: bool, transport: Arc<dyn Transport>, mock: MockResponder) -> Self {
        let backend: Arc<dyn DocsAssistant> = if use_mock {
            Arc::new(mock)
        } else {
            Arc::new(HttpDocsClient::with_transport(transport))
        };
        Self { use_mock, backend }
    }

    pub fn is_mock(&self) -> bool {
        self.use_mock
    }

    pub fn mode_label(&self) -> &'static str {
        mode_label(self.use_mock)
    }
}

fn mode_label(use_mock: bool) -> &'static str {
    if use_mock {
        "MOCK"
    } else {
        "LIVE"
    }
}

#[async_trait]
impl DocsAssistant for ApiService {
    async fn process_documentation(
        &self,
        request: &ProcessDocumentationRequest,
    ) -> Result<ProcessDocumentationResponse, ApiError> {
        self.backend.process_documentation(request).await
    }

    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.backend.send_chat_message(request).await
    }
}
