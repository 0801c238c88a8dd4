use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::error::ApiError;
use super::types::{ChatRequest, ChatResponse, ProcessDocumentationRequest, ProcessDocumentationResponse};
use super::DocsAssistant;

pub const PROCESS_DOCS_PATH: &str = "/api/docs/process";
pub const CHAT_SEND_PATH: &str = "/api/chat/send";

/// One JSON POST against the documentation API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

/// reqwest-backed transport with a fixed base address.
///
/// Single attempt per call: no timeout, retry or auth.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }
}

/// Live implementation of [`DocsAssistant`] on top of a [`Transport`].
#[derive(Clone)]
pub struct HttpDocsClient {
    transport: Arc<dyn Transport>,
}

impl HttpDocsClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new(base_url)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn call<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_value(request).map_err(ApiError::Encode)?;
        let value = self.transport.post_json(path, body).await?;
        serde_json::from_value(value).map_err(ApiError::Decode)
    }
}

#[async_trait]
impl DocsAssistant for HttpDocsClient {
    async fn process_documentation(
        &self,
        request: &ProcessDocumentationRequest,
    ) -> Result<ProcessDocumentationResponse, ApiError> {
        self.call(PROCESS_DOCS_PATH, request)
            .await
            .inspect_err(|e| error!(error = %e, "error processing documentation"))
    }

    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.call(CHAT_SEND_PATH, request)
            .await
            .inspect_err(|e| error!(error = %e, "error sending chat message"))
    }
}
