use std::time::Duration;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{ChatRequest, ChatResponse, ProcessDocumentationRequest, ProcessDocumentationResponse};
use super::DocsAssistant;

/// Artificial latency of every mock call
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

pub const MOCK_SECTIONS: [&str; 3] = ["Introduction", "Key Concepts", "Use Cases"];

/// In-memory stand-in for the documentation API, for offline demos and tests.
///
/// Never touches the network and never fails on a well-formed request.
#[derive(Debug, Clone)]
pub struct MockResponder {
    delay: Duration,
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResponder {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_MOCK_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl DocsAssistant for MockResponder {
    async fn process_documentation(
        &self,
        request: &ProcessDocumentationRequest,
    ) -> Result<ProcessDocumentationResponse, ApiError> {
        self.simulate_latency().await;

        Ok(ProcessDocumentationResponse {
            success: true,
            message: "Documentation processed successfully".to_string(),
            script: format!("This is a mock documentation script for {}", request.url),
            sections: Some(MOCK_SECTIONS.iter().map(|s| s.to_string()).collect()),
        })
    }

    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.simulate_latency().await;

        let last = request.messages.last().ok_or(ApiError::EmptyTranscript)?;

        Ok(ChatResponse {
            response: format!(
                "This is a mock response to: \"{}\"\n\nI'm a mock AI assistant helping you understand \
                 the documentation. Feel free to ask any questions!",
                last.content
            ),
            audio_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ChatMessage;
    use std::time::Instant;

    fn instant_mock() -> MockResponder {
        MockResponder::with_delay(Duration::ZERO)
    }

    fn chat(messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            messages,
            doc_url: "https://example.com/docs".to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_script_embeds_url() {
        let mock = instant_mock();
        for url in ["https://example.com/docs", "docs.rs", "x", "https://ünïcode.example/path?q=1"] {
            let response = mock
                .process_documentation(&ProcessDocumentationRequest::new(url))
                .await
                .unwrap();
            assert!(response.success);
            assert!(response.script.contains(url), "script {:?} lacks {url}", response.script);
        }
    }

    #[tokio::test]
    async fn test_process_returns_three_sections() {
        let response = instant_mock()
            .process_documentation(&ProcessDocumentationRequest::new("https://example.com/docs"))
            .await
            .unwrap();
        assert_eq!(
            response.sections,
            Some(vec![
                "Introduction".to_string(),
                "Key Concepts".to_string(),
                "Use Cases".to_string()
            ])
        );
    }

    #[tokio::test]
    async fn test_chat_echoes_latest_message() {
        let response = instant_mock()
            .send_chat_message(&chat(vec![
                ChatMessage::assistant("Hi there"),
                ChatMessage::user("first question"),
                ChatMessage::assistant("an answer"),
                ChatMessage::user("What is this?"),
            ]))
            .await
            .unwrap();
        assert!(response.response.contains("What is this?"));
        assert!(!response.response.contains("first question"));
        assert_eq!(response.audio_url, None);
    }

    #[tokio::test]
    async fn test_chat_echo_survives_json_round_trip() {
        let content = "Quotes \" and\nnewlines and emoji 🚀 stay intact";
        let request = chat(vec![ChatMessage::user(content)]);

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: ChatRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.messages.last().unwrap().content, content);

        let response = instant_mock().send_chat_message(&decoded).await.unwrap();
        assert!(response.response.contains(content));
    }

    #[tokio::test]
    async fn test_chat_with_empty_transcript_is_an_error() {
        let err = instant_mock().send_chat_message(&chat(Vec::new())).await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyTranscript));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_delay_is_one_second() {
        let mock = MockResponder::new();
        assert_eq!(mock.delay(), DEFAULT_MOCK_DELAY);

        let start = tokio::time::Instant::now();
        mock.process_documentation(&ProcessDocumentationRequest::new("https://example.com"))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_zero_delay_resolves_quickly() {
        let start = Instant::now();
        instant_mock()
            .process_documentation(&ProcessDocumentationRequest::new("https://example.com"))
            .await
            .unwrap();
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
