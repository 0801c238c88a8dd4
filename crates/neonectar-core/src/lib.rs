pub mod api;
pub mod config;
pub mod intake;
pub mod progress;
pub mod quiz;
pub mod state;
pub mod tutorial;

// Re-export main types for convenience
pub use api::{
    ApiError, ApiService, ChatRequest, ChatResponse, DocsAssistant, MockResponder,
    ProcessDocumentationRequest, ProcessDocumentationResponse,
};
pub use config::Config;
pub use intake::{IntakeErrors, IntakeForm};
pub use quiz::QuizState;
pub use state::{ChatMessage, ChatRole};
pub use tutorial::{Language, StepAssets, TutorialProgress};
