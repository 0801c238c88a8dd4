use std::path::PathBuf;
use std::time::Instant;

use anyhow::anyhow;
use neonectar_core::api::{ChatResponse, ProcessDocumentationResponse};
use neonectar_core::intake::PROCESSING_FAILED;
use neonectar_core::progress::{self, Progress};
use neonectar_core::state::initial_transcript;
use neonectar_core::{
    ApiService, ChatMessage, ChatRequest, Config, DocsAssistant, IntakeErrors, IntakeForm, Language,
    ProcessDocumentationRequest, QuizState, TutorialProgress,
};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::input::TextInput;
use crate::media::MediaState;

/// Assistant turn shown when a chat call fails
pub const CHAT_FAILED: &str = "Sorry, I encountered an error processing your message.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intake,
    Overview,
    Lesson,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    DocLink,
    Position,
}

/// Startup settings the app needs besides the API client
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub assets_dir: PathBuf,
    pub language: Language,
    /// Where toggles are persisted; `None` keeps them in memory only
    pub config_path: Option<PathBuf>,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,

    // Intake state
    pub doc_link: TextInput,
    pub position: TextInput,
    pub intake_field: IntakeField,
    pub intake_errors: IntakeErrors,
    pub process_task: Option<JoinHandle<anyhow::Result<ProcessDocumentationResponse>>>,
    pub progress: Option<Progress>,
    pub progress_started: Option<Instant>,

    // Processed documentation
    pub doc_url: String,
    pub script: String,
    pub sections: Vec<String>,

    // Lesson state
    pub tutorial: TutorialProgress,
    pub language: Language,
    pub media: MediaState,

    // Chat state
    pub chat_input: TextInput,
    pub chat_messages: Vec<ChatMessage>,
    pub chat_loading: bool,
    pub chat_task: Option<JoinHandle<anyhow::Result<ChatResponse>>>,
    pub chat_scroll: u16,
    pub chat_height: u16, // Height of chat area for scroll calculations
    pub chat_width: u16,  // Width of chat area for wrap calculations

    // Quiz state
    pub quiz: QuizState,
    pub quiz_cursor: usize,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Data
    pub api: ApiService,
    pub settings: Settings,
}

impl App {
    pub fn new(api: ApiService, settings: Settings) -> Self {
        let language = settings.language;
        let media = MediaState::new(&settings.assets_dir, language, 1);

        Self {
            should_quit: false,
            screen: Screen::Intake,
            input_mode: InputMode::Editing,

            doc_link: TextInput::default(),
            position: TextInput::default(),
            intake_field: IntakeField::DocLink,
            intake_errors: IntakeErrors::default(),
            process_task: None,
            progress: None,
            progress_started: None,

            doc_url: String::new(),
            script: String::new(),
            sections: Vec::new(),

            tutorial: TutorialProgress::new(),
            language,
            media,

            chat_input: TextInput::default(),
            chat_messages: Vec::new(),
            chat_loading: false,
            chat_task: None,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,

            quiz: QuizState::new(),
            quiz_cursor: 0,

            animation_frame: 0,

            api,
            settings,
        }
    }

    // Intake

    /// True from submit until the progress animation completes
    pub fn is_processing(&self) -> bool {
        self.process_task.is_some() || self.progress_started.is_some()
    }

    /// Apply an edit to the focused intake field and clear its error
    pub fn edit_intake(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if self.is_processing() {
            return;
        }
        match self.intake_field {
            IntakeField::DocLink => {
                edit(&mut self.doc_link);
                self.intake_errors.doc_link = None;
            }
            IntakeField::Position => {
                edit(&mut self.position);
                self.intake_errors.position = None;
            }
        }
    }

    pub fn switch_intake_field(&mut self) {
        self.intake_field = match self.intake_field {
            IntakeField::DocLink => IntakeField::Position,
            IntakeField::Position => IntakeField::DocLink,
        };
    }

    /// Validate the form and, if it passes, start processing the documentation
    pub fn submit_intake(&mut self) {
        if self.is_processing() {
            return;
        }

        let form = IntakeForm::new(self.doc_link.value(), self.position.value());
        if let Err(errors) = form.validate() {
            debug!(?errors, "intake rejected");
            self.intake_errors = errors;
            return;
        }
        self.intake_errors = IntakeErrors::default();

        let request = ProcessDocumentationRequest::new(form.doc_link.trim());
        let api = self.api.clone();
        info!(url = %request.url, position = %form.position.trim(), "processing documentation");

        self.progress = Some(progress::waiting());
        self.process_task = Some(tokio::spawn(async move {
            api.process_documentation(&request).await.map_err(anyhow::Error::from)
        }));
    }

    pub fn finish_processing(&mut self, result: anyhow::Result<ProcessDocumentationResponse>) {
        match result {
            Ok(response) if response.success => {
                self.doc_url = self.doc_link.value().trim().to_string();
                self.script = response.script;
                self.sections = response.sections.unwrap_or_default();
                self.progress_started = Some(Instant::now());
            }
            Ok(response) => {
                warn!(message = %response.message, "documentation was not processed");
                self.progress = None;
                self.intake_errors.doc_link = Some(if response.message.trim().is_empty() {
                    PROCESSING_FAILED.to_string()
                } else {
                    response.message
                });
            }
            Err(e) => {
                error!(error = %e, "error processing documentation");
                self.progress = None;
                self.intake_errors.doc_link = Some(PROCESSING_FAILED.to_string());
            }
        }
    }

    /// Move the processing animation forward; opens the overview when done
    pub fn advance_progress(&mut self, now: Instant) {
        let Some(started) = self.progress_started else {
            return;
        };

        let current = progress::progress(now.saturating_duration_since(started));
        self.progress = Some(current);

        if current.done {
            self.progress = None;
            self.progress_started = None;
            self.screen = Screen::Overview;
            self.input_mode = InputMode::Normal;
            debug!("processing animation finished");
        }
    }

    // Lesson

    pub fn start_lesson(&mut self) {
        self.screen = Screen::Lesson;
        self.input_mode = InputMode::Normal;
        self.tutorial = TutorialProgress::new();
        self.chat_messages = initial_transcript();
        self.chat_scroll = 0;
        self.restart_media();
    }

    fn restart_media(&mut self) {
        self.media
            .restart(&self.settings.assets_dir, self.language, self.tutorial.current());
    }

    /// Next lesson, or the quiz after the last one
    pub fn next_step(&mut self) {
        if self.tutorial.next() {
            debug!(step = self.tutorial.current(), "next step");
            self.restart_media();
        } else {
            self.open_quiz();
        }
    }

    pub fn previous_step(&mut self) {
        if self.tutorial.previous() {
            debug!(step = self.tutorial.current(), "previous step");
            self.restart_media();
        }
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.restart_media();
        self.persist_settings();
    }

    pub fn toggle_pause(&mut self) {
        self.media.toggle_pause();
    }

    /// Rebuild the API client in the other mode. Calls already in flight
    /// finish on the old client.
    pub fn toggle_mock(&mut self) {
        let use_mock = !self.api.is_mock();
        self.api = ApiService::new(use_mock, &self.settings.base_url);
        self.persist_settings();
    }

    fn persist_settings(&self) {
        let Some(path) = &self.settings.config_path else {
            return;
        };
        // An unreadable file is left alone rather than replaced with defaults
        let mut config = match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "not saving settings over unreadable config");
                return;
            }
        };
        config.use_mock = Some(self.api.is_mock());
        config.language = Some(self.language.code().to_string());
        if let Err(e) = config.save_to(path) {
            warn!(error = %e, "could not save config");
        }
    }

    // Chat

    /// Send the chat input as a user turn. One call at a time.
    pub fn send_chat(&mut self) {
        if self.chat_task.is_some() || self.chat_input.is_blank() {
            return;
        }

        let content = self.chat_input.take();
        self.chat_messages.push(ChatMessage::user(content));

        let request = ChatRequest {
            messages: self.chat_messages.clone(),
            doc_url: self.doc_url.clone(),
        };
        let api = self.api.clone();

        self.chat_loading = true;
        self.scroll_chat_to_bottom();
        self.chat_task = Some(tokio::spawn(async move {
            api.send_chat_message(&request).await.map_err(anyhow::Error::from)
        }));
    }

    pub fn finish_chat(&mut self, result: anyhow::Result<ChatResponse>) {
        self.chat_loading = false;
        let reply = match result {
            Ok(response) => response.response,
            Err(e) => {
                error!(error = %e, "error sending chat message");
                CHAT_FAILED.to_string()
            }
        };
        self.chat_messages.push(ChatMessage::assistant(reply));
        self.scroll_chat_to_bottom();
    }

    pub fn scroll_chat_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_chat_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    /// Scroll chat to bottom so the newest turn is visible
    pub fn scroll_chat_to_bottom(&mut self) {
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let mut total_lines: usize = 0;
        for msg in &self.chat_messages {
            total_lines += 1; // Role line
            for line in msg.content.lines() {
                total_lines += line.chars().count() / wrap_width + 1;
            }
            total_lines += 1; // Blank line after message
        }

        if self.chat_loading {
            total_lines += 2; // "AI:" + "Thinking..."
        }

        let visible_height = if self.chat_height > 0 { self.chat_height } else { 20 };

        let scroll = total_lines.saturating_sub(visible_height as usize);
        self.chat_scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    }

    // Quiz

    pub fn open_quiz(&mut self) {
        self.screen = Screen::Quiz;
        self.input_mode = InputMode::Normal;
        self.quiz = QuizState::new();
        self.quiz_cursor = 0;
    }

    pub fn quiz_cursor_down(&mut self) {
        let len = self.quiz.question().options.len();
        self.quiz_cursor = (self.quiz_cursor + 1).min(len - 1);
    }

    pub fn quiz_cursor_up(&mut self) {
        self.quiz_cursor = self.quiz_cursor.saturating_sub(1);
    }

    pub fn quiz_select(&mut self, answer: usize) {
        if self.quiz.select(answer) {
            self.quiz_cursor = answer;
        }
    }

    pub fn quiz_next(&mut self) {
        self.quiz.next();
        if self.quiz.selected().is_none() {
            self.quiz_cursor = 0;
        }
    }

    pub fn quiz_restart(&mut self) {
        self.quiz.restart();
        self.quiz_cursor = 0;
    }

    // Background work

    /// Tick animation frame and progress (called by Tick event)
    pub fn tick(&mut self) {
        if self.chat_loading || self.process_task.is_some() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
        self.advance_progress(Instant::now());
    }

    /// Collect results of finished API calls
    pub async fn poll_tasks(&mut self) {
        if self.process_task.as_ref().is_some_and(|t| t.is_finished()) {
            if let Some(task) = self.process_task.take() {
                let result = task
                    .await
                    .unwrap_or_else(|e| Err(anyhow!("documentation task failed: {e}")));
                self.finish_processing(result);
            }
        }

        if self.chat_task.as_ref().is_some_and(|t| t.is_finished()) {
            if let Some(task) = self.chat_task.take() {
                let result = task
                    .await
                    .unwrap_or_else(|e| Err(anyhow!("chat task failed: {e}")));
                self.finish_chat(result);
            }
        }
    }
}
