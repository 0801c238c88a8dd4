use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode, Screen};
use crate::input::TextInput;
use crate::tui::AppEvent;

pub async fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick(),
    }
    app.poll_tasks().await;
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::Intake => handle_intake(app, key),
        Screen::Overview => handle_overview(app, key),
        Screen::Lesson => match app.input_mode {
            InputMode::Normal => handle_lesson_normal(app, key),
            InputMode::Editing => handle_lesson_editing(app, key),
        },
        Screen::Quiz => handle_quiz(app, key),
    }
}

/// Shared cursor/edit keys for text fields. Returns false if the key was not an edit.
fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Char(c) => input.insert(c),
        _ => return false,
    }
    true
}

fn handle_intake(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.submit_intake(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.switch_intake_field(),
        _ => app.edit_intake(|input| {
            edit_text(input, key);
        }),
    }
}

fn handle_overview(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter | KeyCode::Char('s') => app.start_lesson(),
        _ => {}
    }
}

fn handle_lesson_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Start typing a question
        KeyCode::Char('i') | KeyCode::Enter => app.input_mode = InputMode::Editing,

        // Step navigation
        KeyCode::Char('n') | KeyCode::Right => app.next_step(),
        KeyCode::Char('b') | KeyCode::Left => app.previous_step(),

        // Media
        KeyCode::Char('p') | KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('o') => app.media.open_demo(),
        KeyCode::Char('L') => app.toggle_language(),

        // API mode
        KeyCode::Char('M') => app.toggle_mock(),

        // Chat scrolling
        KeyCode::Char('j') | KeyCode::Down => app.scroll_chat_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_chat_up(),
        KeyCode::Char('G') => app.scroll_chat_to_bottom(),

        _ => {}
    }
}

fn handle_lesson_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => app.send_chat(),
        _ => {
            edit_text(&mut app.chat_input, key);
        }
    }
}

fn handle_quiz(app: &mut App, key: KeyEvent) {
    if app.quiz.is_completed() {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => app.quiz_restart(),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => app.screen = Screen::Lesson,
        KeyCode::Char('j') | KeyCode::Down => app.quiz_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.quiz_cursor_up(),
        KeyCode::Char(c @ '1'..='4') => {
            let answer = c as usize - '1' as usize;
            app.quiz_select(answer);
        }
        KeyCode::Enter => {
            if app.quiz.selected().is_some() {
                app.quiz_next();
            } else {
                let answer = app.quiz_cursor;
                app.quiz_select(answer);
            }
        }
        KeyCode::Char('n') => app.quiz_next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{mock_app, wait_for_tasks};
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).await;
        }
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_everywhere() {
        let mut app = mock_app();
        let mut event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        event.kind = KeyEventKind::Press;
        handle_event(&mut app, AppEvent::Key(event)).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_intake_typing_goes_to_focused_field() {
        let mut app = mock_app();
        type_text(&mut app, "https://example.com/docs").await;
        handle_event(&mut app, key(KeyCode::Tab)).await;
        type_text(&mut app, "Developer").await;

        assert_eq!(app.doc_link.value(), "https://example.com/docs");
        assert_eq!(app.position.value(), "Developer");
    }

    #[tokio::test]
    async fn test_q_is_text_on_intake() {
        let mut app = mock_app();
        type_text(&mut app, "q").await;
        assert!(!app.should_quit);
        assert_eq!(app.doc_link.value(), "q");
    }

    #[tokio::test]
    async fn test_lesson_chat_via_keys() {
        let mut app = mock_app();
        app.start_lesson();

        handle_event(&mut app, key(KeyCode::Char('i'))).await;
        assert_eq!(app.input_mode, InputMode::Editing);
        type_text(&mut app, "What is this?").await;
        handle_event(&mut app, key(KeyCode::Enter)).await;
        wait_for_tasks(&mut app).await;

        assert!(app.chat_messages.last().unwrap().content.contains("What is this?"));

        handle_event(&mut app, key(KeyCode::Esc)).await;
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_lesson_navigation_keys() {
        let mut app = mock_app();
        app.start_lesson();

        handle_event(&mut app, key(KeyCode::Char('n'))).await;
        assert_eq!(app.tutorial.current(), 2);
        handle_event(&mut app, key(KeyCode::Char('b'))).await;
        assert_eq!(app.tutorial.current(), 1);
        handle_event(&mut app, key(KeyCode::Char('p'))).await;
        assert!(app.media.paused);
    }

    #[tokio::test]
    async fn test_quiz_number_keys_answer() {
        let mut app = mock_app();
        app.open_quiz();

        handle_event(&mut app, key(KeyCode::Char('2'))).await;
        assert_eq!(app.quiz.selected(), Some(1));
        assert_eq!(app.quiz.score(), 1);

        handle_event(&mut app, key(KeyCode::Enter)).await;
        assert_eq!(app.quiz.current_index(), 1);
    }
}
