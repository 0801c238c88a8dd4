use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use neonectar_core::tutorial::TUTORIAL_STEPS;
use neonectar_core::ChatRole;

use crate::app::{App, InputMode, IntakeField, Screen};
use crate::input::TextInput;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    match app.screen {
        Screen::Intake => render_intake(app, frame, body_area),
        Screen::Overview => render_overview(app, frame, body_area),
        Screen::Lesson => render_lesson(app, frame, body_area),
        Screen::Quiz => render_quiz(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);
}

/// A rectangle of at most `width` x `height`, centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = if app.api.is_mock() {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Black).bg(Color::Green)
    };

    let title = Line::from(vec![
        Span::styled(" neonectar ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(format!(" {} ", app.api.mode_label()), mode_style),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", app.language.display_name()),
            Style::default().fg(Color::White),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match app.screen {
        Screen::Intake => " START ",
        Screen::Overview => " OVERVIEW ",
        Screen::Lesson => " LESSON ",
        Screen::Quiz => " QUIZ ",
    };

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let pairs: &[(&str, &str)] = match (app.screen, app.input_mode) {
        (Screen::Intake, _) => &[(" Tab ", " next field "), (" Enter ", " create tutorial "), (" Esc ", " quit ")],
        (Screen::Overview, _) => &[(" Enter ", " start learning "), (" q ", " quit ")],
        (Screen::Lesson, InputMode::Normal) => &[
            (" i ", " ask "),
            (" n/b ", " step "),
            (" p ", " pause "),
            (" o ", " open video "),
            (" L ", " language "),
            (" M ", " api mode "),
            (" j/k ", " scroll "),
            (" q ", " quit "),
        ],
        (Screen::Lesson, InputMode::Editing) => &[(" Enter ", " send "), (" Esc ", " stop typing ")],
        (Screen::Quiz, _) if app.quiz.is_completed() => &[(" r ", " retake "), (" q ", " quit ")],
        (Screen::Quiz, _) => &[
            (" 1-4 ", " answer "),
            (" j/k ", " move "),
            (" Enter ", " select/next "),
            (" Esc ", " back to lesson "),
            (" q ", " quit "),
        ],
    };

    let mut spans = vec![Span::styled(mode_text, mode_style)];
    for (key, label) in pairs {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*label, label_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInput,
    placeholder: &str,
    focused: bool,
    has_error: bool,
) {
    let border_color = if has_error {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    // Keep the cursor visible with horizontal scrolling
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_pos = input.cursor();
    let scroll_offset = if inner_width == 0 || cursor_pos < inner_width {
        0
    } else {
        cursor_pos - inner_width + 1
    };

    let paragraph = if input.value().is_empty() {
        Paragraph::new(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)))
    } else {
        let visible: String = input.value().chars().skip(scroll_offset).take(inner_width).collect();
        Paragraph::new(visible).style(Style::default().fg(Color::Cyan))
    };
    frame.render_widget(paragraph.block(block), area);

    if focused {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_intake(app: &mut App, frame: &mut Frame, area: Rect) {
    let card = centered_rect(70, 20, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" welcome to neonectar ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [intro_area, link_area, link_err_area, position_area, position_err_area, status_area, gauge_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .areas(inner);

    let intro = Paragraph::new("Transform your documentation into an interactive learning experience")
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, intro_area);

    let editable = !app.is_processing();
    render_text_field(
        frame,
        link_area,
        "Documentation Link",
        &app.doc_link,
        "Paste your documentation URL here",
        editable && app.intake_field == IntakeField::DocLink,
        app.intake_errors.doc_link.is_some(),
    );
    render_text_field(
        frame,
        position_area,
        "Your Position",
        &app.position,
        "e.g. Developer, Product Manager, Designer",
        editable && app.intake_field == IntakeField::Position,
        app.intake_errors.position.is_some(),
    );

    let error_style = Style::default().fg(Color::Red);
    if let Some(err) = &app.intake_errors.doc_link {
        frame.render_widget(Paragraph::new(Span::styled(err.clone(), error_style)), link_err_area);
    }
    if let Some(err) = &app.intake_errors.position {
        frame.render_widget(Paragraph::new(Span::styled(err.clone(), error_style)), position_err_area);
    }

    let status = match &app.progress {
        Some(progress) => Line::from(Span::styled(
            progress.message,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(vec![
            Span::styled(" Enter ", Style::default().bg(Color::White).fg(Color::Black)),
            Span::raw(" Create Tutorial"),
        ]),
    };
    frame.render_widget(Paragraph::new(status), status_area);

    if let Some(progress) = &app.progress {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .percent(progress.percent.min(100) as u16)
            .label(format!("{}% Complete", progress.percent));
        frame.render_widget(gauge, Rect { height: 1, ..gauge_area });
    }
}

fn render_overview(app: &mut App, frame: &mut Frame, area: Rect) {
    let card = centered_rect(80, 22, area);

    let [title_area, steps_area, sections_area, start_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(card);

    let title = Text::from(vec![
        Line::from(Span::styled("Your Learning Journey", Style::default().bold())),
        Line::from(Span::styled(
            "Follow these steps to master your documentation",
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(Paragraph::new(title).centered(), title_area);

    let items: Vec<ListItem> = TUTORIAL_STEPS
        .iter()
        .map(|step| {
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", step.step), Style::default().bg(Color::DarkGray).fg(Color::White)),
                    Span::raw(" "),
                    Span::styled(step.title, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(format!("    {}", step.description), Style::default().fg(Color::Gray))),
                Line::default(),
            ]))
        })
        .collect();
    let steps = List::new(items).block(Block::default().borders(Borders::ALL).title(" Steps "));
    frame.render_widget(steps, steps_area);

    let mut summary = Vec::new();
    if let Some(first_line) = app.script.lines().find(|l| !l.trim().is_empty()) {
        summary.push(Line::from(vec![
            Span::styled("Script: ", Style::default().fg(Color::DarkGray)),
            Span::raw(first_line.to_string()),
        ]));
    }
    if !app.sections.is_empty() {
        summary.push(Line::from(vec![
            Span::styled("Covers: ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.sections.join(" · ")),
        ]));
    }
    frame.render_widget(Paragraph::new(summary).wrap(Wrap { trim: true }), sections_area);

    let start = Line::from(vec![
        Span::styled(" Enter ", Style::default().bg(Color::White).fg(Color::Black)),
        Span::raw(" Start Learning "),
    ]);
    frame.render_widget(Paragraph::new(start).centered(), start_area);
}

fn render_lesson(app: &mut App, frame: &mut Frame, area: Rect) {
    let [progress_area, main_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    render_step_progress(app, frame, progress_area);

    let [chat_column, media_column] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(main_area);

    render_chat(app, frame, chat_column);
    render_media(app, frame, media_column);
}

fn render_step_progress(app: &App, frame: &mut Frame, area: Rect) {
    let [title_area, gauge_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let step = app.tutorial.step();
    let title = Line::from(vec![
        Span::styled(format!(" {} ", step.title), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" Step {} of {}", app.tutorial.current(), app.tutorial.total()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(app.tutorial.percent())
        .label("");
    frame.render_widget(gauge, gauge_area);
}

fn render_chat(app: &mut App, frame: &mut Frame, area: Rect) {
    let [chat_area, input_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    // Inner size, read back by scroll_chat_to_bottom
    app.chat_height = chat_area.height.saturating_sub(2);
    app.chat_width = chat_area.width.saturating_sub(2);

    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Chat Transcript ");

    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.chat_messages {
        let (label, color) = match msg.role {
            ChatRole::User => ("You:", Color::Cyan),
            ChatRole::Assistant => ("AI:", Color::Yellow),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for line in msg.content.lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::default());
    }

    if app.chat_loading {
        lines.push(Line::from(Span::styled(
            "AI:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            format!("Thinking{}", dots),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let chat = Paragraph::new(Text::from(lines))
        .block(chat_block)
        .wrap(Wrap { trim: true })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(chat, chat_area);

    let editing = app.input_mode == InputMode::Editing;
    let placeholder = if app.chat_loading {
        "Waiting for the assistant..."
    } else {
        "Type your message... (i to start)"
    };
    render_text_field(frame, input_area, "Ask", &app.chat_input, placeholder, editing, false);
}

fn render_media(app: &App, frame: &mut Frame, area: Rect) {
    let [demo_area, avatar_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let state = if app.media.paused {
        Span::styled(" Paused ", Style::default().bg(Color::Red).fg(Color::White))
    } else {
        Span::styled(" Playing ", Style::default().bg(Color::Green).fg(Color::Black))
    };

    let video_panel = |title: String, path: &std::path::Path, available: bool| {
        let availability = if available {
            Span::styled("ready", Style::default().fg(Color::Green))
        } else {
            Span::styled("missing", Style::default().fg(Color::Red))
        };
        let text = Text::from(vec![
            Line::from(vec![state.clone(), Span::raw(" "), availability]),
            Line::default(),
            Line::from(Span::styled(path.display().to_string(), Style::default().fg(Color::Gray))),
        ]);
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title))
    };

    frame.render_widget(
        video_panel(" Demo ".to_string(), app.media.assets.demo.as_path(), app.media.demo_available()),
        demo_area,
    );
    frame.render_widget(
        video_panel(
            format!(" Avatar ({}) ", app.language.display_name()),
            app.media.assets.avatar.as_path(),
            app.media.avatar_available(),
        ),
        avatar_area,
    );
}

fn render_quiz(app: &mut App, frame: &mut Frame, area: Rect) {
    let card = centered_rect(90, 24, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Knowledge Check ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let quiz = &app.quiz;
    if quiz.is_completed() {
        let text = Text::from(vec![
            Line::from(Span::styled("Quiz Completed!", Style::default().bold())),
            Line::default(),
            Line::from(format!("Your Score: {}/{}", quiz.score(), quiz.total())),
            Line::default(),
            Line::from(Span::styled(quiz.completion_message(), Style::default().fg(Color::Gray))),
            Line::default(),
            Line::from(vec![
                Span::styled(" r ", Style::default().bg(Color::White).fg(Color::Black)),
                Span::raw(" Retake Quiz"),
            ]),
        ]);
        frame.render_widget(Paragraph::new(text).centered().wrap(Wrap { trim: true }), inner);
        return;
    }

    let [status_area, gauge_area, question_area, options_area, explanation_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Min(0),
    ])
    .areas(inner);

    let status = Line::from(vec![
        Span::raw(format!("Question {}/{}", quiz.current_index() + 1, quiz.total())),
        Span::raw("    "),
        Span::styled(format!("Score: {}/{}", quiz.score(), quiz.total()), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(status), status_area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(quiz.progress_percent())
        .label("");
    frame.render_widget(gauge, Rect { height: 1, ..gauge_area });

    let question = quiz.question();
    frame.render_widget(
        Paragraph::new(Span::styled(question.question, Style::default().bold())).wrap(Wrap { trim: true }),
        question_area,
    );

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let (marker, style) = match quiz.selected() {
                Some(_) if i == question.correct_answer => ("✓", Style::default().fg(Color::Green).bold()),
                Some(selected) if i == selected => ("✗", Style::default().fg(Color::Red)),
                Some(_) => (" ", Style::default().fg(Color::DarkGray)),
                None if i == app.quiz_cursor => (">", Style::default().fg(Color::Cyan).bold()),
                None => (" ", Style::default()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} {}. ", marker, i + 1), style),
                Span::styled(*option, style),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), options_area);

    if quiz.show_explanation() {
        let text = Text::from(vec![
            Line::from(Span::styled("Explanation", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(question.explanation),
        ]);
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::TOP)),
            explanation_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::mock_app;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_intake_shows_field_errors() {
        let mut app = mock_app();
        app.submit_intake();
        let screen = draw(&mut app);
        assert!(screen.contains("Please provide a documentation link"));
        assert!(screen.contains("Please specify your position"));
        assert!(screen.contains("MOCK"));
    }

    #[tokio::test]
    async fn test_overview_lists_steps_and_script() {
        let mut app = mock_app();
        app.screen = Screen::Overview;
        app.script = "This is a mock documentation script for https://example.com/docs".to_string();
        app.sections = vec!["Introduction".to_string(), "Use Cases".to_string()];
        let screen = draw(&mut app);
        assert!(screen.contains("Your Learning Journey"));
        assert!(screen.contains("Interactive Learning"));
        assert!(screen.contains("https://example.com/docs"));
        assert!(screen.contains("Use Cases"));
    }

    #[tokio::test]
    async fn test_lesson_shows_step_and_assets() {
        let mut app = mock_app();
        app.start_lesson();
        app.next_step();
        let screen = draw(&mut app);
        assert!(screen.contains("Core Concepts"));
        assert!(screen.contains("Step 2 of 4"));
        assert!(screen.contains("demo-gumloop-2.mp4"));
        assert!(screen.contains("Chat Transcript"));
    }

    #[tokio::test]
    async fn test_quiz_completion_screen() {
        let mut app = mock_app();
        app.open_quiz();
        while !app.quiz.is_completed() {
            let correct = app.quiz.question().correct_answer;
            app.quiz_select(correct);
            app.quiz_next();
        }
        let screen = draw(&mut app);
        assert!(screen.contains("Quiz Completed!"));
        assert!(screen.contains("Your Score: 5/5"));
    }
}
