//! UI rendering
//!
//! Rendering functions that turn state into terminal frames. The field
//! editors are the only stateful widgets and are passed in by the event
//! loop.

pub mod editors;
pub mod picker;

use libntfy::SubmissionStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Field};
use self::editors::FieldEditors;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, editors: &mut FieldEditors) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Topic
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    editors.render(frame, chunks[0], Field::Topic, state);
    editors.render(frame, chunks[1], Field::Title, state);
    editors.render(frame, chunks[2], Field::Body, state);
    render_status_bar(frame, chunks[3], state);

    if state.composer.picker_visible() {
        picker::render_picker(frame, chunks[2], state);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Status line color for a submission status
pub fn status_color(status: SubmissionStatus) -> Color {
    match status {
        SubmissionStatus::Idle => Color::Gray,
        SubmissionStatus::Validating => Color::Yellow,
        SubmissionStatus::Sent => Color::Green,
        SubmissionStatus::Failed(_) => Color::Red,
    }
}

/// Render status bar with the submission status and hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = state.composer.status();
    let status_style = if state.config.colors_enabled {
        Style::default()
            .fg(status_color(status))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let hints = if state.composer.is_sending() {
        "F1: Help | Ctrl+Q: Quit"
    } else {
        "Ctrl+S: Send | Ctrl+E: Emoji | Tab: Next field | F1: Help | Ctrl+Q: Quit"
    };

    let mut spans = Vec::new();
    let text = status.to_string();
    if !text.is_empty() {
        spans.push(Span::styled(text, status_style));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+Q   - Quit (also Ctrl+C)"),
        Line::from("  F1       - Toggle help"),
        Line::from("  Esc      - Dismiss overlays"),
        Line::from(""),
        Line::from("Form:"),
        Line::from("  Tab      - Next field"),
        Line::from("  S-Tab    - Previous field"),
        Line::from("  ↑/↓      - Cycle saved topics (topic field)"),
        Line::from("  Ctrl+E   - Emoji picker"),
        Line::from("  Ctrl+S   - Send message"),
        Line::from(""),
        Line::from(format!("Saved topics: {}", state.topics.len())),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
