//! Field editors backed by tui-textarea
//!
//! One `TextArea` per form field. The reducer owns the values; the
//! editors own cursor and scroll position, and are rebuilt from state
//! whenever the two disagree (after a send clears the form, a topic is
//! picked from history, or an emoji is appended).

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::{CursorMove, TextArea};

use crate::app::{AppState, Field};

pub struct FieldEditors<'a> {
    topic: TextArea<'a>,
    title: TextArea<'a>,
    body: TextArea<'a>,
}

impl<'a> FieldEditors<'a> {
    /// Create editors holding the current draft
    pub fn new(state: &AppState) -> Self {
        let mut editors = Self {
            topic: TextArea::default(),
            title: TextArea::default(),
            body: TextArea::default(),
        };
        editors.sync(state);
        editors
    }

    fn editor(&self, field: Field) -> &TextArea<'a> {
        match field {
            Field::Topic => &self.topic,
            Field::Title => &self.title,
            Field::Body => &self.body,
        }
    }

    fn editor_mut(&mut self, field: Field) -> &mut TextArea<'a> {
        match field {
            Field::Topic => &mut self.topic,
            Field::Title => &mut self.title,
            Field::Body => &mut self.body,
        }
    }

    /// Current text of `field`'s editor
    pub fn content(&self, field: Field) -> String {
        self.editor(field).lines().join("\n")
    }

    /// Feed a key to `field`'s editor and return the new text
    pub fn input(&mut self, field: Field, key: KeyEvent) -> String {
        self.editor_mut(field).input(key);
        self.content(field)
    }

    /// Rebuild every editor whose text differs from the state
    pub fn sync(&mut self, state: &AppState) {
        for field in Field::ALL {
            let value = state.field_value(field);
            if self.content(field) != value {
                let mut textarea = TextArea::from(value.split('\n'));
                textarea.move_cursor(CursorMove::Bottom);
                textarea.move_cursor(CursorMove::End);
                *self.editor_mut(field) = textarea;
            }
        }
    }

    /// Render `field`'s editor into `area`
    pub fn render(&mut self, frame: &mut Frame, area: Rect, field: Field, state: &AppState) {
        let focused = state.focus == field && !state.overlay_active();
        let colors = state.config.colors_enabled;

        let border_style = if focused && colors {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let title = match field {
            Field::Topic if !state.topics.is_empty() => {
                format!(" {} (↑/↓ saved: {}) ", field.label(), state.topics.len())
            }
            _ => format!(" {} ", field.label()),
        };

        let editor = self.editor_mut(field);
        editor.set_block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        editor.set_cursor_line_style(Style::default());
        editor.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        editor.set_placeholder_text(placeholder(field));

        frame.render_widget(&*editor, area);
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Topic => "Enter a topic",
        Field::Title => "Enter a title",
        Field::Body => "Type your message... (Ctrl+E for emoji, Ctrl+S to send)",
    }
}
