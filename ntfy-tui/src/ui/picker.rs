//! Emoji picker overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::emoji::{EMOJIS, PICKER_COLUMNS};
use crate::app::AppState;

/// Render the picker grid anchored above `anchor` (the body field)
pub fn render_picker(frame: &mut Frame, anchor: Rect, state: &AppState) {
    let area = picker_area(anchor, frame.area());

    let highlight = if state.config.colors_enabled {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let mut lines: Vec<Line> = EMOJIS
        .chunks(PICKER_COLUMNS)
        .enumerate()
        .map(|(row, symbols)| {
            let spans = symbols.iter().enumerate().map(|(col, symbol)| {
                let index = row * PICKER_COLUMNS + col;
                let style = if index == state.picker_index {
                    highlight
                } else {
                    Style::default()
                };
                Span::styled(format!(" {} ", symbol), style)
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "←↑↓→ move  Enter pick  Esc close",
        Style::default().fg(Color::Gray),
    )));

    let picker = Paragraph::new(lines).block(
        Block::default()
            .title(" Emoji ")
            .borders(Borders::ALL)
            .border_style(if state.config.colors_enabled {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            }),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(picker, area);
}

// Each cell is " x " (emoji are two columns wide), plus borders.
fn picker_area(anchor: Rect, screen: Rect) -> Rect {
    let width = (PICKER_COLUMNS as u16 * 4 + 2).min(screen.width);
    let height = (crate::app::emoji::rows() as u16 + 4).min(screen.height);

    let x = anchor.x.min(screen.width.saturating_sub(width));
    let y = anchor
        .y
        .saturating_sub(height)
        .max(screen.y)
        .min(screen.height.saturating_sub(height));

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_area_fits_screen() {
        let screen = Rect::new(0, 0, 20, 8);
        let area = picker_area(Rect::new(0, 6, 20, 2), screen);

        assert!(area.right() <= screen.right());
        assert!(area.bottom() <= screen.bottom());
    }

    #[test]
    fn test_picker_area_above_anchor() {
        let screen = Rect::new(0, 0, 80, 40);
        let anchor = Rect::new(2, 30, 70, 8);
        let area = picker_area(anchor, screen);

        assert_eq!(area.x, 2);
        assert!(area.bottom() <= anchor.y);
    }
}
