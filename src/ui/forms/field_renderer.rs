//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field box
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field. A validation message, if any, sits on the bottom border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(未入力)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(content.block(block), area);
}
