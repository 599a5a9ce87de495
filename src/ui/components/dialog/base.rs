//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 cells padding on each side
    let max_line_width = config.max_width.saturating_sub(padding) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);
    let line_count = wrapped_lines.len();

    // Calculate dialog dimensions in terminal cells
    let hint_width = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(Span::width).sum::<usize>())
        .unwrap_or(0);
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .max(config.title.width())
        .max(hint_width) as u16;
    let dialog_width = (content_width + padding + 2).min(config.max_width); // +2 for borders

    // Height: title + blank + message lines + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 }; // blank + hint
    let dialog_height = (2 + line_count as u16 + hint_lines + 2).max(5); // +2 for borders

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum display width.
///
/// Breaks at spaces where possible; runs without spaces (Japanese text) are
/// broken between characters.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_width = word.width();
            let sep = usize::from(!current_line.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current_line.push(' ');
                }
                current_line.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > max_width && !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }
                current_line.push(c);
                current_width += w;
            }
        }
        lines.push(current_line);
    }

    lines
}
