//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{SEARCH_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, FormPhase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Shown while address lookups are in flight
const SEARCHING_MESSAGE: &str = "住所検索中...";

/// Shown while inline validation errors are displayed
const INVALID_MESSAGE: &str = "入力内容を確認してください";

/// Create the main layout, returning the content area
pub fn create_layout(area: Rect) -> Rect {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {}", form_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if app.pending_lookups() > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            SEARCHING_MESSAGE,
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.state.form.phase() == FormPhase::Invalid {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            INVALID_MESSAGE,
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " Esc:終了 ";
    let hint_width = quit_hint.width() as u16;
    let quit_area = Rect {
        x: area.width.saturating_sub(hint_width),
        y: area.height.saturating_sub(1),
        width: hint_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused part of the form
fn form_hints(app: &App) -> String {
    let form = &app.state.form;
    let has_search = form.values().has_field(FieldName::PostalCode);

    if form.is_action_panel_active() {
        return "↑/↓:選択  Enter:実行  Tab:次へ".to_string();
    }

    let mut hints = format!("Tab:次へ  {SUBMIT_SHORTCUT}:登録");
    if has_search {
        hints.push_str(&format!("  {SEARCH_SHORTCUT}:住所検索"));
    }
    if form.active_field_name() == Some(FieldName::PostalCode) {
        hints.push_str("  Enter:検索");
    }
    hints
}
