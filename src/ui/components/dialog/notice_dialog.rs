//! Notice dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notice, NoticeKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the notice as a modal overlay centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" / "),
        Span::styled("Esc", key_style),
        Span::raw(": 閉じる"),
    ];

    let color = match notice.kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Error => Color::Red,
    };

    render_dialog(
        frame,
        DialogConfig {
            title: notice.kind.title(),
            title_color: color,
            border_color: color,
            message: &notice.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(notice: &Notice) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render_notice_dialog(frame, notice))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer text with the blank cells that follow wide characters removed
    fn text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
            .replace(' ', "")
    }

    #[test]
    fn test_info_notice_shows_title_and_message() {
        let buffer = render(&Notice {
            kind: NoticeKind::Info,
            message: "市町村が見つかりません".to_string(),
        });

        let text = text(&buffer);
        assert!(text.contains("お知らせ"));
        assert!(text.contains("市町村が見つかりません"));
        assert!(text.contains("Enter/Esc:閉じる"));
    }

    #[test]
    fn test_error_notice_has_red_border() {
        let buffer = render(&Notice {
            kind: NoticeKind::Error,
            message: "failed".to_string(),
        });

        assert!(text(&buffer).contains("エラー"));
        let border = buffer
            .content()
            .iter()
            .find(|cell| cell.symbol() == "┌")
            .unwrap();
        assert_eq!(border.fg, Color::Red);
    }
}
