//! Application state definitions

use super::forms::{FieldSet, RegistrationForm};
use std::collections::VecDeque;

/// Severity of a modal notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Info => "お知らせ",
            Self::Error => "エラー",
        }
    }
}

/// A blocking message the user must dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: RegistrationForm,
    /// Queue of notices shown one at a time as a modal dialog
    notices: VecDeque<Notice>,
    /// Transient message in the status bar, cleared on the next key press
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(field_set: FieldSet) -> Self {
        Self {
            form: RegistrationForm::new(field_set),
            notices: VecDeque::new(),
            status_message: None,
        }
    }

    pub fn push_notice(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        });
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Notice currently on screen
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FieldSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_notices() {
        let state = AppState::default();
        assert!(!state.has_notices());
        assert!(state.current_notice().is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_notices_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_notice("first");
        state.push_error("second");

        assert_eq!(
            state.current_notice(),
            Some(&Notice {
                kind: NoticeKind::Info,
                message: "first".to_string(),
            })
        );
        state.dismiss_notice();
        assert_eq!(
            state.current_notice().map(|n| n.kind),
            Some(NoticeKind::Error)
        );
        state.dismiss_notice();
        assert!(!state.has_notices());
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_notice();
        assert!(!state.has_notices());
    }

    #[test]
    fn test_notice_titles() {
        assert_eq!(NoticeKind::Info.title(), "お知らせ");
        assert_eq!(NoticeKind::Error.title(), "エラー");
    }
}
