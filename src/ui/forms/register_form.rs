//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, FormButton, RegistrationForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form with its action panel
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], &app.state.form);
    draw_action_panel(frame, main_chunks[1], &app.state.form);
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let border_color = if form.is_action_panel_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" 新規登録 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.values().fields();
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field,
            form.active_field_index == idx,
            form.errors().message(field.name),
        );
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let is_focused = form.is_action_panel_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" 操作 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let buttons = form.buttons();
    let constraints: Vec<Constraint> = buttons
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (idx, button) in buttons.into_iter().enumerate() {
        let (is_enabled, accent) = match button {
            FormButton::Register => (true, Color::Green),
            FormButton::SearchAddress => {
                (!form.value(FieldName::PostalCode).is_empty(), Color::Blue)
            }
        };
        render_action_button(
            frame,
            button_chunks[idx],
            button.label(),
            is_focused && form.selected_button == idx,
            is_enabled,
            Some(accent),
        );
    }
}
