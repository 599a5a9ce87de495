//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_register(frame, main_area, app);

    layout::draw_status_bar(frame, app);

    // Notices are modal and drawn over everything else
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
