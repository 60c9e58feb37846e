//! UI rendering.
//!
//! The terminal view fills the whole frame; there is no other chrome.

use ratatui::widgets::Paragraph;

use crate::terminal::base_style;

use super::state::App;

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    if area.height != app.view.rows() || area.width != app.view.cols() {
        app.view.resize(area.height, area.width);
    }

    let theme = app.session.theme.palette();
    let lines = app.view.render_lines(&theme);
    let body = Paragraph::new(lines).style(base_style(&theme));
    frame.render_widget(body, area);
}
