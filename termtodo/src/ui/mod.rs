//! Terminal UI rendering.

pub mod add_dialog;
pub mod header;
pub mod status_bar;
pub mod task_list;
pub mod theme;
pub mod toast;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::app::{App, Mode};

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Paint the themed background over the whole screen first.
    let backdrop = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.text),
    );
    frame.render_widget(backdrop, frame.area());

    // Header on top, status bar at the bottom, task list in between.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    task_list::render(frame, chunks[1], app);
    status_bar::render(frame, chunks[2], app);

    // Overlays last so they sit above the list.
    if app.mode == Mode::AddDialog {
        add_dialog::render(frame, app);
    }
    toast::render(frame, app);
}
