//! Status bar rendering (footer counts + key help).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Mode};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let help_text = match app.mode {
        Mode::List => {
            "a: add | Space/Enter: toggle | d: delete | \u{2191}\u{2193}/jk: navigate | t: theme | q: quit"
        }
        Mode::AddDialog => "Enter: add | \u{2191}\u{2193}: priority | Esc: cancel",
    };

    let status_line = Line::from(vec![
        Span::styled("termtodo v0.1.0", theme.bold().bg(theme.bar_bg)),
        Span::raw(" | "),
        Span::styled(
            format!("{} pending", app.store.pending()),
            theme.bold().bg(theme.bar_bg),
        ),
        Span::raw(format!(" / {} total", app.store.total())),
        Span::raw(" | "),
        Span::styled(help_text, theme.dimmed().bg(theme.bar_bg)),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme.status_bar());
    frame.render_widget(paragraph, area);
}
