//! Header bar rendering (app title + theme indicator).

use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Render the header line with the app title, date, and active theme.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = Line::from(vec![
        Span::styled("\u{2630} Todos Lists", theme.title()),
        Span::raw("   "),
        Span::styled(
            Local::now().format(&app.date_format).to_string(),
            theme.dimmed(),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} {}", app.theme_mode.indicator(), app.theme_mode.as_str()),
            theme.dimmed(),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false)),
    );
    frame.render_widget(paragraph, area);
}
