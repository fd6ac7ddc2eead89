//! Toast overlay rendering.
//!
//! Toasts stack below the header in the top-right corner, newest first,
//! and disappear once their display window elapses (pruned by
//! `App::tick_toasts`).

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Clear, Paragraph},
};

use crate::app::App;

/// Maximum number of toasts shown at once.
const MAX_VISIBLE: usize = 4;

/// Render pending toasts in the top-right corner.
pub fn render(frame: &mut Frame, app: &App) {
    let screen = frame.area();

    for (row, toast) in app.toasts.iter().rev().take(MAX_VISIBLE).enumerate() {
        let notice = &toast.notice;
        let text = format!(" {} {} ", notice.kind.symbol(), notice.message);
        let width = u16::try_from(text.chars().count())
            .unwrap_or(u16::MAX)
            .min(screen.width.saturating_sub(2));
        let y = screen.y + 1 + u16::try_from(row).unwrap_or(u16::MAX);
        if y >= screen.bottom() {
            break;
        }

        let area = Rect {
            x: screen.right().saturating_sub(width + 1),
            y,
            width,
            height: 1,
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text).style(app.theme.notice_style(notice.kind)),
            area,
        );
    }
}
