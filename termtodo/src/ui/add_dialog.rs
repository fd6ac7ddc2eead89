//! Add-task dialog rendering (modal overlay).

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

/// Render the centered add-task dialog over the task list.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(60, 8, frame.area());

    frame.render_widget(Clear, area);

    let dialog = Block::default()
        .title(Span::styled("Add New Task", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    let inner = dialog.inner(area);
    frame.render_widget(dialog, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_title_input(frame, chunks[0], app);
    render_priority_selector(frame, chunks[1], app);

    let hint = Paragraph::new(Line::from(Span::styled(
        "Enter: add | \u{2191}\u{2193}: priority | Esc: cancel",
        theme.dimmed(),
    )));
    frame.render_widget(hint, chunks[2]);
}

/// Render the title input box with a block cursor.
fn render_title_input(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    // Insert the cursor character at the cursor position.
    let mut display_text = String::new();
    let mut placed = false;
    for (i, c) in app.title_input.chars().enumerate() {
        if i == app.cursor_position {
            display_text.push('\u{2588}');
            placed = true;
        }
        display_text.push(c);
    }
    if !placed {
        display_text.push('\u{2588}');
    }

    let input_line = if app.title_input.is_empty() {
        Line::from(vec![
            Span::styled("\u{2588}", theme.input_cursor()),
            Span::styled("Add a new task title...", theme.dimmed()),
        ])
    } else {
        Line::from(Span::styled(display_text, theme.normal()))
    };

    let block = Block::default()
        .title("Title")
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the low/medium/high selector with the active choice highlighted.
fn render_priority_selector(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = Line::from(vec![
        Span::styled("Priority: ", theme.normal()),
        Span::styled("\u{2039} ", theme.dimmed()),
        Span::styled(
            format!(
                "{} {}",
                app.dialog_priority.glyph(),
                app.dialog_priority.label()
            ),
            theme.priority_style(Some(app.dialog_priority)),
        ),
        Span::styled(" \u{203a}", theme.dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// A rectangle of the given width percentage and fixed height, centered in `r`.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = u16::try_from(u32::from(r.width) * u32::from(percent_x) / 100)
        .unwrap_or(r.width)
        .min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
