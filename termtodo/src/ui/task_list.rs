//! Task list rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Mode};

/// Render the task list, or a placeholder when there are no tasks.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let is_focused = app.mode == Mode::List;

    let block = Block::default()
        .title(Span::styled("Tasks", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border_style(is_focused));

    if app.store.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Press 'a' to add one and get started! :)",
            theme.dimmed(),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = idx == app.selected;

            let checkbox = if task.completed { "[x]" } else { "[ ]" };
            let checkbox_style = if task.completed {
                theme.normal().fg(theme.success)
            } else {
                theme.normal()
            };
            let title_style = if task.completed {
                theme.completed()
            } else {
                theme.bold()
            };

            let title_line = Line::from(vec![
                Span::styled(checkbox, checkbox_style),
                Span::raw(" "),
                Span::styled(task.title.as_str(), title_style),
            ]);

            let meta_line = Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{} {}", task.priority.glyph(), task.priority.label()),
                    theme.priority_style(Some(task.priority)),
                ),
                Span::styled(
                    format!(" | Created: {}", task.created_at.format(&app.date_format)),
                    theme.dimmed(),
                ),
            ]);

            let item = ListItem::new(vec![title_line, meta_line]);
            if is_selected && is_focused {
                item.style(theme.selected())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
