//! Application state and event handling.
//!
//! `App` owns the task store and all view state, and translates key events
//! into store mutations. Every handler runs synchronously to completion
//! before the next event is polled, so no locking is needed anywhere.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo_core::{Notice, Priority, Task, TaskId, TaskStore};

use crate::config::ClientConfig;
use crate::ui::theme::{Theme, ThemeMode};

/// Which input mode the app is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the task list (default).
    List,
    /// The add-task dialog is open.
    AddDialog,
}

/// A notice queued for on-screen display, with its raise time for expiry.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The underlying notification.
    pub notice: Notice,
    /// When the toast was raised.
    raised_at: Instant,
}

/// Main application state.
pub struct App {
    /// The task collection and its mutation entry points.
    pub store: TaskStore,
    /// Current input mode.
    pub mode: Mode,
    /// Index of the selected task in display order.
    pub selected: usize,
    /// Title text being typed in the add dialog.
    pub title_input: String,
    /// Cursor position in the title input (character index).
    pub cursor_position: usize,
    /// Priority selected in the add dialog.
    pub dialog_priority: Priority,
    /// Pending toasts, oldest first.
    pub toasts: Vec<Toast>,
    /// Active visual mode.
    pub theme_mode: ThemeMode,
    /// Palette for the active mode.
    pub theme: Theme,
    /// Whether the theme was toggled this session (drives write-back).
    pub theme_changed: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// chrono format string for created-at dates.
    pub date_format: String,
    max_title_len: usize,
    toast_ttl: Duration,
}

impl App {
    /// Creates the application with the starter tasks.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let mut store = TaskStore::new();
        seed_demo_tasks(&mut store);

        Self {
            store,
            mode: Mode::List,
            selected: 0,
            title_input: String::new(),
            cursor_position: 0,
            dialog_priority: Priority::default(),
            toasts: Vec::new(),
            theme_mode: config.theme,
            theme: Theme::for_mode(config.theme),
            theme_changed: false,
            should_quit: false,
            date_format: config.date_format.clone(),
            max_title_len: config.max_task_title_len,
            toast_ttl: config.toast_ttl,
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcut
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::List => self.handle_list_key(key),
            Mode::AddDialog => self.handle_dialog_key(key),
        }
    }

    /// Handle key event in list mode.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.open_add_dialog(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
    }

    /// Handle key event while the add dialog is open.
    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_dialog(),
            KeyCode::Enter => self.submit_task(),
            KeyCode::Up => self.dialog_priority = next_priority(self.dialog_priority),
            KeyCode::Down => self.dialog_priority = prev_priority(self.dialog_priority),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.title_input.chars().count(),
            _ => {}
        }
    }

    /// Open the add dialog with a fresh title and the default priority.
    fn open_add_dialog(&mut self) {
        self.title_input.clear();
        self.cursor_position = 0;
        self.dialog_priority = Priority::default();
        self.mode = Mode::AddDialog;
    }

    /// Close the add dialog without adding anything.
    fn cancel_dialog(&mut self) {
        self.mode = Mode::List;
    }

    /// Submit the dialog contents to the store.
    ///
    /// On rejection (empty title) the dialog stays open so the user can fix
    /// the input; the error surfaces as a toast.
    fn submit_task(&mut self) {
        match self.store.add(&self.title_input, self.dialog_priority) {
            Ok((id, notice)) => {
                tracing::info!(%id, "task added");
                self.push_notice(notice);
                self.mode = Mode::List;
                self.selected = 0;
            }
            Err(e) => self.push_notice(Notice::error(e.to_string())),
        }
    }

    /// Toggle completion of the selected task.
    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && let Some(notice) = self.store.toggle(&id)
        {
            self.push_notice(notice);
        }
    }

    /// Delete the selected task and clamp the selection.
    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && let Some(notice) = self.store.remove(&id)
        {
            self.push_notice(notice);
        }
        self.selected = self.selected.min(self.store.total().saturating_sub(1));
    }

    /// Switch between the light and dark palettes.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::for_mode(self.theme_mode);
        self.theme_changed = true;
        tracing::info!(mode = self.theme_mode.as_str(), "theme toggled");
    }

    /// The task currently under the selection, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected)
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    /// Queue a notice for display.
    pub fn push_notice(&mut self, notice: Notice) {
        self.toasts.push(Toast {
            notice,
            raised_at: Instant::now(),
        });
    }

    /// Drop toasts whose display window has elapsed.
    pub fn tick_toasts(&mut self) {
        let ttl = self.toast_ttl;
        self.toasts.retain(|t| t.raised_at.elapsed() < ttl);
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next task.
    fn select_next(&mut self) {
        if self.selected < self.store.total().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Insert a character at the cursor, up to the configured length cap.
    fn enter_char(&mut self, c: char) {
        if self.title_input.chars().count() >= self.max_title_len {
            return;
        }
        let idx = self.byte_index();
        self.title_input.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index();
            self.title_input.remove(idx);
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.title_input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Byte offset of the character cursor in the input string.
    fn byte_index(&self) -> usize {
        self.title_input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.title_input.len())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

/// Seed the starter tasks shown on first launch.
///
/// Added oldest-first so the display order matches reading order; startup
/// notices are discarded since there is no screen to toast onto yet.
fn seed_demo_tasks(store: &mut TaskStore) {
    if let Ok((read, _)) = store.add("Read \"Atomic Habits\" - Chapter 3", Priority::Low) {
        store.toggle(&read);
    }
    let _ = store.add("Buy groceries for the week", Priority::Medium);
    let _ = store.add("Finish project proposal", Priority::High);
}

/// Next priority in the Low -> Medium -> High cycle (wrapping).
const fn next_priority(p: Priority) -> Priority {
    match p {
        Priority::Low => Priority::Medium,
        Priority::Medium => Priority::High,
        Priority::High => Priority::Low,
    }
}

/// Previous priority in the cycle (wrapping).
const fn prev_priority(p: Priority) -> Priority {
    match p {
        Priority::Low => Priority::High,
        Priority::Medium => Priority::Low,
        Priority::High => Priority::Medium,
    }
}
