//! End-to-end task flow tests driving `App` with synthetic key events.
//!
//! Covers the full user journeys: opening the add dialog, typing a title,
//! picking a priority, submitting, toggling, deleting, rejecting blank
//! titles, and toggling the theme.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo::app::{App, Mode};
use termtodo::config::ClientConfig;
use termtodo_core::{NoticeKind, Priority, TaskId};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Creates an app with an empty task list (demo tasks removed).
fn empty_app() -> App {
    let mut app = App::new(&ClientConfig::default());
    let ids: Vec<TaskId> = app.store.tasks().iter().map(|t| t.id.clone()).collect();
    for id in &ids {
        app.store.remove(id);
    }
    app.toasts.clear();
    app
}

/// Sends a plain key press to the app.
fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Types a string into the app one character at a time.
fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Adds a task through the dialog: open, type, set priority, submit.
fn add_task(app: &mut App, title: &str, ups: usize) {
    press(app, KeyCode::Char('a'));
    type_str(app, title);
    for _ in 0..ups {
        press(app, KeyCode::Up);
    }
    press(app, KeyCode::Enter);
}

/// Kind of the most recent toast.
fn last_toast_kind(app: &App) -> Option<NoticeKind> {
    app.toasts.last().map(|t| t.notice.kind)
}

// ---------------------------------------------------------------------------
// Journeys
// ---------------------------------------------------------------------------

#[test]
fn add_toggle_delete_journey() {
    let mut app = empty_app();

    // Add "Buy milk" with low priority (two Ups from medium wraps to low).
    add_task(&mut app, "Buy milk", 2);
    assert_eq!(app.mode, Mode::List);
    assert_eq!(app.store.total(), 1);
    assert_eq!(app.store.pending(), 1);
    assert_eq!(app.store.tasks()[0].priority, Priority::Low);
    assert_eq!(last_toast_kind(&app), Some(NoticeKind::Success));

    // Add "File taxes" with high priority; it lands first.
    add_task(&mut app, "File taxes", 1);
    assert_eq!(app.store.total(), 2);
    assert_eq!(app.store.tasks()[0].title, "File taxes");
    assert_eq!(app.store.tasks()[0].priority, Priority::High);

    // Select "Buy milk" (second row) and toggle it complete.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.store.pending(), 1);
    assert_eq!(last_toast_kind(&app), Some(NoticeKind::Info));
    assert!(
        app.toasts.last().unwrap().notice.message.contains("Buy milk"),
        "toggle toast should name the task"
    );

    // Delete "File taxes" (first row).
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.store.total(), 1);
    assert_eq!(app.store.pending(), 0);
    let remaining = &app.store.tasks()[0];
    assert_eq!(remaining.title, "Buy milk");
    assert!(remaining.completed);
    assert_eq!(last_toast_kind(&app), Some(NoticeKind::Warning));
}

#[test]
fn blank_title_is_rejected_and_dialog_stays_open() {
    let mut app = empty_app();

    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::AddDialog, "dialog stays open on rejection");
    assert_eq!(app.store.total(), 0);
    assert_eq!(last_toast_kind(&app), Some(NoticeKind::Error));

    // Fixing the title succeeds from the same dialog.
    type_str(&mut app, "now valid");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::List);
    assert_eq!(app.store.total(), 1);
    assert_eq!(app.store.tasks()[0].title, "now valid");
}

#[test]
fn default_priority_is_medium() {
    let mut app = empty_app();
    add_task(&mut app, "Plain task", 0);
    assert_eq!(app.store.tasks()[0].priority, Priority::Medium);
}

#[test]
fn deleting_last_task_leaves_empty_list_and_further_deletes_are_noops() {
    let mut app = empty_app();
    add_task(&mut app, "Only one", 0);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.store.is_empty());

    let toasts_before = app.toasts.len();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char(' '));
    assert!(app.store.is_empty());
    assert_eq!(app.toasts.len(), toasts_before, "no-ops raise no toasts");
}

#[test]
fn theme_toggle_round_trips_and_marks_dirty() {
    let mut app = empty_app();
    let initial = app.theme_mode;
    assert!(!app.theme_changed);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme_mode, initial.toggled());
    assert!(app.theme_changed);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme_mode, initial);
}

#[test]
fn demo_tasks_survive_startup_and_counts_match() {
    let app = App::new(&ClientConfig::default());
    assert_eq!(app.store.total(), 3);
    assert_eq!(app.store.pending(), 2);
}

#[test]
fn quit_keys_set_should_quit() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = empty_app();
        press(&mut app, code);
        assert!(app.should_quit);
    }
}
