//! The task list store: ordered in-memory task collection with defined
//! mutation entry points.
//!
//! `TaskStore` is the single owner of all task state. The view layer calls
//! [`TaskStore::add`], [`TaskStore::toggle`], and [`TaskStore::remove`] from
//! its key handlers and re-renders from [`TaskStore::tasks`] afterwards.
//! Every mutation returns the [`Notice`] the view should surface.

use chrono::Local;
use thiserror::Error;

use crate::notice::Notice;
use crate::task::{Priority, Task, TaskId};

/// Errors that can occur during store operations.
///
/// The empty-title rejection is the only user-correctable error; toggling or
/// removing an unknown id is a benign no-op, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Task title cannot be empty after trimming.
    #[error("task title cannot be empty")]
    TitleEmpty,
}

/// Ordered, in-memory collection of tasks (most-recent-first).
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Adds a new task with the given title and priority, prepending it to
    /// the collection so the newest task is displayed first.
    ///
    /// The title is trimmed before storage. Returns the new task's id and a
    /// success notice.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TitleEmpty`] if the trimmed title is empty; the
    /// collection is left unchanged.
    pub fn add(&mut self, title: &str, priority: Priority) -> Result<(TaskId, Notice), StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::TitleEmpty);
        }

        let task = Task {
            id: TaskId::new(),
            title: title.to_string(),
            completed: false,
            priority,
            created_at: Local::now(),
        };
        let id = task.id.clone();
        tracing::debug!(%id, %priority, "task added");
        self.tasks.insert(0, task);

        Ok((id, Notice::success("Task added successfully!")))
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Returns an informational notice naming the new state, or `None` if no
    /// task with that id exists (silently ignored — nothing to toggle).
    pub fn toggle(&mut self, id: &TaskId) -> Option<Notice> {
        let task = self.tasks.iter_mut().find(|t| &t.id == id)?;
        task.completed = !task.completed;
        let state = if task.completed {
            "complete"
        } else {
            "incomplete"
        };
        tracing::debug!(%id, state, "task toggled");
        Some(Notice::info(format!(
            "Task \"{}\" marked as {state}.",
            task.title
        )))
    }

    /// Permanently removes the task with the given id.
    ///
    /// Returns a warning notice, or `None` if no task with that id exists
    /// (silently ignored — nothing to delete).
    pub fn remove(&mut self, id: &TaskId) -> Option<Notice> {
        let pos = self.tasks.iter().position(|t| &t.id == id)?;
        let task = self.tasks.remove(pos);
        tracing::debug!(%id, "task deleted");
        Some(Notice::warning(format!("Task \"{}\" deleted.", task.title)))
    }

    /// All tasks in display order (most recently added first).
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Total number of tasks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
