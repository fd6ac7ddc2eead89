//! Task record and its identifier and priority types.

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority. Affects display treatment only — it has no effect on
/// ordering or scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Normal urgency (the default for new tasks).
    #[default]
    Medium,
    /// High urgency.
    High,
}

impl Priority {
    /// Parses a priority from its lowercase name.
    ///
    /// Returns `None` for unrecognized input; callers fall back to a muted
    /// display treatment rather than failing.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// One-character marker shown next to the task title.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Low => "\u{25cb}",    // ○
            Self::Medium => "\u{25cf}", // ●
            Self::High => "\u{25b2}",   // ▲
        }
    }

    /// Capitalized label for display ("Low", "Medium", "High").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A single to-do item.
///
/// Tasks are only ever created through [`TaskStore::add`], which enforces the
/// non-empty-title invariant and stamps `id` and `created_at`. Both are
/// immutable afterwards; `completed` is the only field with a mutation path.
///
/// [`TaskStore::add`]: crate::store::TaskStore::add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique task identifier (UUID v7, time-ordered).
    pub id: TaskId,
    /// Display title, non-empty after trimming.
    pub title: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Display priority.
    pub priority: Priority,
    /// When this task was created.
    pub created_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_display_is_uuid() {
        let id = TaskId::new();
        let display = id.to_string();
        assert_eq!(display.len(), 36);
        assert!(display.contains('-'));
    }

    #[test]
    fn task_id_from_uuid_round_trip() {
        let uuid = Uuid::now_v7();
        let id = TaskId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn task_ids_are_unique() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_display() {
        assert_eq!(Priority::Low.to_string(), "low");
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(Priority::High.to_string(), "high");
    }

    #[test]
    fn priority_parse_round_trip() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::parse(&p.to_string()), Some(p));
        }
    }

    #[test]
    fn priority_parse_ignores_case_and_whitespace() {
        assert_eq!(Priority::parse("  HIGH "), Some(Priority::High));
        assert_eq!(Priority::parse("Medium"), Some(Priority::Medium));
    }

    #[test]
    fn priority_parse_unrecognized_is_none() {
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn priority_glyphs_are_distinct() {
        assert_ne!(Priority::Low.glyph(), Priority::Medium.glyph());
        assert_ne!(Priority::Medium.glyph(), Priority::High.glyph());
        assert_ne!(Priority::Low.glyph(), Priority::High.glyph());
    }
}
