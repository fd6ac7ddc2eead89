//! Notification events emitted by store operations.
//!
//! A [`Notice`] is a transient, non-blocking message reporting the outcome
//! of an operation. The view layer renders them as toasts and drops them
//! after a short display window; the store never retains them.

/// Severity of a notification, which drives its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// An operation succeeded (task added).
    Success,
    /// Informational state change (task toggled).
    Info,
    /// A destructive action happened (task deleted).
    Warning,
    /// A user-correctable rejection (empty title).
    Error,
}

impl NoticeKind {
    /// Display symbol shown before the notice message.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Info => "\u{2139}",
            Self::Warning => "\u{26a0}",
            Self::Error => "\u{2717}",
        }
    }
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity category.
    pub kind: NoticeKind,
    /// Human-readable message text.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Creates an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// Creates a warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}
