//! In-memory task list store for `termtodo`.
//!
//! Holds the ordered task collection and its defined mutation entry points
//! (add / toggle / remove). No terminal, I/O, or async dependencies, so the
//! whole state container is unit-testable without a rendering environment.

pub mod notice;
pub mod store;
pub mod task;

pub use notice::{Notice, NoticeKind};
pub use store::{StoreError, TaskStore};
pub use task::{Priority, Task, TaskId};
