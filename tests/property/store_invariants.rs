//! Property-based tests for the task list store.
//!
//! Uses proptest to verify, over arbitrary operation sequences:
//! 1. `pending == total - completed` after every operation.
//! 2. Task ids stay unique and the collection matches a reference model
//!    (same ids, same order, same completion flags).
//! 3. A successful add always prepends; a rejected add changes nothing.
//! 4. Toggling or removing an id absent from the collection is a no-op.

use proptest::prelude::*;
use termtodo_core::{Priority, StoreError, TaskId, TaskStore};

/// One operation against the store.
#[derive(Debug, Clone)]
enum Op {
    /// Add a task with this raw (possibly blank) title and priority.
    Add(String, Priority),
    /// Toggle the task at this index into the live id list (mod length).
    Toggle(usize),
    /// Remove the task at this index into the live id list (mod length).
    Remove(usize),
    /// Toggle an id that was never added.
    ToggleUnknown,
    /// Remove an id that was never added.
    RemoveUnknown,
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        // Titles include empty and whitespace-only strings so the
        // rejection path is exercised alongside the happy path.
        (".{0,20}", arb_priority()).prop_map(|(title, priority)| Op::Add(title, priority)),
        any::<usize>().prop_map(Op::Toggle),
        any::<usize>().prop_map(Op::Remove),
        Just(Op::ToggleUnknown),
        Just(Op::RemoveUnknown),
    ]
}

/// Reference model entry: (id, completed).
type ModelEntry = (TaskId, bool);

/// Assert the store agrees with the model after an operation.
fn check_against_model(store: &TaskStore, model: &[ModelEntry]) {
    assert_eq!(store.total(), model.len());
    assert_eq!(
        store.pending(),
        model.iter().filter(|(_, done)| !done).count()
    );

    for (task, (id, done)) in store.tasks().iter().zip(model) {
        assert_eq!(&task.id, id);
        assert_eq!(task.completed, *done);
    }

    // Ids unique within the collection.
    for (i, a) in model.iter().enumerate() {
        for b in &model[i + 1..] {
            assert_ne!(a.0, b.0);
        }
    }
}

proptest! {
    /// The store matches a simple prepend-list model for every operation
    /// sequence, and `pending` always equals `total` minus completed count.
    #[test]
    fn store_matches_model(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut store = TaskStore::new();
        let mut model: Vec<ModelEntry> = Vec::new();

        for op in ops {
            match op {
                Op::Add(title, priority) => {
                    let blank = title.trim().is_empty();
                    match store.add(&title, priority) {
                        Ok((id, _)) => {
                            prop_assert!(!blank);
                            model.insert(0, (id, false));
                        }
                        Err(StoreError::TitleEmpty) => prop_assert!(blank),
                    }
                }
                Op::Toggle(raw) => {
                    if model.is_empty() {
                        continue;
                    }
                    let idx = raw % model.len();
                    let id = model[idx].0.clone();
                    prop_assert!(store.toggle(&id).is_some());
                    model[idx].1 = !model[idx].1;
                }
                Op::Remove(raw) => {
                    if model.is_empty() {
                        continue;
                    }
                    let idx = raw % model.len();
                    let id = model[idx].0.clone();
                    prop_assert!(store.remove(&id).is_some());
                    model.remove(idx);
                }
                Op::ToggleUnknown => {
                    prop_assert!(store.toggle(&TaskId::new()).is_none());
                }
                Op::RemoveUnknown => {
                    prop_assert!(store.remove(&TaskId::new()).is_none());
                }
            }

            check_against_model(&store, &model);
        }
    }

    /// Toggling the same task twice always restores its original flag.
    #[test]
    fn double_toggle_is_identity(titles in prop::collection::vec("[a-z]{1,10}", 1..10), pick in any::<usize>()) {
        let mut store = TaskStore::new();
        for title in &titles {
            store.add(title, Priority::Medium).map_err(|_| TestCaseError::fail("add failed"))?;
        }
        let idx = pick % store.total();
        let id = store.tasks()[idx].id.clone();
        let before = store.tasks()[idx].completed;

        store.toggle(&id);
        store.toggle(&id);

        let task = store.get(&id).ok_or_else(|| TestCaseError::fail("task vanished"))?;
        prop_assert_eq!(task.completed, before);
    }
}
