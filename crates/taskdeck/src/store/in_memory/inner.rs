//! Core in-memory store data structures.

use crate::domain::{Task, TaskId};

/// Inner store structure (not thread-safe on its own).
///
/// Rows live in a `Vec` in insertion order; `next_id` plays the role
/// of the table's autoincrement counter and never moves backwards,
/// so a deleted id is not reused for fresh inserts.
pub(crate) struct InMemoryStoreInner {
    /// Task rows in natural (insertion) order.
    pub(super) rows: Vec<Task>,

    /// Next id to hand out on `insert`.
    pub(super) next_id: i64,
}

impl InMemoryStoreInner {
    /// Create a new empty store.
    pub(crate) fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Claim the next autoincrement id.
    pub(super) fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Keep the counter ahead of an explicitly inserted id.
    pub(super) fn bump_counter_past(&mut self, id: TaskId) {
        if id.value() >= self.next_id {
            self.next_id = id.value() + 1;
        }
    }

    /// Index of the row with the given id, if present.
    pub(super) fn position_of(&self, id: TaskId) -> Option<usize> {
        self.rows.iter().position(|t| t.id == id)
    }
}
