//! The Action Log: reversible-edit semantics over two LIFO stacks.
//!
//! Every undoable mutation (status update or delete) records the
//! affected task's pre-mutation snapshot tagged with the change kind.
//! `undo` pops the stack and writes the snapshot back to the store;
//! `redo` re-applies a reversed change. Stacks hold full value
//! snapshots, not diffs; task records are small enough that the memory
//! cost buys a much simpler invariant.

use serde::{Deserialize, Serialize};

use super::cache::TaskCache;
use crate::domain::Task;
use crate::error::Result;
use crate::store::TaskStore;

/// The kind of change an [`ActionRecord`] makes undoable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Field values changed in place (e.g. a status transition).
    Update,
    /// The row was removed from the store.
    Delete,
}

/// A snapshot of a task's state immediately before a mutation, tagged
/// with the kind of change being made undoable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The task as it looked before the mutation.
    pub snapshot: Task,
    /// What the mutation did.
    pub kind: ChangeKind,
}

/// Outcome of an undo or redo request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// A record was popped and its reversal applied to the store.
    Applied(ActionRecord),
    /// The stack was empty; nothing happened.
    Empty,
}

/// Two unbounded LIFO stacks of [`ActionRecord`].
///
/// Invariant: any state-changing operation that is not itself an
/// undo/redo clears the redo stack - a fresh edit invalidates forward
/// history, the conventional editor undo model.
///
/// The log serializes so the CLI can carry history across process
/// invocations; within a process it is plain in-memory state.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ActionLog {
    undo: Vec<ActionRecord>,
    redo: Vec<ActionRecord>,
}

impl ActionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation snapshot of a task.
    ///
    /// The snapshot must have been captured *before* the mutating
    /// write reached the store; capturing after produces a no-op undo.
    /// Callers push only once the store write has succeeded, so a
    /// failed write never leaves a partial mutation in the log.
    pub fn record_before_change(&mut self, snapshot: Task, kind: ChangeKind) {
        tracing::debug!(id = %snapshot.id, ?kind, "recording undo snapshot");
        self.undo.push(ActionRecord { snapshot, kind });
        self.redo.clear();
    }

    /// Invalidate forward history without recording anything.
    ///
    /// Used by mutations that are not themselves undoable (adding a
    /// task) but still count as fresh edits.
    pub fn invalidate_redo(&mut self) {
        self.redo.clear();
    }

    /// Reverse the most recent recorded mutation.
    ///
    /// - `Delete`: the snapshot row is re-inserted with its original
    ///   id and field values; the same record moves to the redo stack.
    /// - `Update`: the task's *current* (pre-undo) state is captured
    ///   from the cache and pushed onto redo, then the snapshot's
    ///   field values are written back to the store.
    ///
    /// The caller must refresh the cache and recompute recommendations
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Propagates store write failures; on failure both stacks are
    /// left unchanged.
    pub async fn undo(
        &mut self,
        store: &mut dyn TaskStore,
        cache: &TaskCache,
    ) -> Result<UndoOutcome> {
        let Some(record) = self.undo.last().cloned() else {
            return Ok(UndoOutcome::Empty);
        };

        match record.kind {
            ChangeKind::Delete => {
                store.insert_with_id(record.snapshot.clone()).await?;
                self.undo.pop();
                self.redo.push(record.clone());
            }
            ChangeKind::Update => {
                let current = cache.find_by_id(record.snapshot.id);
                store
                    .update(record.snapshot.id, record.snapshot.fields())
                    .await?;
                self.undo.pop();
                self.redo.push(ActionRecord {
                    snapshot: current,
                    kind: ChangeKind::Update,
                });
            }
        }

        tracing::debug!(id = %record.snapshot.id, kind = ?record.kind, "undo applied");
        Ok(UndoOutcome::Applied(record))
    }

    /// Re-apply the most recently undone mutation.
    ///
    /// Symmetric to [`undo`](Self::undo): `Delete` re-deletes the row,
    /// `Update` re-applies the recorded field values; either way the
    /// reversing record lands back on the undo stack.
    ///
    /// # Errors
    ///
    /// Propagates store write failures; on failure both stacks are
    /// left unchanged.
    pub async fn redo(
        &mut self,
        store: &mut dyn TaskStore,
        cache: &TaskCache,
    ) -> Result<UndoOutcome> {
        let Some(record) = self.redo.last().cloned() else {
            return Ok(UndoOutcome::Empty);
        };

        match record.kind {
            ChangeKind::Delete => {
                store.delete(record.snapshot.id).await?;
                self.redo.pop();
                self.undo.push(record.clone());
            }
            ChangeKind::Update => {
                let current = cache.find_by_id(record.snapshot.id);
                store
                    .update(record.snapshot.id, record.snapshot.fields())
                    .await?;
                self.redo.pop();
                self.undo.push(ActionRecord {
                    snapshot: current,
                    kind: ChangeKind::Update,
                });
            }
        }

        tracing::debug!(id = %record.snapshot.id, kind = ?record.kind, "redo applied");
        Ok(UndoOutcome::Applied(record))
    }

    /// Number of reversible mutations currently recorded.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of re-appliable mutations currently recorded.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskFields, TaskStatus};
    use crate::store::in_memory::new_in_memory_store;

    async fn seed(store: &mut Box<dyn TaskStore>, title: &str) -> Task {
        store
            .insert(TaskFields {
                title: title.to_string(),
                priority: 2,
                ..TaskFields::default()
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn undo_on_empty_log_is_a_noop() {
        let mut store = new_in_memory_store();
        let cache = TaskCache::new();
        let mut log = ActionLog::new();

        let outcome = log.undo(store.as_mut(), &cache).await.unwrap();
        assert_eq!(outcome, UndoOutcome::Empty);
    }

    #[tokio::test]
    async fn record_then_undo_restores_prior_fields_and_fills_redo() {
        let mut store = new_in_memory_store();
        let task = seed(&mut store, "Report").await;

        let mut log = ActionLog::new();
        log.record_before_change(task.clone(), ChangeKind::Update);

        // Apply the mutation the record made undoable
        let mut changed = task.fields();
        changed.status = TaskStatus::Complete;
        store.update(task.id, changed).await.unwrap();

        let mut cache = TaskCache::new();
        cache.refresh(store.as_ref()).await.unwrap();

        let outcome = log.undo(store.as_mut(), &cache).await.unwrap();
        assert!(matches!(outcome, UndoOutcome::Applied(_)));
        assert_eq!(log.redo_depth(), 1);

        let restored = store.select_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(restored, task);
    }

    #[tokio::test]
    async fn fresh_record_clears_redo() {
        let mut store = new_in_memory_store();
        let task = seed(&mut store, "Edit").await;

        let mut log = ActionLog::new();
        log.record_before_change(task.clone(), ChangeKind::Update);

        let mut changed = task.fields();
        changed.status = TaskStatus::InProgress;
        store.update(task.id, changed).await.unwrap();

        let mut cache = TaskCache::new();
        cache.refresh(store.as_ref()).await.unwrap();
        log.undo(store.as_mut(), &cache).await.unwrap();
        assert_eq!(log.redo_depth(), 1);

        // A new top-level mutation invalidates forward history
        log.record_before_change(task.clone(), ChangeKind::Update);
        assert_eq!(log.redo_depth(), 0);
    }

    #[tokio::test]
    async fn failed_store_write_leaves_log_unchanged() {
        let mut store = new_in_memory_store();
        let task = seed(&mut store, "Ghost").await;

        let mut log = ActionLog::new();
        log.record_before_change(task.clone(), ChangeKind::Update);

        // Delete the row out from under the log so update fails
        store.delete(task.id).await.unwrap();
        let mut cache = TaskCache::new();
        cache.refresh(store.as_ref()).await.unwrap();

        let result = log.undo(store.as_mut(), &cache).await;
        assert!(result.is_err());
        assert_eq!(log.undo_depth(), 1);
        assert_eq!(log.redo_depth(), 0);
    }
}
