//! The Task Cache: an in-memory mirror of the persisted task set.

use crate::domain::{Task, TaskId};
use crate::error::Result;
use crate::store::TaskStore;

/// Ordered mirror of the store's rows.
///
/// The cache is replaced wholesale on every [`refresh`](Self::refresh);
/// there is no incremental update by design. Callers that need current
/// data refresh first, which trades a store round trip for the absence
/// of cache-coherency bugs.
#[derive(Debug, Default)]
pub struct TaskCache {
    tasks: Vec<Task>,
}

impl TaskCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire cached set with the store's current rows,
    /// in the store's natural row order (no implicit sort).
    ///
    /// # Errors
    ///
    /// Propagates store read failures; the old cache contents are kept
    /// when the read fails.
    pub async fn refresh(&mut self, store: &dyn TaskStore) -> Result<()> {
        let rows = store.select_all().await?;
        tracing::trace!(count = rows.len(), "refreshed task cache");
        self.tasks = rows;
        Ok(())
    }

    /// Look up a task by id.
    ///
    /// A missing id yields a default/empty Task rather than an error;
    /// callers treat an empty title as "not found" before use.
    #[must_use]
    pub fn find_by_id(&self, id: TaskId) -> Task {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .unwrap_or_default()
    }

    /// The cached tasks in row order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of cached tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the cache holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
