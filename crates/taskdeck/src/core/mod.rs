//! Core orchestration: cache, dependency graph, recommendations and
//! the undo/redo log, behind a single facade.
//!
//! Control flow for any mutation: capture the pre-mutation snapshot,
//! apply the change through the store, record the snapshot in the
//! Action Log (only once the write has succeeded), persist, then
//! refresh the cache and recompute the graph and recommendation list.
//! Read paths never touch the graph or the log.

pub mod cache;
pub mod graph;
pub mod history;
pub mod recommend;
pub mod reminders;

use chrono::NaiveDate;

use crate::domain::{Task, TaskFields, TaskId, TaskStatus};
use crate::error::{Error, Result};
use crate::store::TaskStore;

pub use cache::TaskCache;
pub use graph::DependencyGraph;
pub use history::{ActionLog, ActionRecord, ChangeKind, UndoOutcome};
pub use reminders::{DueStatus, Reminder};

/// How many tasks a recommendation pass keeps by default.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Owns the store handle, the Task Cache, the Action Log and the
/// derived state (dependency graph, recommendation list).
///
/// Single logical control flow: each operation runs to completion
/// before the next. The cache and the log stacks are mutated only
/// here; callers read returned snapshots.
pub struct Tracker {
    store: Box<dyn TaskStore>,
    cache: TaskCache,
    log: ActionLog,
    graph: DependencyGraph,
    recommendations: Vec<Task>,
}

impl Tracker {
    /// Wrap a store handle and load its current contents.
    pub async fn new(store: Box<dyn TaskStore>) -> Result<Self> {
        Self::with_log(store, ActionLog::new()).await
    }

    /// Wrap a store handle with previously recorded history.
    pub async fn with_log(store: Box<dyn TaskStore>, log: ActionLog) -> Result<Self> {
        let mut tracker = Self {
            store,
            cache: TaskCache::new(),
            log,
            graph: DependencyGraph::new(),
            recommendations: Vec::new(),
        };
        tracker.refresh().await?;
        Ok(tracker)
    }

    /// Reload the cache wholesale, rebuild the dependency graph and
    /// recompute the recommendation list.
    pub async fn refresh(&mut self) -> Result<()> {
        self.cache.refresh(self.store.as_ref()).await?;
        self.graph = graph::build(self.cache.tasks());
        self.recommendations = recommend::recommend(
            self.cache.tasks(),
            &self.graph,
            DEFAULT_RECOMMENDATION_LIMIT,
        );
        tracing::debug!(
            tasks = self.cache.len(),
            recommended = self.recommendations.len(),
            "refreshed"
        );
        Ok(())
    }

    /// Create a new task. Not undoable, but it still counts as a fresh
    /// edit and therefore invalidates forward history.
    pub async fn add_task(&mut self, fields: TaskFields) -> Result<Task> {
        let task = self.store.insert(fields).await?;
        self.log.invalidate_redo();
        self.persist_and_refresh().await?;
        tracing::info!(id = %task.id, title = %task.title, "task added");
        Ok(task)
    }

    /// Change a task's status. Undoable.
    pub async fn set_status(&mut self, id: TaskId, status: TaskStatus) -> Result<Task> {
        let snapshot = self
            .store
            .select_by_id(id)
            .await?
            .ok_or(Error::TaskNotFound(id))?;
        let mut fields = snapshot.fields();
        fields.status = status;
        let updated = self.store.update(id, fields).await?;
        self.log
            .record_before_change(snapshot, ChangeKind::Update);
        self.persist_and_refresh().await?;
        tracing::info!(id = %id, status = %status, "status changed");
        Ok(updated)
    }

    /// Delete a task. Undoable; undo recreates the row with its
    /// original id and field values.
    pub async fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        let snapshot = self
            .store
            .select_by_id(id)
            .await?
            .ok_or(Error::TaskNotFound(id))?;
        self.store.delete(id).await?;
        self.log
            .record_before_change(snapshot.clone(), ChangeKind::Delete);
        self.persist_and_refresh().await?;
        tracing::info!(id = %id, "task deleted");
        Ok(snapshot)
    }

    /// Reverse the most recent undoable mutation.
    pub async fn undo(&mut self) -> Result<UndoOutcome> {
        let outcome = self.log.undo(self.store.as_mut(), &self.cache).await?;
        if matches!(outcome, UndoOutcome::Applied(_)) {
            self.persist_and_refresh().await?;
        }
        Ok(outcome)
    }

    /// Re-apply the most recently undone mutation.
    pub async fn redo(&mut self) -> Result<UndoOutcome> {
        let outcome = self.log.redo(self.store.as_mut(), &self.cache).await?;
        if matches!(outcome, UndoOutcome::Applied(_)) {
            self.persist_and_refresh().await?;
        }
        Ok(outcome)
    }

    async fn persist_and_refresh(&mut self) -> Result<()> {
        self.store.save().await?;
        self.refresh().await
    }

    /// All tasks in natural row order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.cache.tasks()
    }

    /// A task by id, or the empty placeholder when absent.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Task {
        self.cache.find_by_id(id)
    }

    /// Tasks ordered by parsable due date ascending; undated or
    /// unparsable-dated tasks keep row order after all dated ones.
    #[must_use]
    pub fn tasks_by_deadline(&self) -> Vec<Task> {
        let mut tasks = self.cache.tasks().to_vec();
        tasks.sort_by(|a, b| match (a.parsed_due_date(), b.parsed_due_date()) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        tasks
    }

    /// Tasks ordered by priority descending; ties keep row order.
    #[must_use]
    pub fn tasks_by_priority(&self) -> Vec<Task> {
        let mut tasks = self.cache.tasks().to_vec();
        tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
        tasks
    }

    /// The current recommendation list, at most
    /// [`DEFAULT_RECOMMENDATION_LIMIT`] entries.
    #[must_use]
    pub fn recommendations(&self) -> &[Task] {
        &self.recommendations
    }

    /// Recompute recommendations with a caller-chosen bound.
    #[must_use]
    pub fn recommendations_up_to(&self, limit: usize) -> Vec<Task> {
        recommend::recommend(self.cache.tasks(), &self.graph, limit)
    }

    /// The dependency edges of one task, if it has any.
    #[must_use]
    pub fn dependencies_of(&self, id: TaskId) -> Vec<TaskId> {
        let mut deps: Vec<TaskId> = self
            .graph
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        deps.sort();
        deps
    }

    /// Case-insensitive substring search over title and description.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Task> {
        let needle = query.to_lowercase();
        self.cache
            .tasks()
            .iter()
            .filter(|task| {
                task.title.to_lowercase().contains(&needle)
                    || task.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Tasks needing attention relative to `today`, in row order.
    #[must_use]
    pub fn reminders(&self, today: NaiveDate) -> Vec<Reminder> {
        reminders::due_reminders(self.cache.tasks(), today)
    }

    /// The current action log, for callers that persist history.
    #[must_use]
    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    /// Number of reversible mutations on the undo stack.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.log.undo_depth()
    }

    /// Number of re-appliable mutations on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.log.redo_depth()
    }
}
