//! TaskStore trait implementation for the in-memory store.

use super::InMemoryStore;
use crate::domain::{Task, TaskFields, TaskId, MAX_PRIORITY};
use crate::error::{Error, Result};
use crate::store::TaskStore;
use async_trait::async_trait;

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn select_all(&self) -> Result<Vec<Task>> {
        let inner = self.lock().await;
        Ok(inner.rows.clone())
    }

    async fn select_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let inner = self.lock().await;
        Ok(inner.position_of(id).map(|idx| inner.rows[idx].clone()))
    }

    async fn insert(&mut self, fields: TaskFields) -> Result<Task> {
        if fields.priority > MAX_PRIORITY {
            return Err(Error::InvalidPriority(fields.priority));
        }
        fields
            .validate()
            .map_err(|e| Error::Storage(format!("Validation failed: {}", e)))?;

        let mut inner = self.lock().await;
        let id = inner.allocate_id();
        let task = Task::from_fields(id, fields);
        inner.rows.push(task.clone());

        tracing::debug!(id = %id, title = %task.title, "inserted task");
        Ok(task)
    }

    async fn insert_with_id(&mut self, task: Task) -> Result<()> {
        let mut inner = self.lock().await;

        if inner.position_of(task.id).is_some() {
            return Err(Error::DuplicateTask(task.id));
        }

        inner.bump_counter_past(task.id);
        tracing::debug!(id = %task.id, "re-inserted task with explicit id");

        // Rows stay id-ascending (ids are autoincrement), so the
        // restored row returns to its original position in row order.
        let idx = inner.rows.partition_point(|row| row.id < task.id);
        inner.rows.insert(idx, task);

        Ok(())
    }

    async fn update(&mut self, id: TaskId, fields: TaskFields) -> Result<Task> {
        if fields.priority > MAX_PRIORITY {
            return Err(Error::InvalidPriority(fields.priority));
        }
        fields
            .validate()
            .map_err(|e| Error::Storage(format!("Validation failed: {}", e)))?;

        let mut inner = self.lock().await;
        let idx = inner.position_of(id).ok_or(Error::TaskNotFound(id))?;

        let task = Task::from_fields(id, fields);
        inner.rows[idx] = task.clone();

        tracing::debug!(id = %id, status = %task.status, "updated task");
        Ok(task)
    }

    async fn delete(&mut self, id: TaskId) -> Result<()> {
        let mut inner = self.lock().await;
        let idx = inner.position_of(id).ok_or(Error::TaskNotFound(id))?;
        inner.rows.remove(idx);

        tracing::debug!(id = %id, "deleted task");
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        // No backing file for the plain in-memory store
        Ok(())
    }

    async fn reload(&mut self) -> Result<()> {
        // No backing file to reload from
        Ok(())
    }
}
