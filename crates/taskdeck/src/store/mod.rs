//! Store abstraction layer for taskdeck.
//!
//! This module provides the core store trait and the factory for
//! creating store backends:
//!
//! - **In-memory**: fast, ephemeral row store
//! - **JSONL**: the in-memory store wrapped with file persistence
//!
//! # Architecture
//!
//! The store plays the role of the external persistence layer: a table
//! of task rows keyed by id. The core never reaches for a global
//! database handle; it receives a `Box<dyn TaskStore>` and issues
//! blocking (awaited) calls against it. The trait is object-safe so
//! callers can stay backend-agnostic.
//!
//! # Example
//!
//! ```no_run
//! use taskdeck::store::{create_store, StoreBackend, TaskStore};
//! use taskdeck::domain::TaskFields;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut store = create_store(StoreBackend::InMemory).await?;
//!
//!     let task = store
//!         .insert(TaskFields {
//!             title: "Write report".to_string(),
//!             priority: 3,
//!             ..TaskFields::default()
//!         })
//!         .await?;
//!     println!("Created task {}", task.id);
//!
//!     Ok(())
//! }
//! ```

use crate::domain::{Task, TaskFields, TaskId};
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod in_memory;

/// Core store trait for task persistence.
///
/// Implementations must be `Send + Sync`. Row order matters:
/// `select_all` returns rows in the store's natural order (insertion
/// order for the bundled backends), because the Task Cache mirrors it
/// without sorting.
///
/// # Error Handling
///
/// Mutating methods return `Error::TaskNotFound`, `Error::DuplicateTask`
/// or `Error::Storage`; the caller surfaces failures without retrying,
/// and records nothing in the undo log for a failed write.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All task rows in natural row order.
    async fn select_all(&self) -> Result<Vec<Task>>;

    /// A single row by id, or `None` when absent.
    async fn select_by_id(&self, id: TaskId) -> Result<Option<Task>>;

    /// Insert a new row; the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` when validation fails or
    /// `Error::InvalidPriority` for an out-of-range priority.
    async fn insert(&mut self, fields: TaskFields) -> Result<Task>;

    /// Re-insert a full row including its id.
    ///
    /// Used only by undo-of-delete, which must recreate the row with
    /// its original id and field values.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateTask` if the id is already present.
    async fn insert_with_id(&mut self, task: Task) -> Result<()>;

    /// Overwrite every non-id field of the row with the given bundle.
    ///
    /// # Errors
    ///
    /// Returns `Error::TaskNotFound` if the row doesn't exist.
    async fn update(&mut self, id: TaskId, fields: TaskFields) -> Result<Task>;

    /// Delete a row.
    ///
    /// # Errors
    ///
    /// Returns `Error::TaskNotFound` if the row doesn't exist.
    async fn delete(&mut self, id: TaskId) -> Result<()>;

    /// Persist current state. No-op for the plain in-memory backend.
    async fn save(&self) -> Result<()>;

    /// Reload state from persistent storage, discarding in-memory
    /// changes. No-op for the plain in-memory backend.
    async fn reload(&mut self) -> Result<()>;
}

/// Store backend configuration.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// In-memory store (ephemeral).
    InMemory,

    /// JSONL file store (persistent).
    Jsonl(PathBuf),
}

impl StoreBackend {
    /// Returns the data file path for file-based backends.
    #[must_use]
    pub fn data_path(&self) -> Option<&Path> {
        match self {
            StoreBackend::Jsonl(path) => Some(path),
            StoreBackend::InMemory => None,
        }
    }
}

/// Wrapper that adds JSONL file persistence to the in-memory store.
///
/// `save()` writes all rows to the JSONL file atomically; `reload()`
/// re-reads the file and replaces the inner store.
struct JsonlBackedStore {
    inner: Box<dyn TaskStore>,
    path: PathBuf,
}

#[async_trait]
impl TaskStore for JsonlBackedStore {
    async fn select_all(&self) -> Result<Vec<Task>> {
        self.inner.select_all().await
    }

    async fn select_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        self.inner.select_by_id(id).await
    }

    async fn insert(&mut self, fields: TaskFields) -> Result<Task> {
        self.inner.insert(fields).await
    }

    async fn insert_with_id(&mut self, task: Task) -> Result<()> {
        self.inner.insert_with_id(task).await
    }

    async fn update(&mut self, id: TaskId, fields: TaskFields) -> Result<Task> {
        self.inner.update(id, fields).await
    }

    async fn delete(&mut self, id: TaskId) -> Result<()> {
        self.inner.delete(id).await
    }

    async fn save(&self) -> Result<()> {
        in_memory::save_to_jsonl(self.inner.as_ref(), &self.path).await
    }

    async fn reload(&mut self) -> Result<()> {
        if self.path.exists() {
            let (new_store, warnings) = in_memory::load_from_jsonl(&self.path).await?;
            for warning in &warnings {
                tracing::warn!(warning = ?warning, "JSONL reload warning");
            }
            self.inner = new_store;
        } else {
            // File vanished - reset to an empty store
            self.inner = in_memory::new_in_memory_store();
        }
        Ok(())
    }
}

/// Create a store instance for the given backend.
///
/// # Errors
///
/// - `Error::Io` if file operations fail (JSONL backend)
/// - `Error::Storage` for backend-specific load errors
pub async fn create_store(backend: StoreBackend) -> Result<Box<dyn TaskStore>> {
    match backend {
        StoreBackend::InMemory => Ok(in_memory::new_in_memory_store()),
        StoreBackend::Jsonl(path) => {
            let inner = if path.exists() {
                let (store, warnings) = in_memory::load_from_jsonl(&path).await?;
                for warning in &warnings {
                    // Non-fatal: the store is still usable
                    tracing::warn!(warning = ?warning, "JSONL load warning");
                }
                store
            } else {
                // First run - start empty, save() will create the file
                in_memory::new_in_memory_store()
            };
            Ok(Box::new(JsonlBackedStore { inner, path }))
        }
    }
}
