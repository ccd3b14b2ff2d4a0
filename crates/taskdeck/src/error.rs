//! Error types for taskdeck operations.

use crate::domain::TaskId;
use std::io;
use thiserror::Error;

/// The error type for taskdeck operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Task not found in the store.
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// A task with this id already exists (only possible via
    /// `insert_with_id`, i.e. undo-of-delete).
    #[error("Task already exists: {0}")]
    DuplicateTask(TaskId),

    /// Priority outside the valid 0-5 range.
    #[error("Invalid priority {0}: must be between 0 and 5")]
    InvalidPriority(u8),
}

/// A specialized Result type for taskdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
