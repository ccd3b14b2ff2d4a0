//! Domain types for task tracking.
//!
//! This module contains the core domain types for the taskdeck tracker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum valid priority.
pub const MIN_PRIORITY: u8 = 0;

/// Maximum valid priority.
pub const MAX_PRIORITY: u8 = 5;

/// Maximum title length accepted by validation.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Date format used by the `due_date` field.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for a task, assigned by the store on insert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Create a new task ID.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Status of a task.
///
/// The serialized strings match the store's wire format (`pending`,
/// `in progress`, `complete`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has not been started.
    #[default]
    #[serde(rename = "pending")]
    Pending,

    /// Task is currently being worked on.
    #[serde(rename = "in progress")]
    InProgress,

    /// Task has been finished.
    #[serde(rename = "complete")]
    Complete,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

/// A single to-do record.
///
/// Tasks are immutable value data passed by clone between components.
/// The Task Cache owns the authoritative in-memory copy; the store owns
/// the durable copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store.
    pub id: TaskId,

    /// Task title (non-empty for valid tasks).
    pub title: String,

    /// Free-text description; may be empty.
    pub description: String,

    /// Due date in `YYYY-MM-DD` form; may be empty or unparsable.
    pub due_date: String,

    /// Comma-separated sub-item names; may be empty.
    pub sub_tasks: String,

    /// Priority level (0 = lowest, 5 = highest).
    pub priority: u8,

    /// Current status.
    pub status: TaskStatus,
}

impl Task {
    /// Build a task from an id and a field bundle.
    #[must_use]
    pub fn from_fields(id: TaskId, fields: TaskFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            sub_tasks: fields.sub_tasks,
            priority: fields.priority,
            status: fields.status,
        }
    }

    /// The non-id fields of this task, as used by `update`.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            sub_tasks: self.sub_tasks.clone(),
            priority: self.priority,
            status: self.status,
        }
    }

    /// Due date parsed as a calendar date, or `None` when empty or
    /// unparsable. A missing date is never an error (it just sorts
    /// last in recommendations).
    #[must_use]
    pub fn parsed_due_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.due_date, DUE_DATE_FORMAT).ok()
    }

    /// Sub-task names split on commas, skipping empty entries.
    #[must_use]
    pub fn sub_task_names(&self) -> Vec<&str> {
        self.sub_tasks
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Whether this is the "not found" placeholder returned by cache
    /// lookups for a stale id. Valid tasks always have a title.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// The non-id field bundle consumed by `insert(fields)` and
/// `update(id, fields)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    /// Task title (required).
    pub title: String,

    /// Free-text description.
    pub description: String,

    /// Due date in `YYYY-MM-DD` form.
    pub due_date: String,

    /// Comma-separated sub-item names.
    pub sub_tasks: String,

    /// Priority level (0-5).
    pub priority: u8,

    /// Status the record should carry.
    pub status: TaskStatus,
}

impl TaskFields {
    /// Validate the field bundle before it reaches a store mutation.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field when the title is
    /// empty or the priority is outside 0-5.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.title.len() > MAX_TITLE_LENGTH {
            return Err(format!(
                "title cannot exceed {MAX_TITLE_LENGTH} characters"
            ));
        }
        if self.priority > MAX_PRIORITY {
            return Err(format!(
                "priority {} is out of range {}-{}",
                self.priority, MIN_PRIORITY, MAX_PRIORITY
            ));
        }
        Ok(())
    }
}
