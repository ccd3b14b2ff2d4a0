//! JSONL persistence for the in-memory store.
//!
//! One serialized `Task` per line. Loading is resilient: malformed
//! lines, duplicate ids and invalid task data are skipped with a
//! [`LoadWarning`] instead of failing the whole load.

use super::inner::InMemoryStoreInner;
use crate::domain::{Task, TaskId};
use crate::error::{Error, Result};
use crate::store::TaskStore;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use taskdeck_jsonl::{read_jsonl_resilient, write_jsonl_atomic, Warning as JsonlWarning};
use tokio::sync::Mutex;

/// Warnings that can occur during JSONL file loading.
///
/// These are non-fatal: loading continues, but the offending record is
/// skipped. Applications should log them, since they indicate data
/// that was hand-edited or corrupted.
#[derive(Debug, Clone)]
pub enum LoadWarning {
    /// Malformed JSON line that couldn't be parsed. The line is
    /// skipped entirely.
    MalformedJson {
        /// 1-based line number of the bad line.
        line_number: usize,
        /// Parser error text.
        error: String,
    },

    /// Two rows carried the same id; the later row is skipped.
    DuplicateId {
        /// The id that appeared more than once.
        id: TaskId,
    },

    /// Task data failed validation (empty title, out-of-range
    /// priority). The row is skipped.
    InvalidTaskData {
        /// Id of the invalid row.
        id: TaskId,
        /// Validation error text.
        error: String,
    },
}

/// Load a store from a JSONL file.
///
/// Row order in the file becomes the store's natural row order. The id
/// counter resumes past the highest id seen, so fresh inserts never
/// collide with loaded rows.
///
/// # Errors
///
/// Returns an error only when the file itself cannot be read; bad
/// records become warnings.
pub async fn load_from_jsonl(path: &Path) -> Result<(Box<dyn TaskStore>, Vec<LoadWarning>)> {
    let (tasks, jsonl_warnings) =
        read_jsonl_resilient::<Task, _>(path)
            .await
            .map_err(|e| match e {
                taskdeck_jsonl::Error::Io(io_err) => Error::Io(io_err),
                taskdeck_jsonl::Error::Json(json_err) => Error::Json(json_err),
                taskdeck_jsonl::Error::InvalidFormat(msg) => Error::Storage(msg),
            })?;

    let mut warnings = Vec::new();
    for warning in jsonl_warnings {
        match warning {
            JsonlWarning::MalformedJson { line_number, error }
            | JsonlWarning::SkippedLine {
                line_number,
                reason: error,
            } => {
                warnings.push(LoadWarning::MalformedJson { line_number, error });
            }
        }
    }

    let mut inner = InMemoryStoreInner::new();
    let mut seen: HashSet<TaskId> = HashSet::new();

    for task in tasks {
        if !seen.insert(task.id) {
            warnings.push(LoadWarning::DuplicateId { id: task.id });
            continue;
        }
        if let Err(validation_error) = task.fields().validate() {
            warnings.push(LoadWarning::InvalidTaskData {
                id: task.id,
                error: validation_error,
            });
            continue;
        }

        inner.bump_counter_past(task.id);
        inner.rows.push(task);
    }

    Ok((Box::new(Arc::new(Mutex::new(inner))), warnings))
}

/// Save a store to a JSONL file with an atomic write.
///
/// # Errors
///
/// Returns an error if reading the store or writing the file fails;
/// on failure the original file is left unchanged.
pub async fn save_to_jsonl(store: &dyn TaskStore, path: &Path) -> Result<()> {
    let rows = store.select_all().await?;

    write_jsonl_atomic(path, &rows)
        .await
        .map_err(|e| match e {
            taskdeck_jsonl::Error::Io(io_err) => Error::Io(io_err),
            taskdeck_jsonl::Error::Json(json_err) => Error::Json(json_err),
            taskdeck_jsonl::Error::InvalidFormat(msg) => Error::Storage(msg),
        })?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "saved task store");
    Ok(())
}
