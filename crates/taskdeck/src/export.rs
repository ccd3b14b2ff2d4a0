//! JSON export of the full task set.
//!
//! Produces a single nested document, `{"tasks": [...]}`, rather than
//! the line-oriented storage format; the export is meant for other
//! tools, not for reloading.

use std::path::Path;

use serde::Serialize;

use crate::domain::Task;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    tasks: &'a [Task],
}

/// Render the task list as a pretty-printed JSON document.
pub fn to_json(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ExportDocument { tasks })?)
}

/// Write the JSON document to a file, replacing any existing content.
pub fn write_json(tasks: &[Task], path: &Path) -> Result<()> {
    let json = to_json(tasks)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), count = tasks.len(), "exported tasks");
    Ok(())
}
