//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;
use std::path::PathBuf;

use super::types::{SortOrderArg, TaskStatusArg};
use super::validators::{validate_due_date, validate_task_id, validate_title};
use crate::domain::{TaskId, MAX_PRIORITY, MIN_PRIORITY};

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `add` command
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Task title (maximum 200 characters)
    #[arg(value_parser = validate_title)]
    pub title: String,

    /// Free-text description
    ///
    /// Mentioning another task's title here makes this task depend on
    /// it for recommendation purposes.
    #[arg(short = 'D', long, default_value = "")]
    pub description: String,

    /// Due date (YYYY-MM-DD)
    #[arg(short, long, value_parser = validate_due_date, default_value = "")]
    pub due: String,

    /// Sub-task names (comma-separated)
    #[arg(long, default_value = "")]
    pub sub_tasks: String,

    /// Priority level (0=lowest, 5=highest)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(MIN_PRIORITY as i64..=MAX_PRIORITY as i64), default_value = "2")]
    pub priority: u8,
}

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone, Default)]
pub struct ListArgs {
    /// Sort order (default: row order)
    #[arg(long, value_enum)]
    pub sort: Option<SortOrderArg>,

    /// Filter by status
    #[arg(short, long, value_enum)]
    pub status: Option<TaskStatusArg>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Task id to display
    #[arg(value_parser = validate_task_id)]
    pub id: TaskId,
}

/// Arguments for the `status` command
#[derive(Parser, Debug, Clone)]
pub struct StatusArgs {
    /// Task id to update
    #[arg(value_parser = validate_task_id)]
    pub id: TaskId,

    /// New status
    #[arg(value_enum)]
    pub status: TaskStatusArg,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// Task id to delete
    ///
    /// Deletion is reversible with `undo`.
    #[arg(value_parser = validate_task_id)]
    pub id: TaskId,
}

/// Arguments for the `next` command
#[derive(Parser, Debug, Clone)]
pub struct NextArgs {
    /// Maximum number of tasks to recommend (defaults to the
    /// `recommendation-limit` config value)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the `search` command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Text to look for in titles and descriptions (case-insensitive)
    pub query: String,
}

/// Arguments for the `reminders` command
#[derive(Parser, Debug, Clone, Default)]
pub struct RemindersArgs {
    /// Reference date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = validate_due_date)]
    pub date: Option<String>,
}

/// Arguments for the `export` command
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path; omit to print to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
