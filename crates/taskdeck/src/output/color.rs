//! Color and styling helpers for CLI output.

use colored::Colorize;

use super::OutputConfig;
use crate::core::DueStatus;
use crate::domain::{TaskId, TaskStatus};

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply muted styling to text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Colorize a task id (cyan).
pub(crate) fn colorize_id(id: TaskId, config: &OutputConfig) -> String {
    let text = format!("#{id}");
    if !config.use_colors {
        return text;
    }
    text.cyan().to_string()
}

/// Apply color to status text based on task status.
pub(crate) fn colorize_status(status: TaskStatus, config: &OutputConfig) -> String {
    let text = format!("{status}");
    if !config.use_colors {
        return text;
    }
    match status {
        TaskStatus::Pending => text.white().to_string(),
        TaskStatus::InProgress => text.yellow().to_string(),
        TaskStatus::Complete => text.green().to_string(),
    }
}

/// Apply color to priority text. Higher priorities are hotter.
pub(crate) fn colorize_priority(priority: u8, config: &OutputConfig) -> String {
    let text = format!("P{priority}");
    if !config.use_colors {
        return text;
    }
    match priority {
        5 => text.red().bold().to_string(),
        4 => text.yellow().to_string(),
        _ => text.to_string(),
    }
}

/// Section header for a reminder group.
pub(crate) fn colorize_due(status: DueStatus, config: &OutputConfig) -> String {
    let text = format!("{}:", status.label());
    if !config.use_colors {
        return text;
    }
    match status {
        DueStatus::Overdue => text.red().bold().to_string(),
        DueStatus::DueToday => text.yellow().to_string(),
        DueStatus::DueTomorrow => text.to_string(),
    }
}
