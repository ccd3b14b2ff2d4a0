//! Output formatting for CLI commands.
//!
//! Human-readable text and JSON output modes, with a semantic color
//! theme:
//!   - Success/Done:   green  (complete status)
//!   - Warning/Active: yellow (in progress, high priority)
//!   - Error/Urgent:   red    (overdue, top priority)
//!   - Muted:          dimmed (field labels, empty values)

pub mod color;

use std::env;
use std::io::{self, Write};

use serde::Serialize;

use crate::core::{DueStatus, Reminder};
use crate::domain::Task;
use color::{colorize_due, colorize_id, colorize_priority, colorize_status, dimmed};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic use
    Json,
}

/// Settings that control how text output is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Read settings from environment variables.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/) and
    /// `TASKDECK_COLOR=0`/`false` for explicit control.
    pub fn from_env() -> Self {
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("TASKDECK_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Print a serializable value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Print a one-line-per-task listing.
pub fn print_task_list(tasks: &[Task], config: &OutputConfig) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    for task in tasks {
        println!("{}", format_task_line(task, config));
    }
    println!();
    println!("{} task(s)", tasks.len());
}

/// One summary line: id, priority, status, title, due date.
pub fn format_task_line(task: &Task, config: &OutputConfig) -> String {
    let due = if task.due_date.is_empty() {
        dimmed("no due date", config)
    } else {
        format!("due {}", task.due_date)
    };

    format!(
        "{:>4}  {}  {:<12} {}  ({})",
        colorize_id(task.id, config),
        colorize_priority(task.priority, config),
        colorize_status(task.status, config),
        task.title,
        due
    )
}

/// Print the full field set of one task.
pub fn print_task_details(task: &Task, dependencies: &[String], config: &OutputConfig) {
    println!("Task {}", colorize_id(task.id, config));
    println!("  {}       {}", dimmed("Title:", config), task.title);
    println!(
        "  {}      {}",
        dimmed("Status:", config),
        colorize_status(task.status, config)
    );
    println!(
        "  {}    {}",
        dimmed("Priority:", config),
        colorize_priority(task.priority, config)
    );
    println!(
        "  {}    {}",
        dimmed("Due date:", config),
        if task.due_date.is_empty() {
            dimmed("(none)", config)
        } else {
            task.due_date.clone()
        }
    );

    if !task.description.is_empty() {
        println!("  {} {}", dimmed("Description:", config), task.description);
    }

    let sub_tasks = task.sub_task_names();
    if !sub_tasks.is_empty() {
        println!("  {}   {}", dimmed("Sub-tasks:", config), sub_tasks.join(", "));
    }

    if !dependencies.is_empty() {
        println!(
            "  {}  {}",
            dimmed("Depends on:", config),
            dependencies.join(", ")
        );
    }
}

/// Print the reminders view, grouped by urgency.
pub fn print_reminders(reminders: &[Reminder], config: &OutputConfig) {
    if reminders.is_empty() {
        println!("Nothing due or overdue.");
        return;
    }

    for status in [DueStatus::Overdue, DueStatus::DueToday, DueStatus::DueTomorrow] {
        let group: Vec<&Reminder> = reminders.iter().filter(|r| r.status == status).collect();
        if group.is_empty() {
            continue;
        }
        println!("{}", colorize_due(status, config));
        for reminder in group {
            println!("  {}", format_task_line(&reminder.task, config));
        }
    }
}
