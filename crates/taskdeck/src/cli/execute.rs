//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;
use chrono::NaiveDate;

use super::args::{
    AddArgs, DeleteArgs, ExportArgs, InitArgs, ListArgs, NextArgs, RemindersArgs, SearchArgs,
    ShowArgs, StatusArgs,
};
use super::types::SortOrderArg;
use crate::app::App;
use crate::core::{ChangeKind, UndoOutcome};
use crate::domain::{Task, TaskFields, TaskStatus, DUE_DATE_FORMAT};
use crate::export;
use crate::output::{self, OutputConfig, OutputMode};

/// Execute the init command
pub async fn execute_init(args: &InitArgs) -> Result<()> {
    use crate::commands::init;

    let current_dir = std::env::current_dir()?;
    let result = init::init(&current_dir).await?;

    if !args.quiet {
        println!("Initialized taskdeck in {}", result.taskdeck_dir.display());
        println!("  Config: {}", result.config_file.display());
        println!("  Tasks:  {}", result.tasks_file.display());
    }

    Ok(())
}

/// Execute the add command
pub async fn execute_add(app: &mut App, args: &AddArgs, output_mode: OutputMode) -> Result<()> {
    let fields = TaskFields {
        title: args.title.clone(),
        description: args.description.clone(),
        due_date: args.due.clone(),
        sub_tasks: args.sub_tasks.clone(),
        priority: args.priority,
        status: TaskStatus::Pending,
    };

    let task = app.tracker_mut().add_task(fields).await?;
    app.save_history().await?;

    match output_mode {
        OutputMode::Json => output::print_json(&task)?,
        OutputMode::Text => {
            println!("Added task #{}: {}", task.id, task.title);
        }
    }

    Ok(())
}

/// Execute the list command
pub async fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let tracker = app.tracker();

    let mut tasks: Vec<Task> = match args.sort {
        Some(SortOrderArg::Deadline) => tracker.tasks_by_deadline(),
        Some(SortOrderArg::Priority) => tracker.tasks_by_priority(),
        None => tracker.tasks().to_vec(),
    };

    if let Some(status) = args.status {
        let wanted = TaskStatus::from(status);
        tasks.retain(|task| task.status == wanted);
    }

    match output_mode {
        OutputMode::Json => output::print_json(&tasks)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            output::print_task_list(&tasks, &config);
        }
    }

    Ok(())
}

/// Execute the show command
pub async fn execute_show(app: &App, args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let tracker = app.tracker();

    let task = tracker.find_task(args.id);
    if task.is_empty() {
        anyhow::bail!("Task #{} not found", args.id);
    }

    let dependencies: Vec<String> = tracker
        .dependencies_of(args.id)
        .into_iter()
        .map(|dep_id| {
            let dep = tracker.find_task(dep_id);
            format!("#{dep_id} ({})", dep.title)
        })
        .collect();

    match output_mode {
        OutputMode::Json => output::print_json(&serde_json::json!({
            "task": task,
            "depends_on": tracker.dependencies_of(args.id),
        }))?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            output::print_task_details(&task, &dependencies, &config);
        }
    }

    Ok(())
}

/// Execute the status command
pub async fn execute_status(app: &mut App, args: &StatusArgs, output_mode: OutputMode) -> Result<()> {
    let updated = app
        .tracker_mut()
        .set_status(args.id, args.status.into())
        .await?;
    app.save_history().await?;

    match output_mode {
        OutputMode::Json => output::print_json(&updated)?,
        OutputMode::Text => {
            println!("Task #{} is now {}", updated.id, updated.status);
        }
    }

    Ok(())
}

/// Execute the delete command
pub async fn execute_delete(app: &mut App, args: &DeleteArgs, output_mode: OutputMode) -> Result<()> {
    let deleted = app.tracker_mut().delete_task(args.id).await?;
    app.save_history().await?;

    match output_mode {
        OutputMode::Json => output::print_json(&deleted)?,
        OutputMode::Text => {
            println!("Deleted task #{}: {} (restore with 'taskdeck undo')", deleted.id, deleted.title);
        }
    }

    Ok(())
}

/// Execute the undo command
pub async fn execute_undo(app: &mut App, output_mode: OutputMode) -> Result<()> {
    let outcome = app.tracker_mut().undo().await?;
    app.save_history().await?;
    report_outcome(outcome, "undo", output_mode)
}

/// Execute the redo command
pub async fn execute_redo(app: &mut App, output_mode: OutputMode) -> Result<()> {
    let outcome = app.tracker_mut().redo().await?;
    app.save_history().await?;
    report_outcome(outcome, "redo", output_mode)
}

fn report_outcome(outcome: UndoOutcome, verb: &str, output_mode: OutputMode) -> Result<()> {
    match outcome {
        UndoOutcome::Applied(record) => {
            let kind = match record.kind {
                ChangeKind::Update => "update",
                ChangeKind::Delete => "delete",
            };
            match output_mode {
                OutputMode::Json => output::print_json(&serde_json::json!({
                    "outcome": "applied",
                    "kind": kind,
                    "task": record.snapshot,
                }))?,
                OutputMode::Text => {
                    println!(
                        "Reversed {kind} of task #{} ({})",
                        record.snapshot.id, record.snapshot.title
                    );
                }
            }
        }
        UndoOutcome::Empty => match output_mode {
            OutputMode::Json => {
                output::print_json(&serde_json::json!({ "outcome": "empty" }))?;
            }
            OutputMode::Text => println!("Nothing to {verb}."),
        },
    }
    Ok(())
}

/// Execute the next command
pub async fn execute_next(app: &App, args: &NextArgs, output_mode: OutputMode) -> Result<()> {
    let limit = args.limit.unwrap_or(app.config().recommendation_limit);
    let recommended = app.tracker().recommendations_up_to(limit);

    match output_mode {
        OutputMode::Json => output::print_json(&recommended)?,
        OutputMode::Text => {
            if recommended.is_empty() {
                println!("No tasks are ready to work on.");
            } else {
                let config = OutputConfig::from_env();
                println!("Up next:");
                output::print_task_list(&recommended, &config);
            }
        }
    }

    Ok(())
}

/// Execute the search command
pub async fn execute_search(app: &App, args: &SearchArgs, output_mode: OutputMode) -> Result<()> {
    let hits = app.tracker().search(&args.query);

    match output_mode {
        OutputMode::Json => output::print_json(&hits)?,
        OutputMode::Text => {
            if hits.is_empty() {
                println!("No tasks match '{}'.", args.query);
            } else {
                let config = OutputConfig::from_env();
                output::print_task_list(&hits, &config);
            }
        }
    }

    Ok(())
}

/// Execute the reminders command
pub async fn execute_reminders(
    app: &App,
    args: &RemindersArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let today = match &args.date {
        Some(date) => NaiveDate::parse_from_str(date, DUE_DATE_FORMAT)?,
        None => chrono::Local::now().date_naive(),
    };

    let reminders = app.tracker().reminders(today);

    match output_mode {
        OutputMode::Json => {
            let entries: Vec<serde_json::Value> = reminders
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "status": r.status.label(),
                        "task": r.task,
                    })
                })
                .collect();
            output::print_json(&entries)?;
        }
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            output::print_reminders(&reminders, &config);
        }
    }

    Ok(())
}

/// Execute the export command
pub async fn execute_export(app: &App, args: &ExportArgs, output_mode: OutputMode) -> Result<()> {
    let tasks = app.tracker().tasks();

    match &args.output {
        Some(path) => {
            export::write_json(tasks, path)?;
            if output_mode == OutputMode::Text {
                println!("Exported {} task(s) to {}", tasks.len(), path.display());
            }
        }
        None => {
            println!("{}", export::to_json(tasks)?);
        }
    }

    Ok(())
}
