//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for taskdeck using
//! clap's derive API. Each command has its own argument struct with
//! validation and helpful error messages.
//!
//! # Commands
//!
//! - `init`: Initialize a new taskdeck repository
//! - `add`: Add a new task
//! - `list`: List tasks, optionally sorted or filtered
//! - `show`: Show task details including inferred dependencies
//! - `status`: Change a task's status
//! - `delete`: Delete a task (reversible with undo)
//! - `undo` / `redo`: Reverse or re-apply the last mutation
//! - `next`: Recommend tasks that are ready to work on
//! - `search`: Find tasks by title or description text
//! - `reminders`: Show overdue and upcoming tasks
//! - `export`: Export all tasks as a JSON document
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! taskdeck add "Write the report" --due 2025-09-12 --priority 4
//! taskdeck status 3 in_progress
//! taskdeck next --limit 3
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{
    AddArgs, DeleteArgs, ExportArgs, InitArgs, ListArgs, NextArgs, RemindersArgs, SearchArgs,
    ShowArgs, StatusArgs,
};

// Re-export types
pub use types::{SortOrderArg, TaskStatusArg};

// Re-export validators for external use
pub use validators::{validate_due_date, validate_task_id, validate_title};

/// Taskdeck - A personal task tracker
///
/// Tracks tasks, infers dependencies from task descriptions, and
/// recommends what to work on next. Tasks are stored in
/// `.taskdeck/tasks.jsonl` for easy version control integration.
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new taskdeck repository
    ///
    /// Creates the `.taskdeck/` directory with configuration and an
    /// empty task database. Run this once in your project root.
    Init(InitArgs),

    /// Add a new task
    ///
    /// New tasks start in the pending status. Mention another task's
    /// title in the description to record a dependency on it.
    Add(AddArgs),

    /// List tasks
    ///
    /// Shows all tasks in row order by default; `--sort` orders by
    /// deadline or priority instead.
    List(ListArgs),

    /// Show detailed information about a task
    ///
    /// Displays all fields plus the tasks it depends on.
    Show(ShowArgs),

    /// Change a task's status
    ///
    /// The change is recorded in the undo log.
    Status(StatusArgs),

    /// Delete a task
    ///
    /// The deleted task can be restored with `undo`, keeping its
    /// original id.
    Delete(DeleteArgs),

    /// Reverse the most recent status change or deletion
    Undo,

    /// Re-apply the most recently undone change
    Redo,

    /// Recommend tasks that are ready to work on
    ///
    /// A task is ready when it is not complete and every task it
    /// depends on is complete. Results are ranked by priority, then
    /// due date.
    Next(NextArgs),

    /// Find tasks by title or description text
    Search(SearchArgs),

    /// Show overdue and upcoming tasks
    ///
    /// Lists open tasks that are overdue, due today, or due tomorrow.
    Reminders(RemindersArgs),

    /// Export all tasks as a JSON document
    Export(ExportArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Init(args)) => execute::execute_init(args).await,
            Some(Commands::Add(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_add(&mut app, args, output_mode).await
            }
            Some(Commands::List(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_list(&app, args, output_mode).await
            }
            Some(Commands::Show(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_show(&app, args, output_mode).await
            }
            Some(Commands::Status(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_status(&mut app, args, output_mode).await
            }
            Some(Commands::Delete(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_delete(&mut app, args, output_mode).await
            }
            Some(Commands::Undo) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_undo(&mut app, output_mode).await
            }
            Some(Commands::Redo) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_redo(&mut app, output_mode).await
            }
            Some(Commands::Next(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_next(&app, args, output_mode).await
            }
            Some(Commands::Search(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_search(&app, args, output_mode).await
            }
            Some(Commands::Reminders(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_reminders(&app, args, output_mode).await
            }
            Some(Commands::Export(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_export(&app, args, output_mode).await
            }
            None => {
                println!("Taskdeck task tracker");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["taskdeck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_global_json_flag() {
        let cli = Cli::try_parse_from(["taskdeck", "--json", "list"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn test_parse_init_quiet() {
        let cli = Cli::try_parse_from(["taskdeck", "init", "-q"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => assert!(args.quiet),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_parse_add_minimal() {
        let cli = Cli::try_parse_from(["taskdeck", "add", "Fix bug"]).unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.title, "Fix bug");
                assert_eq!(args.priority, 2); // default
                assert!(args.description.is_empty());
                assert!(args.due.is_empty());
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_add_full() {
        let cli = Cli::try_parse_from([
            "taskdeck",
            "add",
            "Build",
            "--description",
            "depends on Design",
            "--due",
            "2025-09-12",
            "--priority",
            "4",
            "--sub-tasks",
            "scaffold, wire up",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.title, "Build");
                assert_eq!(args.description, "depends on Design");
                assert_eq!(args.due, "2025-09-12");
                assert_eq!(args.priority, 4);
                assert_eq!(args.sub_tasks, "scaffold, wire up");
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_add_invalid_priority() {
        let result = Cli::try_parse_from(["taskdeck", "add", "t", "--priority", "6"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_add_invalid_due_date() {
        let result = Cli::try_parse_from(["taskdeck", "add", "t", "--due", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list_default() {
        let cli = Cli::try_parse_from(["taskdeck", "list"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert!(args.sort.is_none());
                assert!(args.status.is_none());
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_list_sorted_by_deadline() {
        let cli = Cli::try_parse_from(["taskdeck", "list", "--sort", "deadline"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.sort, Some(SortOrderArg::Deadline));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_list_status_filter_alias() {
        let cli = Cli::try_parse_from(["taskdeck", "list", "--status", "in-progress"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.status, Some(TaskStatusArg::InProgress));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["taskdeck", "show", "7"]).unwrap();
        match cli.command {
            Some(Commands::Show(args)) => assert_eq!(args.id, TaskId::new(7)),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_show_invalid_id() {
        let result = Cli::try_parse_from(["taskdeck", "show", "zero"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_status() {
        let cli = Cli::try_parse_from(["taskdeck", "status", "3", "in_progress"]).unwrap();
        match cli.command {
            Some(Commands::Status(args)) => {
                assert_eq!(args.id, TaskId::new(3));
                assert_eq!(args.status, TaskStatusArg::InProgress);
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_parse_status_invalid_value() {
        let result = Cli::try_parse_from(["taskdeck", "status", "3", "paused"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_delete() {
        let cli = Cli::try_parse_from(["taskdeck", "delete", "4"]).unwrap();
        match cli.command {
            Some(Commands::Delete(args)) => assert_eq!(args.id, TaskId::new(4)),
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_parse_undo_redo() {
        let cli = Cli::try_parse_from(["taskdeck", "undo"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Undo)));

        let cli = Cli::try_parse_from(["taskdeck", "redo"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Redo)));
    }

    #[test]
    fn test_parse_next_default_limit() {
        let cli = Cli::try_parse_from(["taskdeck", "next"]).unwrap();
        match cli.command {
            Some(Commands::Next(args)) => assert_eq!(args.limit, None),
            _ => panic!("Expected Next command"),
        }
    }

    #[test]
    fn test_parse_next_with_limit() {
        let cli = Cli::try_parse_from(["taskdeck", "next", "-n", "3"]).unwrap();
        match cli.command {
            Some(Commands::Next(args)) => assert_eq!(args.limit, Some(3)),
            _ => panic!("Expected Next command"),
        }
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["taskdeck", "search", "report"]).unwrap();
        match cli.command {
            Some(Commands::Search(args)) => assert_eq!(args.query, "report"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_parse_reminders_with_date() {
        let cli = Cli::try_parse_from(["taskdeck", "reminders", "--date", "2025-06-15"]).unwrap();
        match cli.command {
            Some(Commands::Reminders(args)) => {
                assert_eq!(args.date, Some("2025-06-15".to_string()));
            }
            _ => panic!("Expected Reminders command"),
        }
    }

    #[test]
    fn test_parse_export_to_file() {
        let cli = Cli::try_parse_from(["taskdeck", "export", "--output", "tasks.json"]).unwrap();
        match cli.command {
            Some(Commands::Export(args)) => {
                assert_eq!(args.output.unwrap().to_str().unwrap(), "tasks.json");
            }
            _ => panic!("Expected Export command"),
        }
    }
}
