//! Application context for CLI command execution.
//!
//! Discovers the `.taskdeck/` directory, loads configuration and opens
//! the tracker over the configured store.

use crate::commands::init::{
    find_taskdeck_root, TaskdeckConfig, CONFIG_FILE_NAME, HISTORY_FILE_NAME, TASKDECK_DIR_NAME,
};
use crate::core::{ActionLog, Tracker};
use crate::error::{Error, Result};
use crate::store::create_store;
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
///
/// Owns the tracker and remembers where the repository lives.
pub struct App {
    tracker: Tracker,
    taskdeck_dir: PathBuf,
    config: TaskdeckConfig,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("taskdeck_dir", &self.taskdeck_dir)
            .field("config", &self.config)
            .field("tracker", &"<Tracker>")
            .finish()
    }
}

impl App {
    /// Create an App instance from the given working directory.
    ///
    /// Searches up the directory tree for a `.taskdeck/` directory,
    /// loads configuration and opens the store.
    ///
    /// # Errors
    ///
    /// Returns an error if no taskdeck repository is found, the
    /// configuration cannot be loaded, or the store fails to open.
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_taskdeck_root(working_dir).ok_or_else(|| {
            Error::Config(
                "Not a taskdeck repository (or any parent). Run 'taskdeck init' first.".to_string(),
            )
        })?;

        let taskdeck_dir = root_dir.join(TASKDECK_DIR_NAME);
        let config_path = taskdeck_dir.join(CONFIG_FILE_NAME);

        let config = TaskdeckConfig::load(&config_path).await?;
        let backend = config.to_backend(&root_dir)?;
        let store = create_store(backend).await?;
        let log = load_history(&taskdeck_dir.join(HISTORY_FILE_NAME)).await;
        let tracker = Tracker::with_log(store, log).await?;

        Ok(Self {
            tracker,
            taskdeck_dir,
            config,
        })
    }

    /// Persist the undo/redo history for the next invocation.
    ///
    /// Must be called after any mutating command; read-only commands
    /// can skip it.
    pub async fn save_history(&self) -> Result<()> {
        let path = self.taskdeck_dir.join(HISTORY_FILE_NAME);
        let json = serde_json::to_string(self.tracker.action_log())?;
        tokio::fs::write(&path, json).await?;
        Ok(())
    }

    /// Get a mutable reference to the tracker.
    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    /// Get an immutable reference to the tracker.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &TaskdeckConfig {
        &self.config
    }

    /// Get the path to the taskdeck directory.
    pub fn taskdeck_dir(&self) -> &Path {
        &self.taskdeck_dir
    }
}

/// Read recorded history, falling back to an empty log when the file
/// is missing or unreadable. Stale or corrupt history should never
/// block opening the repository.
async fn load_history(path: &Path) -> ActionLog {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt history file");
            ActionLog::new()
        }),
        Err(_) => ActionLog::new(),
    }
}
