//! Implementation of the `init` command.
//!
//! Creates the `.taskdeck/` directory with a configuration file and an
//! empty task data file.

use crate::core::DEFAULT_RECOMMENDATION_LIMIT;
use crate::error::{Error, Result};
use crate::store::StoreBackend;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the taskdeck directory
pub const TASKDECK_DIR_NAME: &str = ".taskdeck";

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the task data file
pub const TASKS_FILE_NAME: &str = "tasks.jsonl";

/// Name of the undo/redo history file
pub const HISTORY_FILE_NAME: &str = "history.json";

/// Maximum directory depth to traverse when searching for the root
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure for taskdeck
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskdeckConfig {
    /// Storage configuration
    pub storage: StorageConfig,

    /// How many tasks `next` shows by default
    #[serde(rename = "recommendation-limit", default = "default_limit")]
    pub recommendation_limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}

/// Storage configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Storage backend type ("memory" for in-memory with JSONL persistence)
    pub backend: String,

    /// Path to the data file, relative to the repository root
    pub data_file: String,
}

impl TaskdeckConfig {
    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Resolve the configured backend against the repository root.
    pub fn to_backend(&self, root_dir: &Path) -> Result<StoreBackend> {
        match self.storage.backend.as_str() {
            "memory" => Ok(StoreBackend::Jsonl(root_dir.join(&self.storage.data_file))),
            other => Err(Error::Config(format!("unknown storage backend '{other}'"))),
        }
    }
}

impl Default for TaskdeckConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: "memory".to_string(),
                data_file: format!("{TASKDECK_DIR_NAME}/{TASKS_FILE_NAME}"),
            },
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

/// Result of the init command
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created taskdeck directory
    pub taskdeck_dir: PathBuf,
    /// Path to the created config file
    pub config_file: PathBuf,
    /// Path to the created tasks file
    pub tasks_file: PathBuf,
}

/// Initialize a new taskdeck repository in the given directory.
///
/// # Errors
///
/// Returns an error if the `.taskdeck/` directory already exists or a
/// file system operation fails.
pub async fn init(base_dir: &Path) -> Result<InitResult> {
    let taskdeck_dir = base_dir.join(TASKDECK_DIR_NAME);

    if taskdeck_dir.exists() {
        return Err(Error::Config(format!(
            "taskdeck is already initialized in this directory. Found existing '{TASKDECK_DIR_NAME}'"
        )));
    }

    fs::create_dir_all(&taskdeck_dir).await?;

    let config_file = taskdeck_dir.join(CONFIG_FILE_NAME);
    let config = TaskdeckConfig::default();
    config.save(&config_file).await?;

    let tasks_file = taskdeck_dir.join(TASKS_FILE_NAME);
    fs::write(&tasks_file, "").await?;

    tracing::info!(dir = %taskdeck_dir.display(), "initialized taskdeck repository");

    Ok(InitResult {
        taskdeck_dir,
        config_file,
        tasks_file,
    })
}

/// Check if a directory has been initialized with taskdeck.
pub fn is_initialized(base_dir: &Path) -> bool {
    base_dir.join(TASKDECK_DIR_NAME).exists()
}

/// Find the taskdeck root directory by searching up the directory tree.
///
/// Returns `Some(path)` with the directory containing `.taskdeck/`,
/// or `None` if no repository is found within the depth limit.
pub fn find_taskdeck_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        if current.join(TASKDECK_DIR_NAME).exists() {
            return Some(current);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}
