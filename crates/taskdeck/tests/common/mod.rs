//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

static BINARY: OnceLock<PathBuf> = OnceLock::new();

/// Path to the taskdeck binary, building it once per test process.
pub fn taskdeck_binary() -> &'static Path {
    BINARY.get_or_init(|| {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let workspace = manifest_dir
            .ancestors()
            .nth(2)
            .expect("crate should live under <workspace>/crates/")
            .to_path_buf();

        let status = Command::new("cargo")
            .args(["build", "--package", "taskdeck", "--quiet"])
            .current_dir(&workspace)
            .status()
            .expect("Failed to build taskdeck");
        assert!(status.success(), "Failed to build taskdeck binary");

        workspace.join("target/debug/taskdeck")
    })
}

/// Run the taskdeck binary in the given working directory.
pub fn run_taskdeck_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(taskdeck_binary())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute taskdeck binary")
}

/// Add a task via the CLI, asserting success.
pub fn add_task(dir: &Path, args: &[&str]) {
    let mut full_args = vec!["add"];
    full_args.extend_from_slice(args);
    let output = run_taskdeck_in_dir(dir, &full_args);
    assert!(
        output.status.success(),
        "Failed to add task: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );
}
