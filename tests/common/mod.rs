//! Shared testing utilities for relcheck CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    ///
    /// The work directory sits two levels below the temp root so that the
    /// parent-directory lookups never leave the sandbox.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("outer").join("inner").join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `relcheck` binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `relcheck` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("relcheck").expect("Failed to locate relcheck binary");
        cmd.current_dir(dir.as_ref())
            .env_remove("RUNFILES_DIR")
            .env_remove("RELCHECK_CONFIG")
            .env_remove("RELCHECK_API_URL")
            .env_remove("RELCHECK_TIMEOUT_SECS")
            .env_remove("RELCHECK_LOG");
        cmd
    }

    /// Write `config.yaml` into the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_config_at(&self.work_dir, content)
    }

    /// Write `config.yaml` into `dir`.
    pub fn write_config_at(&self, dir: &Path, content: &str) -> PathBuf {
        fs::create_dir_all(dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        fs::write(&path, content).expect("Failed to write config.yaml");
        path
    }
}

/// Expected table row for `name` and `status`.
#[allow(dead_code)]
pub fn row(name: &str, status: &str) -> String {
    format!("{:<40} | {:<20}", name, status)
}

/// Expected header row.
#[allow(dead_code)]
pub fn header() -> String {
    row("Repository", "Latest Release")
}
