//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, CONFIG_FILE_NAME, Configuration};

/// Environment variable pointing at a runfiles tree (set by `bazel run`).
pub const RUNFILES_DIR_ENV: &str = "RUNFILES_DIR";

/// Sources consulted when building the candidate list.
#[derive(Debug, Clone, Default)]
pub struct ConfigSearch {
    /// Explicit path from the command line or environment.
    pub explicit: Option<PathBuf>,
    /// Value of [`RUNFILES_DIR_ENV`], if set.
    pub runfiles_dir: Option<PathBuf>,
    /// Directory relative candidates are resolved against.
    pub base_dir: Option<PathBuf>,
}

impl ConfigSearch {
    /// Build a search from the process environment and working directory.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            runfiles_dir: std::env::var_os(RUNFILES_DIR_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            base_dir: std::env::current_dir().ok(),
        }
    }

    /// Candidate paths in lookup order.
    ///
    /// An explicit path is the only candidate when present.
    pub fn candidates(&self) -> Vec<PathBuf> {
        if let Some(explicit) = &self.explicit {
            return vec![explicit.clone()];
        }

        let mut candidates = Vec::new();

        if let Some(runfiles) = &self.runfiles_dir {
            candidates.push(runfiles.join(CONFIG_FILE_NAME));
            candidates.push(runfiles.join("_main").join(CONFIG_FILE_NAME));
        }

        let base = self.base_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        candidates.push(base.join(CONFIG_FILE_NAME));
        candidates.push(base.join("..").join(CONFIG_FILE_NAME));
        candidates.push(base.join("..").join("..").join(CONFIG_FILE_NAME));

        candidates
    }

    /// First candidate that exists as a regular file.
    pub fn locate(&self) -> Result<PathBuf, AppError> {
        locate(&self.candidates())
    }
}

/// Return the first existing file among `candidates`.
pub fn locate(candidates: &[PathBuf]) -> Result<PathBuf, AppError> {
    for candidate in candidates {
        if candidate.is_file() {
            debug!(path = %candidate.display(), "Using configuration file");
            return Ok(candidate.clone());
        }
        debug!(path = %candidate.display(), "Configuration candidate not found");
    }

    Err(AppError::ConfigNotFound { searched: candidates.to_vec() })
}

/// Read and parse the configuration file at `path`.
pub fn load_configuration(path: &Path) -> Result<Configuration, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|source| AppError::ConfigRead { path: path.to_path_buf(), source })?;

    let config = Configuration::from_yaml(&content, &path.display().to_string())?;
    debug!(path = %path.display(), repositories = config.len(), "Loaded configuration");
    Ok(config)
}
