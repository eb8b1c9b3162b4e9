//! API Facade for the application.
//!
//! Glues configuration discovery, the HTTP adapter, and the check command
//! together against standard output.

use std::io;
use std::path::PathBuf;

use crate::adapters::{ConfigSearch, HttpReleaseSource, load_configuration};
use crate::app::commands::check;
use crate::domain::{AppError, ReleaseApiConfig};

pub use crate::app::commands::check::{CheckReport, CheckRow};

/// Options for a full check run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Explicit configuration file; when `None` the default candidates are searched.
    pub config_path: Option<PathBuf>,
    /// Releases API settings.
    pub api: ReleaseApiConfig,
}

/// Locate the configuration, query every repository, and print the table to stdout.
pub fn check(options: CheckOptions) -> Result<CheckReport, AppError> {
    let path = ConfigSearch::from_env(options.config_path).locate()?;
    let config = load_configuration(&path)?;
    let source = HttpReleaseSource::new(&options.api)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    check::execute(&config, &source, &mut out)
}
