//! Check command: look up each configured repository and print the table.

use std::io::Write;

use tracing::info;

use crate::domain::{AppError, Configuration, ReleaseStatus, RepositoryRef, table};
use crate::ports::ReleaseSource;

/// One printed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRow {
    pub repository: RepositoryRef,
    pub status: ReleaseStatus,
}

/// Rows produced by a check run, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub rows: Vec<CheckRow>,
}

impl CheckReport {
    /// Number of rows whose lookup ended in an error.
    pub fn error_count(&self) -> usize {
        self.rows.iter().filter(|row| row.status.is_error()).count()
    }
}

/// Query every repository in order and write the table to `out`.
///
/// Each row is written and flushed as soon as its lookup completes. Lookup
/// failures become rows; only write failures abort the run.
pub fn execute<S, W>(
    config: &Configuration,
    source: &S,
    out: &mut W,
) -> Result<CheckReport, AppError>
where
    S: ReleaseSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", table::header())?;
    writeln!(out, "{}", table::rule())?;
    out.flush()?;

    let mut report = CheckReport::default();
    for repository in config.repositories() {
        let status = source.latest_release(repository);
        writeln!(out, "{}", table::row(repository, &status))?;
        out.flush()?;
        report.rows.push(CheckRow { repository: repository.clone(), status });
    }

    info!(
        repositories = report.rows.len(),
        errors = report.error_count(),
        "Release check finished"
    );
    Ok(report)
}
