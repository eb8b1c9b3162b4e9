//! relcheck: print the latest published release of each configured repository.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{CheckOptions, CheckReport, CheckRow, check};
pub use app::commands::check::execute as run_check;
pub use domain::{AppError, Configuration, ReleaseApiConfig, ReleaseStatus, RepositoryRef};
pub use ports::ReleaseSource;
