//! Release lookup port definition.

use crate::domain::{ReleaseStatus, RepositoryRef};

/// Port for latest-release lookups.
///
/// Implementations perform one lookup per call and fold every failure into
/// [`ReleaseStatus::Error`]; they never abort the caller.
pub trait ReleaseSource {
    /// Look up the latest published release of `repository`.
    fn latest_release(&self, repository: &RepositoryRef) -> ReleaseStatus;
}
