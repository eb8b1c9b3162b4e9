//! Outcome of a latest-release lookup.

use std::fmt;

/// Tag reported when a release exists but carries no `tag_name`.
pub const NO_TAG_FOUND: &str = "No tag found";

/// Rendering of [`ReleaseStatus::NotFound`].
pub const NO_RELEASE_FOUND: &str = "No release found";

/// Result of querying one repository's latest release.
///
/// Lookups never fail outright; every failure mode is captured here so the
/// caller can render it as a table row and move on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseStatus {
    /// A release was found. Holds its tag, or [`NO_TAG_FOUND`] when the
    /// response did not carry one.
    Found(String),
    /// The API answered 404 for the repository's latest release.
    NotFound,
    /// Any other HTTP, transport, or decoding failure.
    Error(String),
}

impl ReleaseStatus {
    /// A found release with no tag in the response.
    pub fn untagged() -> Self {
        ReleaseStatus::Found(NO_TAG_FOUND.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ReleaseStatus::Error(_))
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseStatus::Found(tag) => f.write_str(tag),
            ReleaseStatus::NotFound => f.write_str(NO_RELEASE_FOUND),
            ReleaseStatus::Error(message) => write!(f, "Error: {}", message),
        }
    }
}
