use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::configuration::CONFIG_FILE_NAME;

/// Library-wide error type for relcheck operations.
///
/// Only failures that abort the whole run live here. Per-repository lookup
/// failures are reported through [`crate::domain::ReleaseStatus`] instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No configuration file exists at any candidate path.
    #[error(
        "Could not find {} (searched: {})",
        missing_file_name(.searched),
        display_paths(.searched)
    )]
    ConfigNotFound { searched: Vec<PathBuf> },

    /// Configuration file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration document is not valid YAML or has the wrong shape.
    #[error("Failed to parse {what}: {details}")]
    ConfigParse { what: String, details: String },

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

impl AppError {
    /// Whether the error is the missing-configuration condition.
    pub fn is_config_not_found(&self) -> bool {
        matches!(self, AppError::ConfigNotFound { .. })
    }
}

/// Name of the file the user was looking for: the explicit path's file name
/// when it was the only candidate, otherwise the default config name.
fn missing_file_name(paths: &[PathBuf]) -> String {
    match paths {
        [explicit] => explicit
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| explicit.display().to_string()),
        _ => CONFIG_FILE_NAME.to_string(),
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidate paths".to_string();
    }
    paths.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_mentions_file_name_and_candidates() {
        let err = AppError::ConfigNotFound {
            searched: vec![PathBuf::from("a/config.yaml"), PathBuf::from("b/config.yaml")],
        };

        let message = err.to_string();
        assert!(message.starts_with("Could not find config.yaml"));
        assert!(message.contains("a/config.yaml, b/config.yaml"));
        assert!(err.is_config_not_found());
    }

    #[test]
    fn config_not_found_without_candidates_still_renders() {
        let err = AppError::ConfigNotFound { searched: vec![] };
        assert_eq!(err.to_string(), "Could not find config.yaml (searched: no candidate paths)");
    }

    #[test]
    fn config_not_found_names_the_single_explicit_candidate() {
        let err = AppError::ConfigNotFound { searched: vec![PathBuf::from("/srv/nowhere.yaml")] };

        assert_eq!(err.to_string(), "Could not find nowhere.yaml (searched: /srv/nowhere.yaml)");
    }

    #[test]
    fn parse_error_renders_origin() {
        let err = AppError::ConfigParse { what: "config.yaml".into(), details: "bad".into() };
        assert_eq!(err.to_string(), "Failed to parse config.yaml: bad");
        assert!(!err.is_config_not_found());
    }
}
