//! Repository list parsing.

use serde_yaml::Value;

use crate::domain::{AppError, RepositoryRef};

/// File name searched for when no explicit configuration path is given.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

const REPOSITORIES_KEY: &str = "repositories";

/// Ordered list of repositories to check. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    repositories: Vec<RepositoryRef>,
}

impl Configuration {
    pub fn new(repositories: Vec<RepositoryRef>) -> Self {
        Self { repositories }
    }

    /// Parse a YAML document with a top-level `repositories` sequence.
    ///
    /// Entries without a usable `owner` and `repo` are dropped silently.
    /// `origin` names the document in error messages.
    pub fn from_yaml(content: &str, origin: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let document: Value = serde_yaml::from_str(content).map_err(|e| AppError::ConfigParse {
            what: origin.to_string(),
            details: e.to_string(),
        })?;

        let entries = match &document {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(_) => match document.get(REPOSITORIES_KEY) {
                None | Some(Value::Null) => return Ok(Self::default()),
                Some(Value::Sequence(entries)) => entries,
                Some(_) => {
                    return Err(AppError::ConfigParse {
                        what: origin.to_string(),
                        details: format!("'{}' must be a sequence", REPOSITORIES_KEY),
                    });
                }
            },
            _ => {
                return Err(AppError::ConfigParse {
                    what: origin.to_string(),
                    details: "top-level document must be a mapping".to_string(),
                });
            }
        };

        let repositories = entries.iter().filter_map(parse_entry).collect();
        Ok(Self { repositories })
    }

    pub fn repositories(&self) -> &[RepositoryRef] {
        &self.repositories
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

fn parse_entry(entry: &Value) -> Option<RepositoryRef> {
    if !entry.is_mapping() {
        return None;
    }
    let owner = scalar_text(entry.get("owner")?)?;
    let repo = scalar_text(entry.get("repo")?)?;
    RepositoryRef::new(owner, repo)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
