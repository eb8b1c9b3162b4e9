use std::fmt;

/// An owner/name pair identifying a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    owner: String,
    repo: String,
}

impl RepositoryRef {
    /// Build a reference. Returns `None` when either part is empty.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Option<Self> {
        let owner = owner.into();
        let repo = repo.into();
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(Self { owner, repo })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Display name in `owner/repo` form.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
