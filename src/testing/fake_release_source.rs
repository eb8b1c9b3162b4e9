use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{ReleaseStatus, RepositoryRef};
use crate::ports::ReleaseSource;

/// Scripted release source that records every lookup in call order.
#[derive(Clone, Default)]
pub struct FakeReleaseSource {
    lookups: Arc<Mutex<Vec<String>>>,
    responses: HashMap<String, ReleaseStatus>,
}

impl FakeReleaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the status returned for `full_name` (`owner/repo`).
    pub fn with_status(mut self, full_name: &str, status: ReleaseStatus) -> Self {
        self.responses.insert(full_name.to_string(), status);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl ReleaseSource for FakeReleaseSource {
    fn latest_release(&self, repository: &RepositoryRef) -> ReleaseStatus {
        let name = repository.full_name();
        self.lookups.lock().unwrap().push(name.clone());
        self.responses.get(&name).cloned().unwrap_or(ReleaseStatus::NotFound)
    }
}
