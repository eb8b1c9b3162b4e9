//! GitHub latest-release client using reqwest.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{AppError, ReleaseApiConfig, ReleaseStatus, RepositoryRef};
use crate::ports::ReleaseSource;

const GITHUB_JSON: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("relcheck/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the releases API.
///
/// One blocking request per lookup; no retries. The underlying client is
/// reused across lookups.
#[derive(Debug, Clone)]
pub struct HttpReleaseSource {
    api_url: Url,
    client: Client,
}

impl HttpReleaseSource {
    pub fn new(config: &ReleaseApiConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    /// Look up the latest release of `owner/repo`.
    pub fn lookup_latest_release(&self, owner: &str, repo: &str) -> ReleaseStatus {
        match RepositoryRef::new(owner, repo) {
            Some(repository) => self.latest_release(&repository),
            None => ReleaseStatus::Error("owner and repo must not be empty".to_string()),
        }
    }

    fn latest_release_url(&self, repository: &RepositoryRef) -> Result<Url, String> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| format!("API URL cannot carry a path: {}", self.api_url))?
            .pop_if_empty()
            .extend(["repos", repository.owner(), repository.repo(), "releases", "latest"]);
        Ok(url)
    }
}

impl ReleaseSource for HttpReleaseSource {
    fn latest_release(&self, repository: &RepositoryRef) -> ReleaseStatus {
        let url = match self.latest_release_url(repository) {
            Ok(url) => url,
            Err(message) => return ReleaseStatus::Error(message),
        };

        debug!(repository = %repository, %url, "Requesting latest release");

        let response = match self.client.get(url.clone()).send() {
            Ok(response) => response,
            Err(e) => {
                let message = describe(&e);
                warn!(repository = %repository, error = %message, "Latest release request failed");
                return ReleaseStatus::Error(message);
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(repository = %repository, "No published release");
            return ReleaseStatus::NotFound;
        }

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!(repository = %repository, %status, "Releases API returned an error status");
                return ReleaseStatus::Error(describe(&e));
            }
        };

        match response.text() {
            Ok(body) => parse_release_body(&body),
            Err(e) => {
                let message = describe(&e);
                warn!(repository = %repository, error = %message, "Failed to read response body");
                ReleaseStatus::Error(format!("Failed to read response: {}", message))
            }
        }
    }
}

/// Render a reqwest error with its full cause chain; reqwest's `Display`
/// stops at the top-level message.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    if error.is_timeout() && !message.contains("timed out") {
        message.push_str(": operation timed out");
    }
    message
}

/// Interpret a successful latest-release body.
fn parse_release_body(body: &str) -> ReleaseStatus {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return ReleaseStatus::Error(format!("Failed to parse response: {}", e)),
    };

    let Value::Object(release) = parsed else {
        return ReleaseStatus::Error("Failed to parse response: expected a JSON object".into());
    };

    match release.get("tag_name") {
        None | Some(Value::Null) => ReleaseStatus::untagged(),
        Some(Value::String(tag)) => ReleaseStatus::Found(tag.clone()),
        Some(other) => ReleaseStatus::Found(other.to_string()),
    }
}
