use serde::Deserialize;
use url::Url;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Releases API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseApiConfig {
    /// API base URL; request paths are appended to it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ReleaseApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
