pub mod release_api;
pub mod repositories;

pub use release_api::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, ReleaseApiConfig};
pub use repositories::{CONFIG_FILE_NAME, Configuration};
