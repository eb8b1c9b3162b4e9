pub mod config_file;
pub mod github_releases_http;

pub use config_file::{ConfigSearch, load_configuration, locate};
pub use github_releases_http::HttpReleaseSource;
