//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::app::api::{self, CheckOptions};
use crate::app::logging;
use crate::domain::configuration::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::domain::{AppError, ReleaseApiConfig};

#[derive(Parser)]
#[command(name = "relcheck")]
#[command(version)]
#[command(
    about = "Print the latest published release of each repository listed in config.yaml",
    long_about = None
)]
struct Cli {
    /// Configuration file (default: search for config.yaml)
    #[arg(short, long, env = "RELCHECK_CONFIG")]
    config: Option<PathBuf>,
    /// Base URL of the releases API
    #[arg(long, env = "RELCHECK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: Url,
    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "RELCHECK_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,
}

impl Cli {
    fn into_options(self) -> CheckOptions {
        CheckOptions {
            config_path: self.config,
            api: ReleaseApiConfig { api_url: self.api_url, timeout_secs: self.timeout_secs },
        }
    }
}

pub fn run() {
    let cli = Cli::parse();
    logging::init();

    let result: Result<(), AppError> = api::check(cli.into_options()).map(|_| ());

    if let Err(e) = result {
        // A missing config is reported alongside the table output.
        if e.is_config_not_found() {
            println!("Error: {}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
