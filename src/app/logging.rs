use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "RELCHECK_LOG";

/// Install the stderr subscriber. Stdout stays reserved for the table.
pub fn init() {
    // Use RELCHECK_LOG if set, otherwise only warnings and errors
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false);

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init();
}
