//! Logging setup (tracing/tracing-subscriber).
//!
//! - `LOG_LEVEL` sets the filter, e.g. `debug` or `warn,quiz_import=trace`.
//! - `LOG_FORMAT=json` switches to JSON lines.
//!
//! Output goes to stderr so stdout can be piped.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,quiz_import=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
