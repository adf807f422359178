pub mod cli;
pub mod config;
pub mod domain;
pub mod enrich;
pub mod errors;
pub mod http;
pub mod images;
pub mod services;
pub mod sources;

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static LOGGING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_env("INNEWS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    // Another subscriber may already be installed (tests, embedding apps)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
});

/// One-time process setup. Safe to call any number of times.
pub fn init() {
    Lazy::force(&LOGGING);
}
