//! Tracing setup. Logs go to stderr so stdout stays pipeable.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Initialize the global subscriber (prefer RUST_LOG, fallback to LEXID_LOG_LEVEL).
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(config.color)
        .with_writer(io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }
}
