use std::path::Path;

use tracing_subscriber::EnvFilter;

use super::config::{process_env, DEFAULT_LOG_LEVEL, LOG_LEVEL};

/// Installs the fmt subscriber for a Lambda binary.
///
/// CloudWatch stamps ingestion time itself, so timestamps and targets are
/// left out of each line.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn init_from_env() {
    init(&process_env(LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()));
}

/// Reports the env file picked up before the subscriber existed.
pub fn env_file_loaded(path: Option<&Path>) {
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }
}
