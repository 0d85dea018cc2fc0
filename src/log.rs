// src/log.rs
use std::io;
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{DEFAULT_LOG_LEVEL, LOG_ENV};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber once. Level comes from `LOG_LEVEL`
/// (e.g. `debug`, `finance_scraper=trace`), falling back to `info`.
/// Logs go to stderr; stdout carries the report only.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
