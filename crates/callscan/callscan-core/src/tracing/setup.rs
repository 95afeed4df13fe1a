//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the callscan tracing/logging system.
///
/// Reads the `CALLSCAN_LOG` environment variable for per-crate log levels.
/// Format: `CALLSCAN_LOG=callscan_batch=debug,callscan_privacy=info`
///
/// Falls back to `callscan=info` if `CALLSCAN_LOG` is not set or is invalid.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_LOG_FILTER);
}

/// Like [`init_tracing`], with a caller-chosen fallback filter.
/// `CALLSCAN_LOG` still wins when it is set and valid.
pub fn init_tracing_with_default(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
