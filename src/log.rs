// src/log.rs
//
// Logging front door. Everything goes through `tracing`; the short macros below
// keep call sites terse (logf!/logd!/logw!/loge!).
//
// The GUI has no console, so it logs to `.store/debug.log`. The CLI logs to
// stderr so stdout stays clean for the report.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_DIR, LOG_FILE};

pub use tracing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Returns the appender guard for `File`;
/// keep it alive until exit or buffered lines are lost.
///
/// Calling this twice is harmless: the second install is ignored.
pub fn init(target: LogTarget) -> Option<WorkerGuard> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            None
        }
        LogTarget::File => {
            if let Err(e) = fs::create_dir_all(LOG_DIR) {
                eprintln!("Warning: could not create {LOG_DIR} ({e}), file logging disabled");
                return None;
            }
            let appender = tracing_appender::rolling::never(Path::new(LOG_DIR), LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            Some(guard)
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
