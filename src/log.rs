// src/log.rs
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

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::LOG_FILE;

/// Where log lines go. The GUI has no console on Windows, so it writes to a file.
#[derive(Clone, Debug)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn default_file() -> Self {
        LogTarget::File(PathBuf::from(LOG_FILE))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose` when set.
/// Safe to call more than once; later calls are ignored.
pub fn init(target: LogTarget, verbose: bool) -> std::io::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .try_init()
        }
    };

    if installed.is_err() {
        logd!("Log: subscriber already installed");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
