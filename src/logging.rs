//! Tracing subscriber setup.
//!
//! Stdout belongs to the fullscreen terminal UI, so log events are written
//! to a file, without ANSI colours. Without a configured log file no
//! subscriber is installed and events are discarded.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::{ErtError, Result};

/// Build the filter from a directive string such as `info` or
/// `ert_manager=debug,notify=warn`
pub fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| ErtError::Config(format!("invalid log filter '{directives}': {e}")))
}

/// Install the global subscriber described by `config`
///
/// Returns `false` when logging is disabled.
pub fn init_logging(config: &Config) -> Result<bool> {
    let Some(log_file) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let filter = build_filter(&config.effective_log_filter())?;
    let file = open_log_file(log_file)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ErtError::Other(format!("failed to install log subscriber: {e}")))?;

    tracing::info!(
        log_file = %log_file.display(),
        version = env!("CARGO_PKG_VERSION"),
        "logging initialized"
    );
    Ok(true)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
