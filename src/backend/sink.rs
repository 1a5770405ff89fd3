//! Action sinks: where emitted actions go.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::action::Action;
use crate::error::Result;

/// Dispatch function injected into the panel.
///
/// Delivery is fire-and-forget: the panel never waits for an answer and the
/// outcome shows up, if at all, in a later snapshot.
pub trait ActionSink: Send + Sync {
    fn act(&self, action: Action);
}

/// Appends each action as one JSON line to a file
pub struct JsonLinesSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonLinesSink {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, action: &Action) -> Result<()> {
        let line = serde_json::to_string(&action.to_envelope())?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

impl ActionSink for JsonLinesSink {
    fn act(&self, action: Action) {
        tracing::trace!(action = action.name(), path = %self.path.display(), "writing action");
        if let Err(e) = self.write_line(&action) {
            tracing::warn!(
                "Failed to write action '{}' to {}: {e}",
                action.name(),
                self.path.display()
            );
        }
    }
}

/// Keeps every action in memory, in emission order
#[derive(Default)]
pub struct RecordingSink {
    actions: Mutex<Vec<Action>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all actions recorded so far
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().clone()
    }

    /// Remove and return all recorded actions
    pub fn take(&self) -> Vec<Action> {
        std::mem::take(&mut *self.actions.lock())
    }
}

impl ActionSink for RecordingSink {
    fn act(&self, action: Action) {
        tracing::debug!(action = action.name(), "recording action");
        self.actions.lock().push(action);
    }
}
