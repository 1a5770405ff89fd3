//! Snapshot delivery.
//!
//! The panel only ever renders the latest snapshot, so delivery is a
//! `tokio::sync::watch` channel. The file-backed feed watches a JSON file with
//! `notify::RecommendedWatcher`, bridges events into a bounded tokio channel,
//! debounces them and republishes the parsed file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{EventKind, RecursiveMode, Watcher};
use tokio::sync::{mpsc, watch};

use crate::error::{ErtError, Result};
use crate::snapshot::RemoteSnapshot;

/// Receiving end handed to the panel
pub type SnapshotReceiver = watch::Receiver<RemoteSnapshot>;

/// Capacity of the channel bridging `notify` callbacks to the tokio loop.
/// Overflowing events are dropped; one pending event is enough to reload.
const CHANNEL_CAPACITY: usize = 64;

/// Publishing end of a snapshot channel
#[derive(Clone)]
pub struct SnapshotPublisher {
    sender: watch::Sender<RemoteSnapshot>,
}

impl SnapshotPublisher {
    /// Replace the current snapshot and wake every subscriber
    pub fn publish(&self, snapshot: RemoteSnapshot) {
        self.sender.send_replace(snapshot);
    }

    pub fn subscribe(&self) -> SnapshotReceiver {
        self.sender.subscribe()
    }
}

/// Create an in-process snapshot channel seeded with `initial`
pub fn snapshot_channel(initial: RemoteSnapshot) -> (SnapshotPublisher, SnapshotReceiver) {
    let (sender, receiver) = watch::channel(initial);
    (SnapshotPublisher { sender }, receiver)
}

/// Read and parse a snapshot file
pub fn load_snapshot(path: &Path) -> Result<RemoteSnapshot> {
    if !path.exists() {
        return Err(ErtError::SnapshotNotFound(path.display().to_string()));
    }
    let contents = std::fs::read_to_string(path)?;
    RemoteSnapshot::from_json(&contents)
}

/// Snapshot feed backed by a file on disk.
///
/// Dropping the feed stops watching.
pub struct FileFeed {
    publisher: SnapshotPublisher,
    _watcher: notify::RecommendedWatcher,
}

impl FileFeed {
    /// Load `path` and start watching it for changes.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(path: impl Into<PathBuf>, debounce: Duration) -> Result<Self> {
        let path = path.into();
        let initial = load_snapshot(&path)?;
        tracing::info!("Loaded snapshot from {}", path.display());

        let (publisher, _rx) = snapshot_channel(initial);
        let (bridge_tx, bridge_rx) = mpsc::channel::<notify::Event>(CHANNEL_CAPACITY);

        let mut watcher = notify::RecommendedWatcher::new(
            move |res: std::result::Result<notify::Event, notify::Error>| match res {
                Ok(event) => {
                    let _ = bridge_tx.try_send(event);
                }
                Err(e) => {
                    tracing::warn!("Snapshot watcher error: {e}");
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| ErtError::WatcherError(format!("failed to create file watcher: {e}")))?;

        // Editors and backends often replace the file rather than write in
        // place, so watch the directory and filter by file name.
        let watch_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ErtError::WatcherError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        let task_publisher = publisher.clone();
        tokio::spawn(async move {
            run_reload_loop(bridge_rx, path, debounce, task_publisher).await;
        });

        Ok(Self {
            publisher,
            _watcher: watcher,
        })
    }

    /// Latest snapshot and future updates
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.publisher.subscribe()
    }

    /// Snapshot currently held by the feed
    pub fn current(&self) -> RemoteSnapshot {
        self.publisher.sender.borrow().clone()
    }
}

fn is_relevant(event: &notify::Event, path: &Path) -> bool {
    let is_change = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    );
    is_change
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == path.file_name())
}

async fn run_reload_loop(
    mut bridge_rx: mpsc::Receiver<notify::Event>,
    path: PathBuf,
    debounce: Duration,
    publisher: SnapshotPublisher,
) {
    while let Some(event) = bridge_rx.recv().await {
        if !is_relevant(&event, &path) {
            continue;
        }

        // Coalesce the burst of events a single write produces
        tokio::time::sleep(debounce).await;
        while bridge_rx.try_recv().is_ok() {}

        match load_snapshot(&path) {
            Ok(snapshot) => {
                tracing::info!("Reloaded snapshot from {}", path.display());
                publisher.publish(snapshot);
            }
            Err(e) => {
                tracing::warn!(
                    "Keeping previous snapshot, failed to reload {}: {e}",
                    path.display()
                );
            }
        }
    }
    tracing::debug!("Snapshot watcher closed, stopping reload loop");
}
