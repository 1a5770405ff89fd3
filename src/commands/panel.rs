//! Interactive panel command (`ert-manager panel`)
//!
//! Watches a snapshot file and appends every emitted action to a JSON-lines
//! file while the fullscreen panel is open.

use std::path::PathBuf;
use std::sync::Arc;

use iocraft::prelude::*;

use crate::backend::{ActionSink, FileFeed, JsonLinesSink};
use crate::config::Config;
use crate::error::{ErtError, Result};
use crate::logging::init_logging;
use crate::tui::panel::{ErtManager, Tab};

/// Options for `ert-manager panel`; unset values come from the config file
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
    pub snapshot: Option<PathBuf>,
    pub actions: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub tab: Tab,
}

/// Launch the fullscreen ERT manager panel
pub async fn cmd_panel(options: PanelOptions) -> Result<()> {
    let config = Config::load(options.config.as_deref())?;
    init_logging(&config)?;

    let snapshot_path = options
        .snapshot
        .or_else(|| config.snapshot_path.clone())
        .ok_or_else(|| {
            ErtError::Config("no snapshot file given (use --snapshot or snapshot_path)".to_string())
        })?;
    let actions_path = options
        .actions
        .unwrap_or_else(|| config.actions_path.clone());

    let feed = FileFeed::start(snapshot_path.clone(), config.debounce())?;
    let sink: Arc<dyn ActionSink> = Arc::new(JsonLinesSink::open(&actions_path)?);
    let (width, height) = config.window.cells();

    tracing::info!(
        snapshot = %snapshot_path.display(),
        actions = %actions_path.display(),
        width,
        height,
        "starting panel"
    );

    element!(ErtManager(
        snapshots: Some(feed.subscribe()),
        sink: Some(sink),
        initial_tab: options.tab,
        width: Some(width),
        height: Some(height),
    ))
    .fullscreen()
    .await
    .map_err(|e| ErtError::Tui(e.to_string()))?;

    tracing::info!("panel closed");
    Ok(())
}
