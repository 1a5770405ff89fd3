use std::path::PathBuf;

use crate::backend::load_snapshot;
use crate::config::Config;
use crate::error::Result;
use crate::tui::panel::{Tab, render_panel};

/// Options for `ert-manager show`
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub snapshot: PathBuf,
    pub tab: Tab,
    pub config: Option<PathBuf>,
    /// Print the normalized snapshot instead of the panel
    pub output_json: bool,
}

/// Render the panel for a snapshot file once and print it
pub fn cmd_show(options: ShowOptions) -> Result<()> {
    let config = Config::load(options.config.as_deref())?;
    let snapshot = load_snapshot(&options.snapshot)?;

    if options.output_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let (width, height) = config.window.cells();
    print!("{}", render_panel(&snapshot, options.tab, width, height));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErtError;

    #[test]
    fn test_show_missing_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = cmd_show(ShowOptions {
            snapshot: dir.path().join("missing.json"),
            config: Some(dir.path().join("missing.yaml")),
            ..ShowOptions::default()
        })
        .unwrap_err();
        // The explicit config path is checked first
        assert!(matches!(err, ErtError::Config(_)));
    }
}
