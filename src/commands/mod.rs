//! Subcommand implementations

mod panel;
mod show;

pub use panel::{PanelOptions, cmd_panel};
pub use show::{ShowOptions, cmd_show};
