//! Terminal user interface
//!
//! - `panel` - the ERT manager panel: overview, tab selector and tab bodies
//! - `components` - reusable building blocks
//! - `theme` - colours

pub mod components;
pub mod panel;
pub mod theme;

pub use panel::{ErtManager, ErtManagerProps, PanelView, PanelViewProps, render_panel};
pub use theme::Theme;
