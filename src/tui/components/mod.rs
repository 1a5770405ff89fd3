//! Shared TUI components
//!
//! Reusable building blocks for the ERT manager panel.

pub mod button;
pub mod empty_state;
pub mod footer;
pub mod icon;
pub mod labeled_list;
pub mod section;
pub mod shortcuts;
pub mod tabs;
pub mod text_editor;

pub use button::{Button, ButtonProps, button_text};
pub use empty_state::EmptyState;
pub use footer::{
    Footer, FooterProps, Shortcut, confirm_shortcuts, editing_shortcuts, panel_shortcuts,
};
pub use icon::Icon;
pub use labeled_list::{LABEL_WIDTH, LabeledItem, LabeledItemProps};
pub use section::{Section, SectionProps};
pub use shortcuts::ShortcutsBuilder;
pub use tabs::{Tabs, TabsProps};
pub use text_editor::{TextEditor, TextEditorProps};
