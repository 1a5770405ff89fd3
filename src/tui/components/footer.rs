//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the panel, plus the
//! tooltip of the control under the cursor.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-q", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Press")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
    /// Tooltip of the focused control
    pub tooltip: Option<String>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
        ) {
            #(props.tooltip.as_ref().map(|tooltip| element! {
                View(width: 100pct, padding_left: 1, padding_right: 1) {
                    Text(content: tooltip.clone(), color: theme.text_dimmed)
                }
            }))
            View(
                width: 100pct,
                min_height: 1,
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                padding_left: 1,
                padding_right: 1,
                column_gap: 2,
                background_color: theme.border,
            ) {
                #(props.shortcuts.iter().map(|shortcut| {
                    let key = shortcut.key.clone();
                    let action = shortcut.action.clone();
                    element! {
                        View(flex_direction: FlexDirection::Row) {
                            Text(
                                content: format!("[{}]", key),
                                color: theme.highlight,
                                weight: Weight::Bold,
                            )
                            Text(
                                content: format!(" {}", action),
                                color: theme.text,
                            )
                        }
                    }
                }))
            }
        }
    }
}

/// Shortcuts while browsing the panel
pub fn panel_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_tabs()
        .with_navigation()
        .add("Enter", "Press")
        .add("a", "Answered")
        .with_quit()
        .build()
}

/// Shortcuts while the deny button waits for confirmation
pub fn confirm_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Confirm")
        .add("Esc", "Cancel")
        .with_quit()
        .build()
}

/// Shortcuts while typing a denial reason
pub fn editing_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Esc", "Done")
        .add("C-q", "Quit")
        .build()
}
