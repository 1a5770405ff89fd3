//! Empty state component
//!
//! Displays a centered icon and message when there are no ERT requests.

use iocraft::prelude::*;

use crate::tui::components::icon::Icon;
use crate::tui::panel::model::EMPTY_REQUESTS_TEXT;
use crate::tui::theme::theme;

/// Empty state display: crossed-out broadcast tower and a message
#[component]
pub fn EmptyState() -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(flex_direction: FlexDirection::Row, margin_bottom: 1) {
                Text(content: Icon::BroadcastTower.glyph(), color: theme.text_dimmed)
                Text(content: Icon::Slash.glyph(), color: theme.red, weight: Weight::Bold)
            }
            Text(
                content: EMPTY_REQUESTS_TEXT,
                color: theme.average,
                weight: Weight::Bold,
            )
        }
    }
}
