//! Tab selector component

use iocraft::prelude::*;

use crate::tui::panel::model::{Tab, TabViewModel};
use crate::tui::theme::theme;

/// Props for the Tabs component
#[derive(Default, Props)]
pub struct TabsProps {
    pub tabs: Vec<TabViewModel>,
    /// Handler invoked with the clicked tab
    pub on_select: Option<Handler<Tab>>,
}

/// Props for a single TabItem
#[derive(Default, Props)]
struct TabItemProps {
    tab: Option<TabViewModel>,
    on_select: Option<Handler<Tab>>,
}

#[component]
fn TabItem(props: &TabItemProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let tab = props.tab.as_ref().map(|t| t.tab);
    let on_select = props.on_select.clone();

    hooks.use_local_terminal_events(move |event| {
        if let TerminalEvent::FullscreenMouse(mouse_event) = event
            && let MouseEventKind::Down(_) = mouse_event.kind
            && let (Some(handler), Some(tab)) = (on_select.as_ref(), tab)
        {
            handler(tab);
        }
    });

    let Some(model) = props.tab.as_ref() else {
        return element!(View).into_any();
    };

    element! {
        View(
            flex_grow: 1.0,
            justify_content: JustifyContent::Center,
            border_style: BorderStyle::Single,
            border_edges: Edges::Bottom,
            border_color: if model.selected { theme.tab_active } else { theme.border },
        ) {
            Text(
                content: format!("{} {}", model.icon.glyph(), model.title),
                color: if model.selected { theme.tab_active } else { theme.text_dimmed },
                weight: if model.selected { Weight::Bold } else { Weight::Normal },
            )
        }
    }
    .into_any()
}

/// Full-width row of mutually exclusive tabs
#[component]
pub fn Tabs(props: &TabsProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(width: 100pct, flex_direction: FlexDirection::Row, flex_shrink: 0.0) {
            #(props.tabs.iter().map(|tab| element! {
                TabItem(tab: Some(tab.clone()), on_select: props.on_select.clone())
            }))
        }
    }
}
