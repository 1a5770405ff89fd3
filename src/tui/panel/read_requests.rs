//! "Read ERT Requests" tab: one section per request

use iocraft::prelude::*;

use crate::tui::components::{Button, EmptyState, Section};
use crate::tui::panel::model::{Control, ReadRequestsViewModel};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ReadRequestsProps {
    pub model: Option<ReadRequestsViewModel>,
    pub on_press: Option<Handler<Control>>,
}

#[component]
pub fn ReadRequests(props: &ReadRequestsProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(model) = props.model.as_ref() else {
        return element!(View).into_any();
    };

    if model.show_empty_state {
        return element! {
            EmptyState
        }
        .into_any();
    }

    let on_press = props.on_press.clone();
    let shown = model.sections.len();
    let hidden_below = model.total.saturating_sub(model.scroll_offset + shown);

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
            #(if model.scroll_offset > 0 {
                Some(element! {
                    Text(
                        content: format!("  ↑ {} more", model.scroll_offset),
                        color: theme.text_dimmed,
                    )
                })
            } else {
                None
            })
            #(model.sections.iter().map(|section| {
                let sender: Vec<AnyElement<'static>> = vec![
                    element! {
                        Button(model: Some(section.sender.clone()), on_press: on_press.clone())
                    }
                    .into_any(),
                ];
                element! {
                    Section(title: Some(section.title.clone()), buttons: Some(sender)) {
                        Text(content: section.message.clone(), color: theme.text, wrap: TextWrap::Wrap)
                    }
                }
            }))
            #(if hidden_below > 0 {
                Some(element! {
                    Text(
                        content: format!("  ↓ {hidden_below} more"),
                        color: theme.text_dimmed,
                    )
                })
            } else {
                None
            })
        }
    }
    .into_any()
}
