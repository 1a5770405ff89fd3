//! "Send ERT" tab: team type, slot counts and dispatch

use iocraft::prelude::*;

use crate::tui::components::{Button, LabeledItem, Section};
use crate::tui::panel::model::{Control, RowContent, SendErtViewModel};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct SendErtProps {
    pub model: Option<SendErtViewModel>,
    pub on_press: Option<Handler<Control>>,
}

#[component]
pub fn SendErt(props: &SendErtProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(model) = props.model.as_ref() else {
        return element!(View).into_any();
    };
    let on_press = props.on_press.clone();

    let header: Vec<AnyElement<'static>> = model
        .header
        .iter()
        .map(|button| {
            element! {
                Button(model: Some(button.clone()), on_press: on_press.clone())
            }
            .into_any()
        })
        .collect();

    element! {
        Section(title: Some("Send ERT".to_string()), buttons: Some(header), fill: true) {
            #(model.rows.iter().map(|row| match &row.content {
                RowContent::Buttons(buttons) => element! {
                    LabeledItem(label: row.label) {
                        #(buttons.iter().map(|button| element! {
                            Button(model: Some(button.clone()), on_press: on_press.clone())
                        }))
                    }
                }
                .into_any(),
                RowContent::Text { text, tone } => element! {
                    LabeledItem(
                        label: row.label,
                        value: Some(text.clone()),
                        color: Some(theme.tone_color(*tone)),
                    )
                }
                .into_any(),
            }))
        }
    }
    .into_any()
}
