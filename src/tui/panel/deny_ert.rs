//! "Deny ERT" tab: denial reason editor and the two-step confirm button

use iocraft::prelude::*;

use crate::tui::components::{Button, TextEditor};
use crate::tui::panel::model::{Control, DenyErtViewModel};

#[derive(Default, Props)]
pub struct DenyErtProps {
    pub model: Option<DenyErtViewModel>,
    pub on_press: Option<Handler<Control>>,
    pub on_edit: Option<Handler<String>>,
    /// Clicking the editor is the same as pressing Enter on it
    pub on_focus_input: Option<Handler<()>>,
}

#[component]
pub fn DenyErt(props: &DenyErtProps) -> impl Into<AnyElement<'static>> {
    let Some(model) = props.model.as_ref() else {
        return element!(View).into_any();
    };

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
            TextEditor(
                value: model.text.clone(),
                placeholder: Some(model.placeholder.to_string()),
                has_focus: model.editing,
                highlighted: model.input_focused,
                on_change: props.on_edit.clone(),
                on_click: props.on_focus_input.clone(),
            )
            Button(model: Some(model.button.clone()), on_press: props.on_press.clone(), fluid: true)
        }
    }
    .into_any()
}
