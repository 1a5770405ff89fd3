//! Overview section: current alert level and the request-answered toggle

use iocraft::prelude::*;

use crate::tui::components::{Button, LabeledItem, Section};
use crate::tui::panel::model::{Control, OverviewViewModel};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct OverviewProps {
    pub model: Option<OverviewViewModel>,
    pub on_press: Option<Handler<Control>>,
}

#[component]
pub fn Overview(props: &OverviewProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(model) = props.model.as_ref() else {
        return element!(View).into_any();
    };

    // Unknown colour strings fall back to the default text colour
    let alert_color = theme
        .parse_color(&model.security_level_color)
        .unwrap_or(theme.text);

    element! {
        Section(title: Some("Overview".to_string())) {
            LabeledItem(
                label: "Current Alert",
                value: Some(model.security_level.clone()),
                color: Some(alert_color),
            )
            LabeledItem(label: "ERT Request") {
                Button(model: Some(model.answered.clone()), on_press: props.on_press.clone())
            }
        }
    }
    .into_any()
}
