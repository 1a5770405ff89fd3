//! Clickable button component
//!
//! Draws a `ButtonViewModel` and reports mouse clicks with automatic
//! hit-testing. Events are delivered only when they occur within the
//! button's bounds.

use iocraft::prelude::*;

use crate::tui::panel::model::{ButtonViewModel, Control, Tone};
use crate::tui::theme::theme;

/// Props for the Button component
#[derive(Default, Props)]
pub struct ButtonProps {
    /// What to draw; nothing is rendered without a model
    pub model: Option<ButtonViewModel>,
    /// Handler invoked with the button's control when clicked
    pub on_press: Option<Handler<Control>>,
    /// Stretch to the parent's width
    pub fluid: bool,
}

/// Text drawn inside a button: icon, label and the focus brackets
pub fn button_text(model: &ButtonViewModel) -> String {
    let body = match model.icon {
        Some(icon) if model.label.is_empty() => icon.glyph().to_string(),
        Some(icon) => format!("{} {}", icon.glyph(), model.label),
        None => model.label.clone(),
    };
    if model.focused {
        format!("[{body}]")
    } else {
        format!(" {body} ")
    }
}

/// Single-line button with click handling
///
/// Uses `use_local_terminal_events`, so mouse coordinates are relative to
/// the button and clicks outside it are never delivered here. The button
/// does not decide what a click means: it reports its `Control` and the
/// panel reducer decides (an inert control simply emits nothing).
#[component]
pub fn Button(props: &ButtonProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let control = props.model.as_ref().map(|m| m.control);
    let on_press = props.on_press.clone();

    hooks.use_local_terminal_events({
        move |event| {
            if let TerminalEvent::FullscreenMouse(mouse_event) = event
                && let MouseEventKind::Down(_) = mouse_event.kind
                && let (Some(handler), Some(control)) = (on_press.as_ref(), control)
            {
                handler(control);
            }
        }
    });

    let Some(model) = props.model.as_ref() else {
        return element!(View).into_any();
    };

    let background = if model.selected {
        Some(theme.selected)
    } else if model.tone != Tone::Default {
        Some(theme.tone_color(model.tone))
    } else {
        None
    };
    let text_color = theme.tone_color(model.text_tone);

    element! {
        View(
            width: if props.fluid { Size::Percent(100.0) } else { Size::Auto },
            justify_content: if props.fluid {
                JustifyContent::Center
            } else {
                JustifyContent::Start
            },
            background_color: background,
            margin_right: 1,
        ) {
            Text(
                content: button_text(model),
                color: text_color,
                weight: if model.focused { Weight::Bold } else { Weight::Normal },
            )
        }
    }
    .into_any()
}
