//! Multi-line text editor component
//!
//! Wraps iocraft's multiline TextInput. The text itself lives in the
//! panel state, so every keystroke is reported through `on_change` and
//! the value comes back in on the next render.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the TextEditor component
#[derive(Default, Props)]
pub struct TextEditorProps {
    /// Current text
    pub value: String,

    /// Shown dimmed while the value is empty and the editor is not focused
    pub placeholder: Option<String>,

    /// Whether the editor receives keystrokes
    pub has_focus: bool,

    /// Highlight the border (keyboard focus without editing)
    pub highlighted: bool,

    /// Called with the full new text on every change
    pub on_change: Option<Handler<String>>,

    /// Called when the editor is clicked
    pub on_click: Option<Handler<()>>,

    /// Height in rows, including the border
    pub height: Option<u16>,
}

/// Bordered multi-line text editor
#[component]
pub fn TextEditor(props: &TextEditorProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let on_click = props.on_click.clone();
    let on_change = props.on_change.clone();

    let mut handle = hooks.use_ref_default::<TextInputHandle>();
    let initial_len = props.value.len();
    hooks.use_effect(move || handle.write().set_cursor_offset(initial_len), ());

    hooks.use_local_terminal_events(move |event| {
        if let TerminalEvent::FullscreenMouse(mouse_event) = event
            && let MouseEventKind::Down(_) = mouse_event.kind
            && let Some(handler) = on_click.as_ref()
        {
            handler(());
        }
    });

    let show_placeholder = props.value.is_empty() && !props.has_focus;
    let border_color = if props.has_focus || props.highlighted {
        theme.border_focused
    } else {
        theme.border
    };

    element! {
        View(
            width: 100pct,
            height: props.height.map(|h| Size::Length(u32::from(h))).unwrap_or(Size::Auto),
            flex_grow: if props.height.is_some() { 0.0 } else { 1.0 },
            overflow: Overflow::Hidden,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            #(Some(if show_placeholder {
                element! {
                    Text(
                        content: props.placeholder.clone().unwrap_or_default(),
                        color: theme.text_dimmed,
                    )
                }
                .into_any()
            } else {
                element! {
                    TextInput(
                        has_focus: props.has_focus,
                        value: props.value.clone(),
                        on_change: move |new_value: String| {
                            if let Some(handler) = on_change.as_ref() {
                                handler(new_value);
                            }
                        },
                        multiline: true,
                        cursor_color: Some(theme.highlight),
                        color: Some(theme.text),
                        handle,
                    )
                }
                .into_any()
            }))
        }
    }
}
