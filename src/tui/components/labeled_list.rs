//! Label/value rows with an aligned label column

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Width of the label column, in cells
pub const LABEL_WIDTH: u16 = 20;

/// Props for the LabeledItem component
#[derive(Default, Props)]
pub struct LabeledItemProps<'a> {
    pub label: String,
    /// Colour of the value text when `children` is empty
    pub color: Option<Color>,
    /// Plain value text, used when there are no children
    pub value: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// One row: dimmed label on the left, value or children on the right
#[component]
pub fn LabeledItem<'a>(props: &mut LabeledItemProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let value = props.value.clone();
    let value_color = props.color.unwrap_or(theme.text);

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Row) {
            View(width: Size::Length(u32::from(LABEL_WIDTH)), flex_shrink: 0.0) {
                Text(content: format!("{}:", props.label), color: theme.text_dimmed)
            }
            View(flex_grow: 1.0, flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap) {
                #(value.map(|value| element! {
                    Text(content: value, color: value_color)
                }))
                #(std::mem::take(&mut props.children))
            }
        }
    }
}
