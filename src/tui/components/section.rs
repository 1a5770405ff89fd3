//! Titled, bordered section with optional header buttons

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Section component
#[derive(Default, Props)]
pub struct SectionProps<'a> {
    /// Title drawn in the top-left corner
    pub title: Option<String>,
    /// Elements drawn on the right of the title row
    pub buttons: Option<Vec<AnyElement<'a>>>,
    /// Section body
    pub children: Vec<AnyElement<'a>>,
    /// Grow to fill the remaining height
    pub fill: bool,
}

/// Bordered section with a title row
#[component]
pub fn Section<'a>(props: &mut SectionProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let has_header = props.title.is_some() || props.buttons.is_some();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_grow: if props.fill { 1.0 } else { 0.0 },
            flex_shrink: if props.fill { 1.0 } else { 0.0 },
            overflow: Overflow::Hidden,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            #(if has_header {
                Some(element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::SpaceBetween,
                    ) {
                        Text(
                            content: props.title.clone().unwrap_or_default(),
                            color: theme.text,
                            weight: Weight::Bold,
                        )
                        View(flex_direction: FlexDirection::Row) {
                            #(std::mem::take(&mut props.buttons).unwrap_or_default())
                        }
                    }
                })
            } else {
                None
            })
            #(std::mem::take(&mut props.children))
        }
    }
}
