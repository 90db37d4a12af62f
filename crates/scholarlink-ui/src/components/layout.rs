//! Layout helpers: Grid and Flex.

use dioxus::prelude::*;
use scholarlink_core::style::{Align, FlexDirection, FlexStyle, GridStyle, Justify, Size};

use super::join_class;

/// Equal-width column grid; columns are clamped to 1..=12
#[component]
pub fn Grid(
    #[props(default = 3)] columns: u8,
    #[props(default)] gap: Size,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let css = GridStyle::resolve(columns, gap).to_css();
    let class = join_class("grid", class.as_deref());

    rsx! {
        div { class: "{class}", style: "{css}", {children} }
    }
}

#[component]
pub fn Flex(
    #[props(default)] direction: FlexDirection,
    #[props(default)] align: Align,
    #[props(default)] justify: Justify,
    #[props(default)] gap: Size,
    #[props(default = false)] wrap: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let css = FlexStyle::resolve(direction, align, justify, gap, wrap).to_css();
    let class = join_class("flex", class.as_deref());

    rsx! {
        div { class: "{class}", style: "{css}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_renders_column_template() {
        let html = dioxus_ssr::render_element(rsx! {
            Grid { columns: 2, span { "a" } span { "b" } }
        });
        assert!(html.contains("repeat(2, minmax(0, 1fr))"), "{html}");
    }
}
