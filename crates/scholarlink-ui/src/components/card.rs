//! Card Component
//!
//! Surface container with optional header and footer slots.

use dioxus::prelude::*;
use scholarlink_core::style::{CardStyle, CardVariant, Size};

use super::join_class;

/// Properties for the Card component
#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    #[props(default)]
    pub variant: CardVariant,
    /// Inner padding
    #[props(default)]
    pub padding: Size,
    /// Lift on hover; implied when `onclick` is set
    #[props(default = false)]
    pub hoverable: bool,
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub subtitle: Option<String>,
    /// Rendered right-aligned in the header row
    #[props(default)]
    pub header_action: Option<Element>,
    #[props(default)]
    pub footer: Option<Element>,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Styled surface
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         variant: CardVariant::Outlined,
///         title: "Protein folding lab".to_string(),
///         subtitle: "Biochemistry".to_string(),
///         p { "Help run crystallography experiments." }
///     }
/// }
/// ```
#[component]
pub fn Card(props: CardProps) -> Element {
    let clickable = props.onclick.is_some();
    let style = CardStyle::resolve(props.variant, props.padding, props.hoverable || clickable);
    let class = join_class(&style.class, props.class.as_deref());
    let css = style.record.to_css();
    let onclick = props.onclick;
    let has_header = props.title.is_some() || props.header_action.is_some();

    rsx! {
        div {
            class: "{class}",
            style: "{css}",
            role: if clickable { "button" } else { "region" },
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            if has_header {
                div { class: "card-header",
                    div { class: "card-heading",
                        if let Some(title) = &props.title {
                            h3 { class: "card-title", "{title}" }
                        }
                        if let Some(subtitle) = &props.subtitle {
                            p { class: "card-subtitle", "{subtitle}" }
                        }
                    }
                    if let Some(action) = props.header_action.clone() {
                        div { class: "card-header-action", {action} }
                    }
                }
            }
            div { class: "card-body", {props.children} }
            if let Some(footer) = props.footer.clone() {
                div { class: "card-footer", {footer} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_renders_title_and_body() {
        let html = dioxus_ssr::render_element(rsx! {
            Card {
                variant: CardVariant::Outlined,
                title: "Robotics capstone".to_string(),
                p { "Build a rover" }
            }
        });
        assert!(html.contains("card card-outlined"), "{html}");
        assert!(html.contains("Robotics capstone"), "{html}");
        assert!(html.contains("Build a rover"), "{html}");
        assert!(!html.contains("card-footer"), "{html}");
    }
}
