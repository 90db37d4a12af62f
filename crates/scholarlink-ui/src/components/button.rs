//! Button Components
//!
//! - Button: variant/size driven, with a loading state
//! - IconButton: compact square action
//! - CloseButton: IconButton with an X glyph
//! - Spinner: inline loading indicator

use dioxus::prelude::*;
use scholarlink_core::style::{ButtonFlags, ButtonStyle, ButtonVariant, Size, Variant};

use super::join_class;

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: Size,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler, never called while loading or disabled
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner before the label and blocks interaction
    #[props(default = false)]
    pub loading: bool,
    #[props(default = false)]
    pub full_width: bool,
    /// Pill-shaped corners
    #[props(default = false)]
    pub rounded: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         size: Size::Lg,
///         loading: submitting(),
///         onclick: move |_| submit(),
///         "Apply"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let style = ButtonStyle::resolve(
        props.variant,
        props.size,
        ButtonFlags {
            full_width: props.full_width,
            rounded: props.rounded,
            loading: props.loading,
            disabled: props.disabled,
        },
    );
    let class = join_class(&style.class, props.class.as_deref());
    let css = style.record.to_css();
    let interactive = style.is_interactive();
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            style: "{css}",
            r#type: "{props.button_type}",
            disabled: !interactive,
            "aria-busy": if props.loading { "true" } else { "false" },
            onclick: move |_| {
                if !interactive {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            if props.loading {
                Spinner { size: props.size }
            }
            {props.children}
        }
    }
}

/// Inline loading indicator sized to match its control
#[component]
pub fn Spinner(#[props(default)] size: Size) -> Element {
    let class = format!("spinner spinner-{}", size.name());
    rsx! {
        span {
            class: "{class}",
            role: "status",
            "aria-label": "Loading",
        }
    }
}

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_large_primary_renders_disabled_with_spinner_and_label() {
        let html = dioxus_ssr::render_element(rsx! {
            Button {
                variant: ButtonVariant::from_name("primary"),
                size: Size::from_name("lg"),
                loading: true,
                "Submit application"
            }
        });

        assert!(html.contains("disabled"), "{html}");
        assert!(html.contains("aria-busy=\"true\""), "{html}");
        assert!(html.contains("spinner spinner-lg"), "{html}");
        assert!(html.contains("Submit application"), "{html}");
        assert!(html.contains("cursor: not-allowed"), "{html}");
    }

    #[test]
    fn unknown_variant_renders_primary() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::from_name("neon"), "Go" }
        });
        assert!(html.contains("btn btn-primary btn-md"), "{html}");
        assert!(!html.contains("spinner"), "{html}");
    }

    #[test]
    fn extra_classes_are_appended() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Ghost, class: "nav-link".to_string(), "Home" }
        });
        assert!(html.contains("btn btn-ghost btn-md nav-link"), "{html}");
    }
}
