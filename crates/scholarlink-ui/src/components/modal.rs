//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. Clicking the backdrop or pressing
//! Escape calls `on_close`; the parent owns the open flag.

use dioxus::prelude::*;
use scholarlink_core::style::{ModalSize, ModalStyle};

use super::CloseButton;

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// Whether to show the modal
    pub open: bool,
    pub on_close: EventHandler<()>,
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub size: ModalSize,
    /// Close when the backdrop is clicked
    #[props(default = true)]
    pub close_on_backdrop: bool,
    #[props(default)]
    pub footer: Option<Element>,
    pub children: Element,
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         open: show_apply(),
///         on_close: move |_| show_apply.set(false),
///         title: "Apply".to_string(),
///         ApplyForm { .. }
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let css = ModalStyle::resolve(props.size).to_css();
    let on_close = props.on_close;
    let close_on_backdrop = props.close_on_backdrop;

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onclick: move |_| {
                if close_on_backdrop {
                    on_close.call(());
                }
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                style: "{css}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    if let Some(title) = &props.title {
                        h2 { class: "modal-title", "{title}" }
                    }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                div { class: "modal-body", {props.children} }
                if let Some(footer) = props.footer.clone() {
                    div { class: "modal-actions", {footer} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_modal_renders_nothing() {
        let html = dioxus_ssr::render_element(rsx! {
            Modal { open: false, on_close: move |_| {}, p { "hidden body" } }
        });
        assert!(!html.contains("hidden body"), "{html}");
    }

    #[test]
    fn open_modal_renders_dialog() {
        let html = dioxus_ssr::render_element(rsx! {
            Modal {
                open: true,
                on_close: move |_| {},
                title: "Apply".to_string(),
                size: ModalSize::Sm,
                p { "body text" }
            }
        });
        assert!(html.contains("role=\"dialog\""), "{html}");
        assert!(html.contains("max-width: 24rem"), "{html}");
        assert!(html.contains("body text"), "{html}");
    }
}
