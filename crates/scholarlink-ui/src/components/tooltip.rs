//! Tooltip Component
//!
//! Shows a short label next to its child on hover or keyboard focus.

use dioxus::prelude::*;
use scholarlink_core::style::{TooltipPlacement, TooltipStyle};

#[component]
pub fn Tooltip(
    /// Tooltip text
    text: String,
    #[props(default)] placement: TooltipPlacement,
    children: Element,
) -> Element {
    let mut visible = use_signal(|| false);
    let css = TooltipStyle::resolve(placement).to_css();

    rsx! {
        span {
            class: "tooltip-anchor",
            style: "position: relative; display: inline-flex;",
            onmouseenter: move |_| visible.set(true),
            onmouseleave: move |_| visible.set(false),
            onfocusin: move |_| visible.set(true),
            onfocusout: move |_| visible.set(false),
            {children}
            if visible() {
                span { class: "tooltip", style: "{css}", role: "tooltip", "{text}" }
            }
        }
    }
}
