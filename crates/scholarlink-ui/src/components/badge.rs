//! Badge Components
//!
//! Small labels for tags and review status.

use dioxus::prelude::*;
use scholarlink_core::style::{BadgeStyle, BadgeVariant, Size, Variant};
use scholarlink_core::ReviewStatus;

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub variant: BadgeVariant,
    #[props(default = Size::Sm)]
    pub size: Size,
    /// Border only, no fill
    #[props(default = false)]
    pub outlined: bool,
    pub children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let css = BadgeStyle::resolve(props.variant, props.size, props.outlined).to_css();
    let class = format!("badge badge-{}", props.variant.name());

    rsx! {
        span { class: "{class}", style: "{css}", {props.children} }
    }
}

/// Review status rendered with its status color
#[component]
pub fn StatusBadge(status: ReviewStatus) -> Element {
    let label = status.label();
    rsx! {
        Badge { variant: status.badge_variant(), "{label}" }
    }
}
