//! Primitives Showcase
//!
//! Every variant and size of the design primitives, plus buttons that raise
//! each notification kind.

use std::time::Duration;

use dioxus::prelude::*;
use scholarlink_core::style::{
    AvatarShape, BadgeVariant, ButtonVariant, CardVariant, ModalSize, Size, TooltipPlacement,
    Variant,
};
use scholarlink_core::NotificationKind;
use scholarlink_ui::{Avatar, Badge, Button, Card, Flex, Grid, Modal, Tooltip};

use crate::context::use_notifier;

#[component]
pub fn Showcase() -> Element {
    let notifier = use_notifier();
    let mut modal_open = use_signal(|| false);
    let mut busy = use_signal(|| false);

    rsx! {
        section { class: "showcase",
            Card { title: "Buttons".to_string(),
                Flex { gap: Size::Sm, wrap: true,
                    for variant in ButtonVariant::ALL.iter().copied() {
                        {
                            let name = variant.name();
                            rsx! { Button { key: "{name}", variant: variant, "{name}" } }
                        }
                    }
                }
                Flex { gap: Size::Sm, wrap: true,
                    for size in Size::ALL.iter().copied() {
                        {
                            let name = size.name();
                            rsx! { Button { key: "{name}", size: size, variant: ButtonVariant::Outline, "Size {name}" } }
                        }
                    }
                    LoadingDemo { loading: busy(), on_toggle: move |_| busy.toggle() }
                    Button { disabled: true, "Disabled" }
                    Button { rounded: true, variant: ButtonVariant::Secondary, "Rounded" }
                }
            }

            Grid { columns: 3,
                for variant in CardVariant::ALL.iter().copied() {
                    {
                        let name = variant.name();
                        rsx! {
                            Card { key: "{name}", variant: variant, hoverable: true, title: name.to_string(),
                                p { class: "muted", "Card variant" }
                            }
                        }
                    }
                }
            }

            Card { title: "Badges and avatars".to_string(),
                Flex { gap: Size::Sm, wrap: true,
                    for variant in BadgeVariant::ALL.iter().copied() {
                        {
                            let name = variant.name();
                            rsx! { Badge { key: "{name}", variant: variant, "{name}" } }
                        }
                    }
                }
                Flex { gap: Size::Md,
                    Avatar { name: "Grace Hopper".to_string(), size: Size::Sm }
                    Avatar { name: "Ada Lovelace".to_string(), shape: AvatarShape::Rounded }
                    Avatar {
                        name: "Broken Image".to_string(),
                        src: "https://example.invalid/missing.png".to_string(),
                        size: Size::Lg,
                        shape: AvatarShape::Square,
                    }
                    Tooltip { text: "Shows on hover or focus".to_string(), placement: TooltipPlacement::Right,
                        Button { variant: ButtonVariant::Ghost, "Hover me" }
                    }
                }
            }

            Card { title: "Notifications".to_string(),
                Flex { gap: Size::Sm, wrap: true,
                    for kind in NotificationKind::ALL.iter().copied() {
                        {
                            let name = kind.name();
                            rsx! {
                                Button {
                                    key: "{name}",
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        notifier.show(kind, format!("This is a {} notification", name), Duration::from_secs(4));
                                    },
                                    "Show {name}"
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            notifier.show(NotificationKind::Error, "Failed", Duration::ZERO);
                        },
                        "Sticky error"
                    }
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| modal_open.set(true), "Open modal" }
                }
            }

            Modal {
                open: modal_open(),
                on_close: move |_| modal_open.set(false),
                title: "Small modal".to_string(),
                size: ModalSize::Sm,
                p { "Press Escape or click outside to close." }
            }
        }
    }
}

/// A loading button next to the control that drives it. A loading button
/// ignores clicks, so it cannot switch itself back off.
#[component]
fn LoadingDemo(loading: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        Button { loading: loading, "Saving" }
        Button {
            variant: ButtonVariant::Ghost,
            onclick: move |_| on_toggle.call(()),
            if loading { "Stop loading" } else { "Start loading" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_toggle_stays_clickable_while_loading() {
        let html = dioxus_ssr::render_element(rsx! {
            LoadingDemo { loading: true, on_toggle: move |_| {} }
        });
        assert!(html.contains("Stop loading"), "{html}");
        assert_eq!(html.matches("btn-loading").count(), 1, "{html}");
        assert_eq!(html.matches("not-allowed").count(), 1, "{html}");
    }
}
