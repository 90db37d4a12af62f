//! Toast Notification Stack
//!
//! Renders the active notifications oldest-first. The owner of the queue
//! handles dismissal and expiry; this component only draws.

use dioxus::prelude::*;
use scholarlink_core::style::{ToastStyle, Variant};
use scholarlink_core::{Notification, NotificationId};

use super::CloseButton;

#[component]
pub fn ToastStack(
    /// Notifications in display order
    items: Vec<Notification>,
    on_dismiss: EventHandler<NotificationId>,
) -> Element {
    rsx! {
        div { class: "toast-stack", "aria-live": "polite",
            for item in items.iter() {
                {
                    let style = ToastStyle::resolve(item.kind);
                    let css = style.record.to_css();
                    let class = format!("toast toast-{}", item.kind.name());
                    let id = item.id;
                    rsx! {
                        div {
                            key: "{item.id}",
                            class: "{class}",
                            style: "{css}",
                            role: style.role,
                            span { class: "toast-icon", "{style.icon}" }
                            span { class: "toast-message", "{item.message}" }
                            CloseButton { onclick: move |_| on_dismiss.call(id) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarlink_core::{NotificationKind, NotificationQueue};
    use std::time::Duration;

    #[test]
    fn renders_in_insertion_order() {
        let mut queue = NotificationQueue::new();
        queue.show(NotificationKind::Success, "first saved", Duration::ZERO);
        queue.show(NotificationKind::Error, "then failed", Duration::ZERO);
        let items: Vec<Notification> = queue.iter().cloned().collect();

        let html = dioxus_ssr::render_element(rsx! {
            ToastStack { items: items, on_dismiss: move |_| {} }
        });

        let first = html.find("first saved").expect("first toast");
        let second = html.find("then failed").expect("second toast");
        assert!(first < second, "{html}");
        assert!(html.contains("toast toast-error"), "{html}");
        assert!(html.contains("role=\"alert\""), "{html}");
    }

    #[test]
    fn removed_item_is_not_rendered() {
        let mut queue = NotificationQueue::new();
        let shown = queue.show(NotificationKind::Info, "gone soon", Duration::from_secs(5));
        queue.remove(shown.id);
        let items: Vec<Notification> = queue.iter().cloned().collect();

        let html = dioxus_ssr::render_element(rsx! {
            ToastStack { items: items, on_dismiss: move |_| {} }
        });
        assert!(!html.contains("gone soon"), "{html}");
    }
}
