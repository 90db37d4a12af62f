//! Tabs Component
//!
//! A row of tab triggers; the parent holds the active id.

use dioxus::prelude::*;
use scholarlink_core::style::{TabStyle, TabsVariant, Variant};

/// One tab trigger
#[derive(Clone, PartialEq, Debug)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    /// Optional count shown after the label
    pub count: Option<usize>,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TabsProps {
    pub tabs: Vec<TabItem>,
    /// Id of the active tab
    pub active: String,
    pub on_change: EventHandler<String>,
    #[props(default)]
    pub variant: TabsVariant,
}

#[component]
pub fn Tabs(props: TabsProps) -> Element {
    let class = format!("tabs tabs-{}", props.variant.name());

    rsx! {
        div { class: "{class}", role: "tablist",
            for tab in props.tabs.iter() {
                {
                    let is_active = tab.id == props.active;
                    let css = TabStyle::resolve(props.variant, is_active).to_css();
                    let id = tab.id.clone();
                    let on_change = props.on_change;
                    rsx! {
                        button {
                            key: "{tab.id}",
                            class: if is_active { "tab active" } else { "tab" },
                            style: "{css}",
                            role: "tab",
                            r#type: "button",
                            "aria-selected": if is_active { "true" } else { "false" },
                            onclick: move |_| on_change.call(id.clone()),
                            "{tab.label}"
                            if let Some(count) = tab.count {
                                span { class: "tab-count", " {count}" }
                            }
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

    #[test]
    fn active_tab_is_selected() {
        let html = dioxus_ssr::render_element(rsx! {
            Tabs {
                tabs: vec![TabItem::new("all", "All").with_count(3), TabItem::new("pending", "Pending")],
                active: "pending".to_string(),
                on_change: move |_| {},
            }
        });
        assert!(html.contains("aria-selected=\"true\""), "{html}");
        assert!(html.contains("tab-count"), "{html}");
        assert!(html.contains("tabs tabs-underline"), "{html}");
    }
}
