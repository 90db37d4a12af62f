//! Student's submitted applications, filterable by review status.

use dioxus::prelude::*;
use scholarlink_core::style::{CardVariant, TabsVariant, Variant};
use scholarlink_core::{StatusFilter, StatusTally};
use scholarlink_ui::{Card, StatusBadge, TabItem, Tabs};

use crate::context::use_applications;

#[component]
pub fn ApplicationsList() -> Element {
    let applications = use_applications();
    let mut filter = use_signal(StatusFilter::default);

    let tally = StatusTally::from_statuses(applications.read().iter().map(|a| a.status));
    let tabs: Vec<TabItem> = StatusFilter::ALL
        .iter()
        .map(|f| TabItem::new(f.name(), f.label()).with_count(tally.count(*f)))
        .collect();

    let current = filter();
    let visible: Vec<_> = applications
        .read()
        .iter()
        .filter(|a| current.matches(a.status))
        .cloned()
        .collect();

    rsx! {
        section { class: "applications-list",
            Tabs {
                tabs: tabs,
                active: current.name().to_string(),
                variant: TabsVariant::Pills,
                on_change: move |name: String| filter.set(StatusFilter::from_name(&name)),
            }

            if visible.is_empty() {
                p { class: "empty-state", "Nothing here yet." }
            }

            for application in visible {
                {
                    let submitted = format!("Submitted {}", application.submitted_on.format("%b %-d, %Y"));
                    rsx! {
                        Card {
                            key: "{application.id}",
                            variant: CardVariant::Flat,
                            title: application.opportunity_title.clone(),
                            subtitle: submitted,
                            header_action: rsx! { StatusBadge { status: application.status } },
                            p { class: "muted", "{application.statement}" }
                        }
                    }
                }
            }
        }
    }
}
