//! Review Panel Component
//!
//! Faculty view of incoming applicants with status tabs and a post filter.

use dioxus::prelude::*;
use scholarlink_core::style::{Size, Variant};
use scholarlink_core::{ApplicantId, Decision, OpportunityId, StatusFilter};
use scholarlink_ui::{Grid, Select, SelectOption, TabItem, Tabs};

use super::ApplicantCard;
use crate::context::{use_board, use_notifier, use_opportunities};

#[component]
pub fn ReviewPanel() -> Element {
    let board = use_board();
    let opportunities = use_opportunities();
    let notifier = use_notifier();

    let mut status_filter = use_signal(StatusFilter::default);
    let mut post_filter = use_signal(String::new);

    let tally = board.read().tally();
    let tabs: Vec<TabItem> = StatusFilter::ALL
        .iter()
        .map(|f| TabItem::new(f.name(), f.label()).with_count(tally.count(*f)))
        .collect();

    let post_options: Vec<SelectOption> = opportunities
        .read()
        .iter()
        .map(|o| SelectOption::new(o.id.as_str(), o.title.clone()))
        .collect();

    let selected_post = post_filter();
    let post_id = (!selected_post.is_empty()).then(|| OpportunityId::new(selected_post.clone()));

    let visible: Vec<_> = board
        .read()
        .filter(status_filter(), post_id.as_ref())
        .into_iter()
        .map(|a| {
            let title = opportunities
                .read()
                .iter()
                .find(|o| o.id == a.opportunity_id)
                .map(|o| o.title.clone())
                .unwrap_or_default();
            (a.clone(), title)
        })
        .collect();

    let decide = move |id: &ApplicantId, name: &str, decision: Decision| {
        let mut board = board;
        let result = board.write().decide(id, decision);
        match result {
            Ok(status) => {
                notifier.success(format!("{} marked {}", name, status));
            }
            Err(e) => {
                notifier.error(e.to_string());
            }
        }
    };

    let active_tab = status_filter().name().to_string();

    rsx! {
        section { class: "review-panel",
            div { class: "section-toolbar",
                Tabs {
                    tabs: tabs,
                    active: active_tab,
                    on_change: move |name: String| status_filter.set(StatusFilter::from_name(&name)),
                }
                Select {
                    options: post_options,
                    value: selected_post,
                    placeholder: "All posts".to_string(),
                    size: Size::Sm,
                    onchange: move |value| post_filter.set(value),
                }
            }

            if visible.is_empty() {
                p { class: "empty-state", "No applicants match these filters." }
            } else {
                Grid { columns: 2,
                    for (applicant, title) in visible {
                        {
                            let key = applicant.id.to_string();
                            let id = applicant.id.clone();
                            let name = applicant.name.clone();
                            rsx! {
                                ApplicantCard {
                                    key: "{key}",
                                    applicant: applicant,
                                    opportunity_title: title,
                                    on_decide: move |decision| decide(&id, &name, decision),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
