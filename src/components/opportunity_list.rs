//! Opportunity List Component
//!
//! Student view of posted opportunities: search box, kind filter, and a card
//! per post with an Apply action.

use dioxus::prelude::*;
use scholarlink_core::style::{BadgeVariant, ButtonVariant, CardVariant, Size, TooltipPlacement, Variant};
use scholarlink_core::{filter_opportunities, Application, OpportunityKind, OpportunityPost, OpportunityQuery};
use scholarlink_ui::{Badge, Button, Card, Grid, Input, Select, SelectOption, Tooltip};

use super::ApplyModal;
use crate::context::{use_applications, use_notifier, use_opportunities};

#[component]
pub fn OpportunityList() -> Element {
    let opportunities = use_opportunities();
    let mut applications = use_applications();
    let notifier = use_notifier();

    let mut search = use_signal(String::new);
    let mut kind = use_signal(String::new);
    let mut applying = use_signal(|| Option::<OpportunityPost>::None);

    let query = OpportunityQuery {
        kind: (!kind().is_empty()).then(|| OpportunityKind::from_name(&kind())),
        text: search(),
    };

    let today = chrono::Local::now().date_naive();
    let posts: Vec<OpportunityPost> = filter_opportunities(&opportunities.read(), &query)
        .into_iter()
        .cloned()
        .collect();

    let kind_options: Vec<SelectOption> = OpportunityKind::ALL
        .iter()
        .map(|k| SelectOption::new(k.name(), k.label()))
        .collect();

    let on_submitted = move |application: Application| {
        let title = application.opportunity_title.clone();
        applications.write().push(application);
        applying.set(None);
        notifier.success(format!("Application sent for {}", title));
    };

    rsx! {
        section { class: "opportunity-list",
            div { class: "section-toolbar",
                Input {
                    label: "Search".to_string(),
                    value: search(),
                    oninput: move |value| search.set(value),
                    placeholder: "Title, department, professor or tag".to_string(),
                }
                Select {
                    label: "Type".to_string(),
                    options: kind_options,
                    value: kind(),
                    placeholder: "All types".to_string(),
                    onchange: move |value| kind.set(value),
                }
            }

            if posts.is_empty() {
                p { class: "empty-state", "No opportunities match your search." }
            } else {
                Grid { columns: 2,
                    for post in posts {
                        OpportunityCard {
                            key: "{post.id}",
                            closed: post.is_closed(today),
                            post: post.clone(),
                            on_apply: move |post| applying.set(Some(post)),
                        }
                    }
                }
            }

            ApplyModal {
                post: applying(),
                on_close: move |_| applying.set(None),
                on_submitted: on_submitted,
            }
        }
    }
}

#[component]
fn OpportunityCard(post: OpportunityPost, closed: bool, on_apply: EventHandler<OpportunityPost>) -> Element {
    let subtitle = format!("{} \u{00B7} {}", post.professor, post.department);
    let deadline = format!("Deadline {}", post.deadline.format("%b %-d, %Y"));
    let seats = format!("{} open position(s)", post.positions);
    let kind_label = post.kind.label();
    let compensation = post.compensation.label();
    let apply_post = post.clone();
    let apply_variant = if closed { ButtonVariant::Outline } else { ButtonVariant::Primary };

    rsx! {
        Card {
            variant: CardVariant::Elevated,
            hoverable: !closed,
            title: post.title.clone(),
            subtitle: subtitle,
            header_action: rsx! {
                Badge { variant: BadgeVariant::Info, "{kind_label}" }
            },
            footer: rsx! {
                Button {
                    variant: apply_variant,
                    size: Size::Sm,
                    disabled: closed,
                    onclick: move |_| on_apply.call(apply_post.clone()),
                    if closed { "Closed" } else { "Apply" }
                }
            },

            p { "{post.description}" }
            div { style: "display: flex; gap: 0.5rem; flex-wrap: wrap; align-items: center;",
                Badge { variant: BadgeVariant::Neutral, outlined: true, "{compensation}" }
                for tag in post.tags.iter() {
                    Badge { key: "{tag}", variant: BadgeVariant::Primary, outlined: true, "#{tag}" }
                }
                Tooltip { text: seats, placement: TooltipPlacement::Top,
                    span { class: "muted", "{deadline}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scholarlink_core::{Compensation, OpportunityId};

    fn post() -> OpportunityPost {
        OpportunityPost {
            id: OpportunityId::new("opp-1"),
            title: "Wetland Sampling".to_string(),
            professor: "Dr. Okafor".to_string(),
            department: "Biology".to_string(),
            kind: OpportunityKind::Project,
            description: "Collect samples.".to_string(),
            tags: vec!["ecology".to_string()],
            deadline: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            positions: 1,
            compensation: Compensation::Credit,
        }
    }

    #[test]
    fn closed_post_disables_apply() {
        let post = post();
        let html = dioxus_ssr::render_element(rsx! {
            OpportunityCard { post: post, closed: true, on_apply: move |_| {} }
        });
        assert!(html.contains("Closed"), "{html}");
        assert!(html.contains("disabled"), "{html}");
    }

    #[test]
    fn open_post_renders_tags_and_kind() {
        let post = post();
        let html = dioxus_ssr::render_element(rsx! {
            OpportunityCard { post: post, closed: false, on_apply: move |_| {} }
        });
        assert!(html.contains("Apply"), "{html}");
        assert!(html.contains("#ecology"), "{html}");
        assert!(html.contains("Project"), "{html}");
        assert!(html.contains("Deadline Mar 1, 2026"), "{html}");
    }
}
