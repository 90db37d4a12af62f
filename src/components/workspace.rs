//! Workspace View
//!
//! The single assembled view: a header with review counts and tabs that
//! switch between the faculty, student and primitives sections.

use dioxus::prelude::*;
use scholarlink_core::style::{BadgeVariant, Size};
use scholarlink_ui::{Badge, TabItem, Tabs};

use super::{ApplicationsList, OpportunityList, ReviewPanel, Showcase};
use crate::context::{use_applications, use_board};

const SECTION_REVIEW: &str = "review";
const SECTION_OPPORTUNITIES: &str = "opportunities";
const SECTION_APPLICATIONS: &str = "applications";
const SECTION_SHOWCASE: &str = "components";

#[component]
pub fn Workspace() -> Element {
    let board = use_board();
    let applications = use_applications();
    let mut section = use_signal(|| SECTION_REVIEW.to_string());

    let tally = board.read().tally();
    let pending = format!("{} pending", tally.pending);
    let accepted = format!("{} accepted", tally.accepted);

    let tabs = vec![
        TabItem::new(SECTION_REVIEW, "Review applicants").with_count(tally.total()),
        TabItem::new(SECTION_OPPORTUNITIES, "Opportunities"),
        TabItem::new(SECTION_APPLICATIONS, "My applications").with_count(applications.read().len()),
        TabItem::new(SECTION_SHOWCASE, "Components"),
    ];
    let active = section();

    rsx! {
        main { class: "workspace",
            header { class: "workspace-header",
                div {
                    h1 { "ScholarLink" }
                    p { class: "muted", "Research and teaching opportunities across campus" }
                }
                div { style: "display: flex; gap: 0.5rem;",
                    Badge { variant: BadgeVariant::Warning, size: Size::Md, "{pending}" }
                    Badge { variant: BadgeVariant::Success, size: Size::Md, "{accepted}" }
                }
            }

            Tabs {
                tabs: tabs,
                active: active.clone(),
                on_change: move |id| section.set(id),
            }

            {
                match active.as_str() {
                    SECTION_OPPORTUNITIES => rsx! { OpportunityList {} },
                    SECTION_APPLICATIONS => rsx! { ApplicationsList {} },
                    SECTION_SHOWCASE => rsx! { Showcase {} },
                    _ => rsx! { ReviewPanel {} },
                }
            }
        }
    }
}
