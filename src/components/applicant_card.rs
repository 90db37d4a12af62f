//! Applicant Card Component
//!
//! One applicant in the review panel. Accept/Reject only render while the
//! applicant is still pending, so a decided applicant cannot be clicked twice.

use dioxus::prelude::*;
use scholarlink_core::style::{ButtonVariant, CardVariant, Size};
use scholarlink_core::{Applicant, Decision};
use scholarlink_ui::{Avatar, Button, Card, StatusBadge};

#[component]
pub fn ApplicantCard(
    applicant: Applicant,
    /// Title of the post they applied to
    opportunity_title: String,
    on_decide: EventHandler<Decision>,
) -> Element {
    let status = applicant.status;
    let details = format!(
        "{} \u{00B7} Year {} \u{00B7} GPA {:.2}",
        applicant.program, applicant.year, applicant.gpa
    );

    rsx! {
        Card {
            variant: CardVariant::Outlined,
            title: applicant.name.clone(),
            subtitle: opportunity_title,
            header_action: rsx! { StatusBadge { status: status } },
            footer: status.is_actionable().then(|| {
                rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: Size::Sm,
                        onclick: move |_| on_decide.call(Decision::Reject),
                        "Reject"
                    }
                    Button {
                        size: Size::Sm,
                        onclick: move |_| on_decide.call(Decision::Accept),
                        "Accept"
                    }
                }
            }),

            div { class: "applicant-summary",
                style: "display: flex; gap: 0.75rem; align-items: center;",
                Avatar { name: applicant.name.clone(), src: applicant.avatar_url.clone() }
                div {
                    p { class: "muted", "{details}" }
                    p { class: "muted", "{applicant.email}" }
                }
            }
            p { "{applicant.statement}" }
        }
    }
}
