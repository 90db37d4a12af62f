//! Apply Modal Component
//!
//! Statement and contact form for one opportunity. Validation messages show
//! inline; a valid submission waits out the simulated latency before the
//! parent receives the new application.

use dioxus::prelude::*;
use scholarlink_core::style::{ButtonVariant, ModalSize};
use scholarlink_core::validation::{FIELD_EMAIL, FIELD_STATEMENT, MIN_STATEMENT_CHARS};
use scholarlink_core::{Application, ApplicationForm, FieldErrors, OpportunityPost};
use scholarlink_ui::{Button, Input, Modal, TextArea};

use crate::context::use_submit_latency;

#[component]
pub fn ApplyModal(
    /// Post being applied to; `None` keeps the modal closed
    post: Option<OpportunityPost>,
    on_close: EventHandler<()>,
    on_submitted: EventHandler<Application>,
) -> Element {
    let latency = use_submit_latency();
    let mut statement = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut submitting = use_signal(|| false);

    let Some(post) = post else {
        return rsx! {};
    };

    let mut reset = move || {
        statement.set(String::new());
        email.set(String::new());
        errors.set(FieldErrors::default());
    };

    let handle_close = move |_| {
        if submitting() {
            return;
        }
        reset();
        on_close.call(());
    };

    let submit_post = post.clone();
    let handle_submit = move |_| {
        let form = ApplicationForm {
            statement: statement(),
            contact_email: email(),
        };
        let found = form.validate();
        if !found.is_empty() {
            tracing::debug!(fields = found.len(), "application form rejected");
            errors.set(found);
            return;
        }

        errors.set(FieldErrors::default());
        submitting.set(true);
        let post = submit_post.clone();
        spawn(async move {
            tokio::time::sleep(latency).await;
            let today = chrono::Local::now().date_naive();
            let application = Application::submit(&post, form.statement.trim(), today);
            tracing::info!(opportunity = %post.id, "application submitted");
            submitting.set(false);
            reset();
            on_submitted.call(application);
        });
    };

    let statement_error = errors.read().message(FIELD_STATEMENT).map(str::to_string);
    let email_error = errors.read().message(FIELD_EMAIL).map(str::to_string);
    let title = format!("Apply: {}", post.title);
    let hint = format!("At least {} characters", MIN_STATEMENT_CHARS);
    let busy = submitting();

    rsx! {
        Modal {
            open: true,
            on_close: handle_close,
            title: title,
            size: ModalSize::Md,
            close_on_backdrop: !busy,
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: busy,
                    onclick: handle_close,
                    "Cancel"
                }
                Button {
                    loading: busy,
                    onclick: handle_submit,
                    "Submit application"
                }
            },

            p { class: "muted", "{post.professor} \u{00B7} {post.department}" }
            TextArea {
                label: "Why are you a good fit?".to_string(),
                hint: hint,
                value: statement(),
                oninput: move |value| statement.set(value),
                error: statement_error,
                rows: 6,
                disabled: busy,
            }
            Input {
                label: "Contact email".to_string(),
                input_type: "email".to_string(),
                value: email(),
                oninput: move |value| email.set(value),
                placeholder: "you@university.edu".to_string(),
                error: email_error,
                disabled: busy,
            }
        }
    }
}
