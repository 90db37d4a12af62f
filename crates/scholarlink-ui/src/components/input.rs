//! Input Field Components
//!
//! Text inputs and textareas. An `error` prop switches the field to its
//! invalid style and shows the message underneath.

use dioxus::prelude::*;
use scholarlink_core::style::{FieldState, FieldStyle, Size};

use super::{join_class, next_element_id};

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Hint text after the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Validation message shown below the field
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub size: Size,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Contact email".to_string(),
///         input_type: "email".to_string(),
///         error: errors().message("contact_email").map(str::to_string),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let generated = use_hook(|| next_element_id("input"));
    let id = props.id.clone().unwrap_or(generated);
    let error_id = format!("{}-error", id);
    let state = FieldState::from_props(props.error.is_some(), props.disabled);
    let css = FieldStyle::resolve(props.size, state).to_css();
    let class = join_class("input-field", props.class.as_deref());
    let invalid = state == FieldState::Invalid;

    rsx! {
        div { class: "form-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: props.hint.clone() }
            input {
                id: "{id}",
                class: "{class}",
                style: "{css}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                "aria-describedby": if invalid { error_id.as_str() } else { "" },
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldMessage { id: error_id.clone(), message: props.error.clone() }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub hint: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default)]
    pub size: Size,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let generated = use_hook(|| next_element_id("textarea"));
    let id = props.id.clone().unwrap_or(generated);
    let error_id = format!("{}-error", id);
    let state = FieldState::from_props(props.error.is_some(), props.disabled);
    let css = FieldStyle::resolve(props.size, state).to_css();
    let invalid = state == FieldState::Invalid;

    rsx! {
        div { class: "form-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: props.hint.clone() }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                style: "{css}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                "aria-invalid": if invalid { "true" } else { "false" },
                "aria-describedby": if invalid { error_id.as_str() } else { "" },
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldMessage { id: error_id.clone(), message: props.error.clone() }
        }
    }
}

/// Label row shared by the field components
#[component]
pub fn FieldLabel(for_id: String, label: Option<String>, hint: Option<String>) -> Element {
    rsx! {
        if let Some(label) = label {
            label {
                class: "input-label",
                r#for: "{for_id}",
                "{label}"
                if let Some(hint) = hint {
                    span { class: "input-hint", " ({hint})" }
                }
            }
        }
    }
}

/// Inline validation message; renders nothing without a message
#[component]
pub fn FieldMessage(id: String, message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p {
                id: "{id}",
                class: "field-error",
                role: "alert",
                "{message}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_with_error_shows_message() {
        let html = dioxus_ssr::render_element(rsx! {
            Input {
                value: "ada@".to_string(),
                oninput: move |_| {},
                label: "Contact email".to_string(),
                error: "Enter a valid email address".to_string(),
                id: "email".to_string(),
            }
        });
        assert!(html.contains("Enter a valid email address"), "{html}");
        assert!(html.contains("aria-invalid=\"true\""), "{html}");
        assert!(html.contains("var(--danger)"), "{html}");
        assert!(html.contains("email-error"), "{html}");
    }

    #[test]
    fn input_without_error_has_no_message() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { value: String::new(), oninput: move |_| {} }
        });
        assert!(!html.contains("field-error"), "{html}");
    }
}
