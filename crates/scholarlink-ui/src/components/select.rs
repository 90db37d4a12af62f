//! Select Component

use dioxus::prelude::*;
use scholarlink_core::style::{FieldState, FieldStyle, Size};

use super::{next_element_id, FieldLabel, FieldMessage};

/// One `<option>`
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    /// Currently selected value
    pub value: String,
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Leading option with an empty value
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub size: Size,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Native select styled like the other fields
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Select {
///         options: vec![SelectOption::new("", "All kinds"), SelectOption::new("research", "Research")],
///         value: kind(),
///         onchange: move |v| kind.set(v),
///     }
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    let generated = use_hook(|| next_element_id("select"));
    let id = props.id.clone().unwrap_or(generated);
    let error_id = format!("{}-error", id);
    let state = FieldState::from_props(props.error.is_some(), props.disabled);
    let css = FieldStyle::resolve(props.size, state).to_css();

    rsx! {
        div { class: "form-field",
            FieldLabel { for_id: id.clone(), label: props.label.clone(), hint: None }
            select {
                id: "{id}",
                class: "input-field select",
                style: "{css}",
                disabled: props.disabled,
                "aria-invalid": if state == FieldState::Invalid { "true" } else { "false" },
                onchange: move |e| props.onchange.call(e.value()),
                if let Some(placeholder) = &props.placeholder {
                    option { value: "", selected: props.value.is_empty(), "{placeholder}" }
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
            FieldMessage { id: error_id.clone(), message: props.error.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_renders_options() {
        let html = dioxus_ssr::render_element(rsx! {
            Select {
                options: vec![
                    SelectOption::new("research", "Research"),
                    SelectOption::new("project", "Project"),
                ],
                value: "project".to_string(),
                onchange: move |_| {},
                placeholder: "All kinds".to_string(),
            }
        });
        assert!(html.contains("All kinds"), "{html}");
        assert!(html.contains("Research"), "{html}");
        assert!(html.contains("Project"), "{html}");
    }
}
