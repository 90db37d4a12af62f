//! Form field styles (Input, TextArea, Select).

use super::{Size, StyleRecord, Variant};

/// Visual state of a form field
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum FieldState {
    #[default]
    Normal,
    /// An error message is shown next to the field
    Invalid,
    Disabled,
}

impl Variant for FieldState {
    const ALL: &'static [Self] = &[FieldState::Normal, FieldState::Invalid, FieldState::Disabled];

    fn name(self) -> &'static str {
        match self {
            FieldState::Normal => "normal",
            FieldState::Invalid => "invalid",
            FieldState::Disabled => "disabled",
        }
    }
}

impl FieldState {
    /// Disabled wins over an error: a disabled field cannot be corrected.
    pub fn from_props(has_error: bool, disabled: bool) -> Self {
        match (disabled, has_error) {
            (true, _) => FieldState::Disabled,
            (false, true) => FieldState::Invalid,
            (false, false) => FieldState::Normal,
        }
    }
}

pub struct FieldStyle;

impl FieldStyle {
    pub fn resolve(size: Size, state: FieldState) -> StyleRecord {
        let padding = match size {
            Size::Sm => "0.375rem 0.625rem",
            Size::Md => "0.5rem 0.75rem",
            Size::Lg => "0.75rem 1rem",
        };
        let record = StyleRecord::new()
            .padding(padding)
            .font_size(size.font_size())
            .radius("var(--radius-md)")
            .width("100%");

        match state {
            FieldState::Normal => record
                .background("var(--surface)")
                .foreground("var(--text)")
                .border("1px solid var(--border)")
                .shadow("none"),
            FieldState::Invalid => record
                .background("var(--surface)")
                .foreground("var(--text)")
                .border("1px solid var(--danger)")
                .shadow("0 0 0 3px var(--danger-soft)"),
            FieldState::Disabled => record
                .background("var(--surface-muted)")
                .foreground("var(--text-muted)")
                .border("1px solid var(--border)")
                .shadow("none")
                .with("cursor", "not-allowed"),
        }
    }
}
