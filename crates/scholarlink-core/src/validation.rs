//! Inline form validation.
//!
//! Validation produces one message per failing field. The UI shows the
//! message next to the field it belongs to; nothing is raised.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};

/// Minimum characters in a statement of interest
pub const MIN_STATEMENT_CHARS: usize = 50;

pub const FIELD_STATEMENT: &str = "statement";
pub const FIELD_EMAIL: &str = "contact_email";

/// Messages keyed by field name
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message to display beside `field`, if any
    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Collapse into a single error for callers that want a `Result`
    pub fn into_result(self) -> CoreResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        let summary = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err(CoreError::Validation(summary))
    }
}

/// The apply form shown in the opportunity modal
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ApplicationForm {
    pub statement: String,
    pub contact_email: String,
}

impl ApplicationForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let statement_len = self.statement.trim().chars().count();
        if statement_len == 0 {
            errors.insert(FIELD_STATEMENT, "Tell the lab why you are interested");
        } else if statement_len < MIN_STATEMENT_CHARS {
            errors.insert(
                FIELD_STATEMENT,
                format!(
                    "Statement must be at least {MIN_STATEMENT_CHARS} characters ({statement_len} so far)"
                ),
            );
        }

        if !is_plausible_email(self.contact_email.trim()) {
            errors.insert(FIELD_EMAIL, "Enter a valid email address");
        }

        errors
    }
}

/// One `@`, non-empty local part, a dotted domain without empty labels
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
        && !email.chars().any(char::is_whitespace)
}
