//! Error types for ScholarLink core

use thiserror::Error;

use crate::review::{Decision, ReviewStatus};

/// Main error type for ScholarLink core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// A review decision was applied to an applicant that is no longer pending
    #[error("Cannot {decision} an applicant that is already {from}")]
    InvalidTransition {
        from: ReviewStatus,
        decision: Decision,
    },

    /// Applicant was not found on the review board
    #[error("Applicant not found: {0}")]
    ApplicantNotFound(String),

    /// Form input did not pass validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration value out of range or malformed
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::ApplicantNotFound("app-7".to_string());
        assert_eq!(format!("{}", err), "Applicant not found: app-7");
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = CoreError::InvalidTransition {
            from: ReviewStatus::Accepted,
            decision: Decision::Reject,
        };
        assert_eq!(
            format!("{}", err),
            "Cannot reject an applicant that is already accepted"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
