//! ScholarLink Core Library
//!
//! Pure logic behind the ScholarLink academic collaboration UI.
//!
//! ## Overview
//!
//! Nothing in here touches the DOM. The UI crate calls into these modules to
//! decide how a primitive looks and what local state looks like after a user
//! action:
//!
//! - **style**: total resolvers from variant/size enumerations to a
//!   [`StyleRecord`]. Unknown names resolve to the default arm.
//! - **notify**: the ordered notification queue with timer-driven expiry.
//! - **review**: the Pending → Accepted/Rejected applicant state machine.
//! - **records**: in-memory opportunity, applicant and application records.
//! - **filter**: opportunity search.
//! - **validation**: inline form validation messages.
//! - **image**: deferred image load state with placeholder fallback.
//!
//! ## Quick Start
//!
//! ```
//! use scholarlink_core::style::{ButtonFlags, ButtonStyle, ButtonVariant, Size, Variant};
//!
//! let variant = ButtonVariant::from_name("not-a-variant");
//! assert_eq!(variant, ButtonVariant::Primary);
//!
//! let style = ButtonStyle::resolve(variant, Size::Lg, ButtonFlags::default());
//! assert!(style.record.to_css().contains("background"));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod image;
pub mod logging;
pub mod notify;
pub mod records;
pub mod review;
pub mod style;
pub mod validation;

// Re-exports
pub use config::AppConfig;
pub use error::{CoreError, CoreResult};
pub use filter::{filter_opportunities, OpportunityQuery};
pub use image::ImageLoad;
pub use notify::{
    expire_after, Notification, NotificationId, NotificationKind, NotificationQueue, Shown,
    DEFAULT_DURATION,
};
pub use records::{
    Applicant, ApplicantId, Application, ApplicationId, Compensation, OpportunityId, OpportunityKind,
    OpportunityPost, SampleSet,
};
pub use review::{Decision, ReviewBoard, ReviewStatus, StatusFilter, StatusTally};
pub use style::{StyleRecord, Variant};
pub use validation::{ApplicationForm, FieldErrors};
