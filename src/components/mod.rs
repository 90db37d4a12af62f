//! Views assembled from the `scholarlink_ui` primitives.

mod applicant_card;
mod applications_list;
mod apply_modal;
mod opportunity_list;
mod review_panel;
mod showcase;
mod workspace;

pub use applicant_card::ApplicantCard;
pub use applications_list::ApplicationsList;
pub use apply_modal::ApplyModal;
pub use opportunity_list::OpportunityList;
pub use review_panel::ReviewPanel;
pub use showcase::Showcase;
pub use workspace::Workspace;
