//! Applicant review state.
//!
//! Review status is a three-state machine: `Pending` moves to exactly one of
//! `Accepted` or `Rejected`, and both are terminal. The view only renders the
//! accept/reject actions while [`ReviewStatus::is_actionable`] holds, so a
//! second decision cannot be clicked. [`ReviewStatus::apply`] still rejects it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::records::{Applicant, ApplicantId, OpportunityId};
use crate::style::{BadgeVariant, Variant};

/// Review status of an applicant or application
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ReviewStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Accepted => "Accepted",
            ReviewStatus::Rejected => "Rejected",
        }
    }

    /// Only pending applicants show decision buttons
    pub fn is_actionable(self) -> bool {
        self == ReviewStatus::Pending
    }

    pub fn is_terminal(self) -> bool {
        !self.is_actionable()
    }

    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            ReviewStatus::Pending => BadgeVariant::Warning,
            ReviewStatus::Accepted => BadgeVariant::Success,
            ReviewStatus::Rejected => BadgeVariant::Danger,
        }
    }

    /// Apply a reviewer decision
    pub fn apply(self, decision: Decision) -> CoreResult<ReviewStatus> {
        match (self, decision) {
            (ReviewStatus::Pending, Decision::Accept) => Ok(ReviewStatus::Accepted),
            (ReviewStatus::Pending, Decision::Reject) => Ok(ReviewStatus::Rejected),
            (from, decision) => Err(CoreError::InvalidTransition { from, decision }),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Accepted => "accepted",
            ReviewStatus::Rejected => "rejected",
        })
    }
}

/// A reviewer's click
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Decision {
    Accept,
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Decision::Accept => "accept",
            Decision::Reject => "reject",
        })
    }
}

/// Tab filter over review statuses
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Accepted,
    Rejected,
}

impl Variant for StatusFilter {
    const ALL: &'static [Self] = &[
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Accepted,
        StatusFilter::Rejected,
    ];

    fn name(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Accepted => "accepted",
            StatusFilter::Rejected => "rejected",
        }
    }
}

impl StatusFilter {
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Accepted => "Accepted",
            StatusFilter::Rejected => "Rejected",
        }
    }

    pub fn matches(self, status: ReviewStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ReviewStatus::Pending,
            StatusFilter::Accepted => status == ReviewStatus::Accepted,
            StatusFilter::Rejected => status == ReviewStatus::Rejected,
        }
    }
}

/// Per-status counts for the dashboard summary
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StatusTally {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl StatusTally {
    pub fn from_statuses(statuses: impl IntoIterator<Item = ReviewStatus>) -> Self {
        let mut tally = Self::default();
        for status in statuses {
            match status {
                ReviewStatus::Pending => tally.pending += 1,
                ReviewStatus::Accepted => tally.accepted += 1,
                ReviewStatus::Rejected => tally.rejected += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.pending + self.accepted + self.rejected
    }

    pub fn count(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total(),
            StatusFilter::Pending => self.pending,
            StatusFilter::Accepted => self.accepted,
            StatusFilter::Rejected => self.rejected,
        }
    }
}

/// Applicants under review, held in local view state
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ReviewBoard {
    applicants: Vec<Applicant>,
}

impl ReviewBoard {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        Self { applicants }
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn get(&self, id: &ApplicantId) -> Option<&Applicant> {
        self.applicants.iter().find(|a| &a.id == id)
    }

    /// Apply a decision to one applicant.
    ///
    /// A rejected transition leaves the board untouched.
    pub fn decide(&mut self, id: &ApplicantId, decision: Decision) -> CoreResult<ReviewStatus> {
        let applicant = self
            .applicants
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| CoreError::ApplicantNotFound(id.to_string()))?;

        match applicant.status.apply(decision) {
            Ok(next) => {
                tracing::info!(applicant = %id, from = %applicant.status, to = %next, "review decision");
                applicant.status = next;
                Ok(next)
            }
            Err(e) => {
                tracing::warn!(applicant = %id, "ignored review decision: {}", e);
                Err(e)
            }
        }
    }

    /// Applicants matching the status filter and, optionally, one post.
    /// Board order is preserved.
    pub fn filter(
        &self,
        status: StatusFilter,
        opportunity: Option<&OpportunityId>,
    ) -> Vec<&Applicant> {
        self.applicants
            .iter()
            .filter(|a| status.matches(a.status))
            .filter(|a| opportunity.map_or(true, |id| &a.opportunity_id == id))
            .collect()
    }

    pub fn tally(&self) -> StatusTally {
        StatusTally::from_statuses(self.applicants.iter().map(|a| a.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant(id: &str, opportunity: &str) -> Applicant {
        Applicant {
            id: ApplicantId::new(id),
            opportunity_id: OpportunityId::new(opportunity),
            name: format!("Student {id}"),
            email: format!("{id}@uni.edu"),
            program: "Physics".to_string(),
            year: 3,
            gpa: 3.7,
            statement: "Keen to help.".to_string(),
            avatar_url: None,
            status: ReviewStatus::Pending,
        }
    }

    #[test]
    fn pending_transitions_once() {
        assert_eq!(
            ReviewStatus::Pending.apply(Decision::Accept).unwrap(),
            ReviewStatus::Accepted
        );
        assert_eq!(
            ReviewStatus::Pending.apply(Decision::Reject).unwrap(),
            ReviewStatus::Rejected
        );
    }

    #[test]
    fn terminal_states_refuse_decisions() {
        for from in [ReviewStatus::Accepted, ReviewStatus::Rejected] {
            for decision in [Decision::Accept, Decision::Reject] {
                assert!(matches!(
                    from.apply(decision),
                    Err(CoreError::InvalidTransition { .. })
                ));
            }
        }
    }

    #[test]
    fn only_pending_is_actionable() {
        assert!(ReviewStatus::Pending.is_actionable());
        assert!(!ReviewStatus::Accepted.is_actionable());
        assert!(!ReviewStatus::Rejected.is_actionable());
    }

    #[test]
    fn status_badges() {
        assert_eq!(ReviewStatus::Pending.badge_variant(), BadgeVariant::Warning);
        assert_eq!(ReviewStatus::Accepted.badge_variant(), BadgeVariant::Success);
        assert_eq!(ReviewStatus::Rejected.badge_variant(), BadgeVariant::Danger);
    }

    #[test]
    fn board_decide_updates_one_applicant() {
        let mut board = ReviewBoard::new(vec![applicant("a", "opp-1"), applicant("b", "opp-1")]);
        let status = board.decide(&ApplicantId::new("a"), Decision::Reject).unwrap();
        assert_eq!(status, ReviewStatus::Rejected);
        assert_eq!(board.get(&ApplicantId::new("b")).unwrap().status, ReviewStatus::Pending);
    }

    #[test]
    fn board_second_decision_is_refused_and_state_kept() {
        let mut board = ReviewBoard::new(vec![applicant("a", "opp-1")]);
        let id = ApplicantId::new("a");
        board.decide(&id, Decision::Accept).unwrap();
        assert!(board.decide(&id, Decision::Reject).is_err());
        assert_eq!(board.get(&id).unwrap().status, ReviewStatus::Accepted);
    }

    #[test]
    fn board_unknown_applicant() {
        let mut board = ReviewBoard::default();
        let err = board.decide(&ApplicantId::new("ghost"), Decision::Accept).unwrap_err();
        assert!(matches!(err, CoreError::ApplicantNotFound(id) if id == "ghost"));
    }

    #[test]
    fn filter_by_status_and_post() {
        let mut board = ReviewBoard::new(vec![
            applicant("a", "opp-1"),
            applicant("b", "opp-2"),
            applicant("c", "opp-1"),
        ]);
        board.decide(&ApplicantId::new("c"), Decision::Accept).unwrap();

        let pending: Vec<_> = board
            .filter(StatusFilter::Pending, None)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(pending, vec!["a", "b"]);

        let opp1 = OpportunityId::new("opp-1");
        let for_post: Vec<_> = board
            .filter(StatusFilter::All, Some(&opp1))
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(for_post, vec!["a", "c"]);
    }

    #[test]
    fn tally_counts() {
        let mut board = ReviewBoard::new(vec![
            applicant("a", "opp-1"),
            applicant("b", "opp-1"),
            applicant("c", "opp-1"),
        ]);
        board.decide(&ApplicantId::new("a"), Decision::Accept).unwrap();
        board.decide(&ApplicantId::new("b"), Decision::Reject).unwrap();

        let tally = board.tally();
        assert_eq!(tally.pending, 1);
        assert_eq!(tally.accepted, 1);
        assert_eq!(tally.rejected, 1);
        assert_eq!(tally.count(StatusFilter::All), 3);
    }
}
