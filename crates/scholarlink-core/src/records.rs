//! In-memory records behind the dashboard views.
//!
//! Nothing here is persisted. Records are seeded from a [`SampleSet`] and
//! mutated only by local handlers.

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::review::ReviewStatus;
use crate::style::Variant;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of an opportunity post
    OpportunityId
);
string_id!(
    /// Identifier of an applicant on the review board
    ApplicantId
);
string_id!(
    /// Identifier of a student's own application
    ApplicationId
);

/// What kind of collaboration a post offers
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    #[default]
    Research,
    TeachingAssistant,
    Project,
    Internship,
}

impl Variant for OpportunityKind {
    const ALL: &'static [Self] = &[
        OpportunityKind::Research,
        OpportunityKind::TeachingAssistant,
        OpportunityKind::Project,
        OpportunityKind::Internship,
    ];

    fn name(self) -> &'static str {
        match self {
            OpportunityKind::Research => "research",
            OpportunityKind::TeachingAssistant => "teaching_assistant",
            OpportunityKind::Project => "project",
            OpportunityKind::Internship => "internship",
        }
    }
}

impl OpportunityKind {
    pub fn label(self) -> &'static str {
        match self {
            OpportunityKind::Research => "Research",
            OpportunityKind::TeachingAssistant => "Teaching Assistant",
            OpportunityKind::Project => "Project",
            OpportunityKind::Internship => "Internship",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compensation {
    Paid,
    Credit,
    #[default]
    Volunteer,
}

impl Compensation {
    pub fn label(self) -> &'static str {
        match self {
            Compensation::Paid => "Paid",
            Compensation::Credit => "Course credit",
            Compensation::Volunteer => "Volunteer",
        }
    }
}

/// A position posted by faculty
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct OpportunityPost {
    pub id: OpportunityId,
    pub title: String,
    pub professor: String,
    pub department: String,
    pub kind: OpportunityKind,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub deadline: NaiveDate,
    #[serde(default = "default_positions")]
    pub positions: u8,
    #[serde(default)]
    pub compensation: Compensation,
}

fn default_positions() -> u8 {
    1
}

impl OpportunityPost {
    /// Past the deadline as of `today`
    pub fn is_closed(&self, today: NaiveDate) -> bool {
        today > self.deadline
    }
}

/// A student who applied to one of the faculty member's posts
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub opportunity_id: OpportunityId,
    pub name: String,
    pub email: String,
    pub program: String,
    pub year: u8,
    pub gpa: f32,
    pub statement: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub status: ReviewStatus,
}

/// The student's view of an application they submitted
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub opportunity_id: OpportunityId,
    pub opportunity_title: String,
    pub submitted_on: NaiveDate,
    pub statement: String,
    #[serde(default)]
    pub status: ReviewStatus,
}

impl Application {
    /// A fresh pending application for `post`
    pub fn submit(post: &OpportunityPost, statement: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            id: ApplicationId::new(ulid::Ulid::new().to_string()),
            opportunity_id: post.id.clone(),
            opportunity_title: post.title.clone(),
            submitted_on: today,
            statement: statement.into(),
            status: ReviewStatus::Pending,
        }
    }
}

/// Records that seed the view
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSet {
    pub opportunities: Vec<OpportunityPost>,
    pub applicants: Vec<Applicant>,
    pub applications: Vec<Application>,
}

impl SampleSet {
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn opportunity(&self, id: &OpportunityId) -> Option<&OpportunityPost> {
        self.opportunities.iter().find(|o| &o.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> OpportunityPost {
        OpportunityPost {
            id: OpportunityId::new("opp-1"),
            title: "Protein folding lab assistant".to_string(),
            professor: "Dr. Rosalind Franklin".to_string(),
            department: "Biochemistry".to_string(),
            kind: OpportunityKind::Research,
            description: "Help run crystallography experiments.".to_string(),
            tags: vec!["biology".to_string()],
            deadline: NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
            positions: 2,
            compensation: Compensation::Paid,
        }
    }

    #[test]
    fn submit_creates_pending_application() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let app = Application::submit(&post(), "I love proteins", today);
        assert_eq!(app.status, ReviewStatus::Pending);
        assert_eq!(app.opportunity_id, OpportunityId::new("opp-1"));
        assert_eq!(app.submitted_on, today);
    }

    #[test]
    fn closed_after_deadline() {
        let post = post();
        assert!(!post.is_closed(NaiveDate::from_ymd_opt(2026, 11, 30).unwrap()));
        assert!(post.is_closed(NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()));
    }

    #[test]
    fn sample_set_parses_with_defaults() {
        let json = r#"{
            "opportunities": [{
                "id": "opp-9",
                "title": "Compiler TA",
                "professor": "Dr. Grace Hopper",
                "department": "Computer Science",
                "kind": "teaching_assistant",
                "description": "Grade labs",
                "deadline": "2026-12-15"
            }]
        }"#;
        let set = SampleSet::from_json(json).unwrap();
        assert_eq!(set.opportunities.len(), 1);
        let post = &set.opportunities[0];
        assert_eq!(post.kind, OpportunityKind::TeachingAssistant);
        assert_eq!(post.positions, 1);
        assert_eq!(post.compensation, Compensation::Volunteer);
        assert!(set.applicants.is_empty());
        assert!(set.opportunity(&OpportunityId::new("opp-9")).is_some());
    }

    #[test]
    fn sample_set_rejects_malformed_json() {
        assert!(SampleSet::from_json("{ not json").is_err());
    }
}
