//! Built-in sample records used when `--samples` is not given.

use scholarlink_core::SampleSet;

const BUILTIN_JSON: &str = r#"{
  "opportunities": [
    {
      "id": "opp-ml-lab",
      "title": "Machine Learning Research Assistant",
      "professor": "Dr. Sarah Chen",
      "department": "Computer Science",
      "kind": "research",
      "description": "Help build evaluation pipelines for low-resource language models.",
      "tags": ["python", "pytorch", "nlp"],
      "deadline": "2026-12-15",
      "positions": 2,
      "compensation": "paid"
    },
    {
      "id": "opp-ta-calc",
      "title": "Teaching Assistant, Calculus II",
      "professor": "Prof. Michael Roberts",
      "department": "Mathematics",
      "kind": "teaching_assistant",
      "description": "Run two weekly recitation sections and hold office hours.",
      "tags": ["teaching", "calculus"],
      "deadline": "2026-11-30",
      "positions": 3,
      "compensation": "paid"
    },
    {
      "id": "opp-bio-field",
      "title": "Wetland Sampling Project",
      "professor": "Dr. Amara Okafor",
      "department": "Biology",
      "kind": "project",
      "description": "Collect and catalogue water samples across three field sites.",
      "tags": ["fieldwork", "ecology"],
      "deadline": "2026-03-01",
      "compensation": "credit"
    },
    {
      "id": "opp-hci-intern",
      "title": "Accessibility Lab Summer Internship",
      "professor": "Dr. Lena Fischer",
      "department": "Human-Computer Interaction",
      "kind": "internship",
      "description": "Run usability studies of screen-reader workflows.",
      "tags": ["ux", "accessibility", "user studies"],
      "deadline": "2027-02-01",
      "compensation": "volunteer"
    }
  ],
  "applicants": [
    {
      "id": "app-1",
      "opportunity_id": "opp-ml-lab",
      "name": "Alex Johnson",
      "email": "alex.johnson@university.edu",
      "program": "Computer Science",
      "year": 3,
      "gpa": 3.8,
      "statement": "I have taken the graduate NLP seminar and built a tokenizer for Yoruba as a side project."
    },
    {
      "id": "app-2",
      "opportunity_id": "opp-ml-lab",
      "name": "Priya Natarajan",
      "email": "priya.n@university.edu",
      "program": "Statistics",
      "year": 4,
      "gpa": 3.9,
      "statement": "My thesis compares calibration methods for classifiers trained on small datasets.",
      "avatar_url": "https://example.invalid/avatars/priya.png"
    },
    {
      "id": "app-3",
      "opportunity_id": "opp-ta-calc",
      "name": "Marcus Lee",
      "email": "mlee@university.edu",
      "program": "Mathematics",
      "year": 2,
      "gpa": 3.6,
      "statement": "I tutored Calculus I at the learning center for two semesters.",
      "status": "accepted"
    },
    {
      "id": "app-4",
      "opportunity_id": "opp-ta-calc",
      "name": "Sofia Alvarez",
      "email": "sofia.alvarez@university.edu",
      "program": "Physics",
      "year": 3,
      "gpa": 3.4,
      "statement": "I enjoy explaining series convergence and have graded for Physics 101.",
      "status": "rejected"
    }
  ],
  "applications": [
    {
      "id": "sub-1",
      "opportunity_id": "opp-hci-intern",
      "opportunity_title": "Accessibility Lab Summer Internship",
      "submitted_on": "2026-09-20",
      "statement": "I volunteer as a screen-reader tester for the campus library site.",
      "status": "pending"
    },
    {
      "id": "sub-2",
      "opportunity_id": "opp-bio-field",
      "opportunity_title": "Wetland Sampling Project",
      "submitted_on": "2026-02-10",
      "statement": "I completed the ecology field methods course last spring.",
      "status": "accepted"
    }
  ]
}"#;

/// Parse the built-in records. A parse failure is logged and yields an empty set.
pub fn builtin() -> SampleSet {
    match SampleSet::from_json(BUILTIN_JSON) {
        Ok(samples) => samples,
        Err(e) => {
            tracing::error!("Built-in samples are invalid: {}", e);
            SampleSet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarlink_core::{OpportunityId, ReviewStatus};

    #[test]
    fn builtin_samples_parse() {
        let samples = SampleSet::from_json(BUILTIN_JSON).unwrap();
        assert_eq!(samples.opportunities.len(), 4);
        assert_eq!(samples.applicants.len(), 4);
        assert_eq!(samples.applicants[0].status, ReviewStatus::Pending);
        assert_eq!(samples.applicants[2].status, ReviewStatus::Accepted);
    }

    #[test]
    fn applicants_reference_known_posts() {
        let samples = builtin();
        for applicant in &samples.applicants {
            assert!(
                samples.opportunity(&applicant.opportunity_id).is_some(),
                "{} points at a missing post",
                applicant.name
            );
        }
        assert!(samples.opportunity(&OpportunityId::new("nope")).is_none());
    }
}
