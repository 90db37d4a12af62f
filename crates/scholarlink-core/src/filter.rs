//! Opportunity search.

use crate::records::{OpportunityKind, OpportunityPost};

/// Kind filter plus free-text search
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct OpportunityQuery {
    pub kind: Option<OpportunityKind>,
    pub text: String,
}

impl OpportunityQuery {
    pub fn matches(&self, post: &OpportunityPost) -> bool {
        if self.kind.is_some_and(|kind| kind != post.kind) {
            return false;
        }

        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [&post.title, &post.department, &post.professor]
            .into_iter()
            .chain(post.tags.iter())
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.text.trim().is_empty()
    }
}

/// Posts matching `query`, in their original order
pub fn filter_opportunities<'a>(
    posts: &'a [OpportunityPost],
    query: &OpportunityQuery,
) -> Vec<&'a OpportunityPost> {
    posts.iter().filter(|p| query.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Compensation, OpportunityId};
    use chrono::NaiveDate;

    fn post(id: &str, title: &str, kind: OpportunityKind, tags: &[&str]) -> OpportunityPost {
        OpportunityPost {
            id: OpportunityId::new(id),
            title: title.to_string(),
            professor: "Dr. Barbara Liskov".to_string(),
            department: "Computer Science".to_string(),
            kind,
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            positions: 1,
            compensation: Compensation::Credit,
        }
    }

    fn posts() -> Vec<OpportunityPost> {
        vec![
            post("1", "Distributed systems lab", OpportunityKind::Research, &["rust"]),
            post("2", "Intro to CS grader", OpportunityKind::TeachingAssistant, &[]),
            post("3", "Robotics capstone", OpportunityKind::Project, &["ROS", "c++"]),
        ]
    }

    #[test]
    fn empty_query_matches_everything() {
        let posts = posts();
        let query = OpportunityQuery::default();
        assert!(query.is_empty());
        assert_eq!(filter_opportunities(&posts, &query).len(), 3);
    }

    #[test]
    fn kind_filter() {
        let posts = posts();
        let query = OpportunityQuery {
            kind: Some(OpportunityKind::Project),
            text: String::new(),
        };
        let ids: Vec<_> = filter_opportunities(&posts, &query)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn text_matches_tags_case_insensitively() {
        let posts = posts();
        let query = OpportunityQuery {
            kind: None,
            text: "  ros ".to_string(),
        };
        let ids: Vec<_> = filter_opportunities(&posts, &query)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn text_matches_department_and_keeps_order() {
        let posts = posts();
        let query = OpportunityQuery {
            kind: None,
            text: "computer".to_string(),
        };
        let ids: Vec<_> = filter_opportunities(&posts, &query)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn kind_and_text_combine() {
        let posts = posts();
        let query = OpportunityQuery {
            kind: Some(OpportunityKind::Research),
            text: "grader".to_string(),
        };
        assert!(filter_opportunities(&posts, &query).is_empty());
    }
}
