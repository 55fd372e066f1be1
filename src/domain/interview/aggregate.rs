//! MockInterview aggregate.
//!
//! An interview is created once from a job profile and the questions the
//! model generated for it. Answers reference the interview by ID and are
//! stored separately.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{InterviewId, Timestamp, UserId, ValidationError};

use super::{InterviewQuestion, JobProfile};

/// A generated mock interview.
///
/// # Invariants
///
/// - `questions` is non-empty
/// - questions keep the order the model produced them in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockInterview {
    id: InterviewId,
    profile: JobProfile,
    questions: Vec<InterviewQuestion>,
    created_by: UserId,
    created_at: Timestamp,
}

impl MockInterview {
    /// Creates a new interview.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no questions were supplied
    pub fn new(
        profile: JobProfile,
        questions: Vec<InterviewQuestion>,
        created_by: UserId,
    ) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        Ok(Self {
            id: InterviewId::new(),
            profile,
            questions,
            created_by,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute an interview from persistence (no validation).
    pub fn reconstitute(
        id: InterviewId,
        profile: JobProfile,
        questions: Vec<InterviewQuestion>,
        created_by: UserId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            profile,
            questions,
            created_by,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &InterviewId {
        &self.id
    }

    pub fn profile(&self) -> &JobProfile {
        &self.profile
    }

    pub fn questions(&self) -> &[InterviewQuestion] {
        &self.questions
    }

    /// Returns the question at `index`, if any.
    pub fn question(&self, index: usize) -> Option<&InterviewQuestion> {
        self.questions.get(index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks if the given user created this interview.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }

    /// Condensed view for interview listings.
    pub fn summary(&self) -> InterviewSummary {
        InterviewSummary {
            id: self.id,
            position: self.profile.position().to_string(),
            years_of_experience: self.profile.years_of_experience(),
            question_count: self.questions.len(),
            created_on: self.created_at.display_date(),
        }
    }
}

/// Card data for a user's list of past interviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub id: InterviewId,
    pub position: String,
    pub years_of_experience: u8,
    pub question_count: usize,
    /// Creation date as `DD-MM-YYYY`.
    pub created_on: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> JobProfile {
        JobProfile::new("Backend Engineer", "Rust, Tokio", 3).unwrap()
    }

    fn user() -> UserId {
        UserId::new("user@example.com").unwrap()
    }

    fn questions() -> Vec<InterviewQuestion> {
        vec![
            InterviewQuestion::new("Q1", "A1"),
            InterviewQuestion::new("Q2", "A2"),
        ]
    }

    #[test]
    fn new_interview_keeps_question_order() {
        let interview = MockInterview::new(profile(), questions(), user()).unwrap();
        assert_eq!(interview.question_count(), 2);
        assert_eq!(interview.question(0).unwrap().question, "Q1");
        assert_eq!(interview.question(1).unwrap().question, "Q2");
        assert!(interview.question(2).is_none());
    }

    #[test]
    fn rejects_empty_question_list() {
        let err = MockInterview::new(profile(), vec![], user()).unwrap_err();
        assert_eq!(err.field(), "questions");
    }

    #[test]
    fn ownership_is_checked_by_user_id() {
        let interview = MockInterview::new(profile(), questions(), user()).unwrap();
        assert!(interview.is_owner(&user()));
        assert!(!interview.is_owner(&UserId::new("other@example.com").unwrap()));
    }

    #[test]
    fn summary_formats_creation_date() {
        let interview = MockInterview::reconstitute(
            InterviewId::new(),
            profile(),
            questions(),
            user(),
            Timestamp::from_unix_secs(1_709_251_200), // 2024-03-01
        );
        let summary = interview.summary();
        assert_eq!(summary.position, "Backend Engineer");
        assert_eq!(summary.years_of_experience, 3);
        assert_eq!(summary.question_count, 2);
        assert_eq!(summary.created_on, "01-03-2024");
    }
}
