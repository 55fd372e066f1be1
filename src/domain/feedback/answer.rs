//! Recorded answers and the model's feedback on them.

use serde::{Deserialize, Serialize};

use crate::domain::extraction::{ExpectedShape, FieldType};
use crate::domain::foundation::{AnswerId, InterviewId, Timestamp, UserId};
use crate::domain::interview::InterviewQuestion;

use super::{RawRating, SkillReport};

/// Rating and short feedback for one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    #[serde(default)]
    pub rating: RawRating,
    pub feedback: String,
}

impl AnswerFeedback {
    /// Shape of an answer-feedback reply.
    pub fn shape() -> ExpectedShape {
        ExpectedShape::record([("rating", FieldType::Numeric), ("feedback", FieldType::String)])
    }
}

/// A user's answer to one interview question, with its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub id: AnswerId,
    pub interview_id: InterviewId,
    pub question_index: usize,
    pub question: String,
    pub correct_answer: String,
    pub user_answer: String,
    pub feedback: String,
    pub rating: RawRating,
    pub report: Option<SkillReport>,
    pub user_id: UserId,
    pub created_at: Timestamp,
}

impl UserAnswer {
    /// Records an evaluated answer to `question`.
    pub fn new(
        interview_id: InterviewId,
        question_index: usize,
        question: &InterviewQuestion,
        user_answer: impl Into<String>,
        evaluation: AnswerFeedback,
        user_id: UserId,
    ) -> Self {
        Self {
            id: AnswerId::new(),
            interview_id,
            question_index,
            question: question.question.clone(),
            correct_answer: question.answer.clone(),
            user_answer: user_answer.into(),
            feedback: evaluation.feedback,
            rating: evaluation.rating,
            report: None,
            user_id,
            created_at: Timestamp::now(),
        }
    }

    /// Attaches (or replaces) the per-skill report.
    pub fn attach_report(&mut self, report: SkillReport) {
        self.report = Some(report);
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
