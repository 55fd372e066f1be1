//! Feedback view for a completed interview.

use serde::{Deserialize, Serialize};

use super::{aggregate, OverallRating, RawRating, UserAnswer};

/// All answers of an interview with their overall rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub overall_rating: OverallRating,
    pub answers: Vec<UserAnswer>,
}

impl FeedbackSummary {
    /// Builds the summary; answers keep the order they are given in.
    pub fn from_answers(answers: Vec<UserAnswer>) -> Self {
        let ratings: Vec<RawRating> = answers.iter().map(|a| a.rating.clone()).collect();
        Self {
            overall_rating: aggregate(&ratings),
            answers,
        }
    }

    /// True when the user has not answered anything yet.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::AnswerFeedback;
    use crate::domain::foundation::{InterviewId, UserId};
    use crate::domain::interview::InterviewQuestion;

    fn answer(index: usize, rating: RawRating) -> UserAnswer {
        UserAnswer::new(
            InterviewId::new(),
            index,
            &InterviewQuestion::new(format!("Q{}", index), "A"),
            "an answer long enough",
            AnswerFeedback {
                rating,
                feedback: "ok".to_string(),
            },
            UserId::new("user@example.com").unwrap(),
        )
    }

    #[test]
    fn summary_averages_answer_ratings() {
        let summary = FeedbackSummary::from_answers(vec![
            answer(0, RawRating::Number(7.0)),
            answer(1, RawRating::from("bad")),
            answer(2, RawRating::from("5/10")),
        ]);
        assert_eq!(summary.overall_rating.value(), 4.0);
        assert_eq!(summary.answers[1].question, "Q1");
    }

    #[test]
    fn empty_summary_rates_zero() {
        let summary = FeedbackSummary::from_answers(vec![]);
        assert!(summary.is_empty());
        assert_eq!(summary.overall_rating.to_string(), "0.0");
    }
}
