//! GetFeedbackSummaryHandler - Query handler for an interview's feedback page.

use std::sync::Arc;

use crate::domain::feedback::FeedbackSummary;
use crate::domain::foundation::{InterviewId, UserId};
use crate::domain::interview::InterviewError;
use crate::ports::{AnswerRepository, InterviewRepository};

use super::access::load_owned_interview;

/// Query for the answers and overall rating of one interview.
#[derive(Debug, Clone)]
pub struct GetFeedbackSummaryQuery {
    pub user_id: UserId,
    pub interview_id: InterviewId,
}

/// Handler for feedback summaries.
pub struct GetFeedbackSummaryHandler {
    interviews: Arc<dyn InterviewRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl GetFeedbackSummaryHandler {
    pub fn new(
        interviews: Arc<dyn InterviewRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            interviews,
            answers,
        }
    }

    /// Answers come back in recording order. An interview with no answers
    /// yields an empty summary rated `0.0`.
    pub async fn handle(
        &self,
        query: GetFeedbackSummaryQuery,
    ) -> Result<FeedbackSummary, InterviewError> {
        load_owned_interview(self.interviews.as_ref(), &query.interview_id, &query.user_id)
            .await?;

        let answers = self.answers.find_by_interview(&query.interview_id).await?;
        Ok(FeedbackSummary::from_answers(answers))
    }
}
