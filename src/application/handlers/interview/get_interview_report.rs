//! GetInterviewReportHandler - Query handler for the flattened skill report.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::feedback::ReportRow;
use crate::domain::foundation::{InterviewId, UserId};
use crate::domain::interview::InterviewError;
use crate::ports::{AnswerRepository, InterviewRepository};

use super::access::load_owned_interview;

/// Query for the exportable report of one interview.
#[derive(Debug, Clone)]
pub struct GetInterviewReportQuery {
    pub user_id: UserId,
    pub interview_id: InterviewId,
}

/// Report table for an interview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewReport {
    pub position: String,
    /// One row per assessed skill, grouped by answer in recording order.
    pub rows: Vec<ReportRow>,
    /// Answers that have no skill report yet.
    pub unreported_answers: usize,
}

/// Handler for interview reports.
pub struct GetInterviewReportHandler {
    interviews: Arc<dyn InterviewRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl GetInterviewReportHandler {
    pub fn new(
        interviews: Arc<dyn InterviewRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            interviews,
            answers,
        }
    }

    pub async fn handle(
        &self,
        query: GetInterviewReportQuery,
    ) -> Result<InterviewReport, InterviewError> {
        let interview =
            load_owned_interview(self.interviews.as_ref(), &query.interview_id, &query.user_id)
                .await?;

        let answers = self.answers.find_by_interview(&query.interview_id).await?;
        let unreported_answers = answers.iter().filter(|a| a.report.is_none()).count();
        let rows = answers.iter().flat_map(ReportRow::rows_for).collect();

        Ok(InterviewReport {
            position: interview.profile().position().to_string(),
            rows,
            unreported_answers,
        })
    }
}
