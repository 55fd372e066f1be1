//! RecordAnswerHandler - Command handler for evaluating and storing an answer.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::feedback::{AnswerFeedback, UserAnswer};
use crate::domain::foundation::{InterviewId, UserId};
use crate::domain::interview::{prompts, InterviewError, PendingAnswer};
use crate::ports::{AIProvider, AnswerRepository, InterviewRepository, RequestMetadata};

use super::access::load_owned_interview;
use super::{InterviewSettings, StructuredRequester};

/// Command to record the user's answer to one question.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub user_id: UserId,
    pub interview_id: InterviewId,
    pub question_index: usize,
    pub answer: String,
}

impl RecordAnswerCommand {
    /// Builds the command from an answer session's pending submission.
    pub fn from_pending(user_id: UserId, interview_id: InterviewId, pending: PendingAnswer) -> Self {
        Self {
            user_id,
            interview_id,
            question_index: pending.question_index,
            answer: pending.answer,
        }
    }
}

/// Result of a recorded answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerResult {
    pub answer: UserAnswer,
}

/// Handler for recording answers.
pub struct RecordAnswerHandler {
    requester: StructuredRequester,
    interviews: Arc<dyn InterviewRepository>,
    answers: Arc<dyn AnswerRepository>,
    min_answer_length: usize,
}

impl RecordAnswerHandler {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        interviews: Arc<dyn InterviewRepository>,
        answers: Arc<dyn AnswerRepository>,
        settings: InterviewSettings,
    ) -> Self {
        Self {
            requester: StructuredRequester::new(ai_provider, settings.max_extraction_attempts),
            interviews,
            answers,
            min_answer_length: settings.min_answer_length,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordAnswerCommand,
    ) -> Result<RecordAnswerResult, InterviewError> {
        // 1. Reject short answers before any I/O
        let answer_text = cmd.answer.trim();
        let actual = answer_text.chars().count();
        if actual <= self.min_answer_length {
            return Err(InterviewError::AnswerTooShort {
                min_length: self.min_answer_length,
                actual,
            });
        }

        // 2. Load the interview and the question being answered
        let interview =
            load_owned_interview(self.interviews.as_ref(), &cmd.interview_id, &cmd.user_id)
                .await?;
        let question =
            interview
                .question(cmd.question_index)
                .ok_or(InterviewError::QuestionOutOfRange {
                    index: cmd.question_index,
                    count: interview.question_count(),
                })?;

        // 3. Ask the model for a rating and feedback
        let prompt = prompts::answer_feedback_prompt(&question.question, answer_text);
        let metadata = RequestMetadata::new(cmd.user_id.clone(), Uuid::new_v4().to_string())
            .for_interview(cmd.interview_id);
        let evaluation: AnswerFeedback = self
            .requester
            .request(&prompt, &AnswerFeedback::shape(), metadata)
            .await?;

        // 4. Persist the evaluated answer
        let answer = UserAnswer::new(
            cmd.interview_id,
            cmd.question_index,
            question,
            answer_text,
            evaluation,
            cmd.user_id,
        );
        self.answers.save(&answer).await?;

        info!(
            interview_id = %answer.interview_id,
            answer_id = %answer.id,
            question_index = answer.question_index,
            rating = %answer.rating,
            "Answer recorded"
        );

        Ok(RecordAnswerResult { answer })
    }
}
