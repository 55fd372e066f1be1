//! Ownership checks shared by the interview handlers.

use crate::domain::feedback::UserAnswer;
use crate::domain::foundation::{AnswerId, InterviewId, UserId};
use crate::domain::interview::{InterviewError, MockInterview};
use crate::ports::{AnswerRepository, InterviewRepository};

/// Loads an interview the user is allowed to see.
///
/// Returns `NotFound` if it does not exist and `Forbidden` if another user
/// created it.
pub(crate) async fn load_owned_interview(
    repository: &dyn InterviewRepository,
    interview_id: &InterviewId,
    user_id: &UserId,
) -> Result<MockInterview, InterviewError> {
    let interview = repository
        .find_by_id(interview_id)
        .await?
        .ok_or(InterviewError::NotFound(*interview_id))?;

    if !interview.is_owner(user_id) {
        return Err(InterviewError::Forbidden);
    }

    Ok(interview)
}

/// Loads an answer recorded by the user.
pub(crate) async fn load_owned_answer(
    repository: &dyn AnswerRepository,
    answer_id: &AnswerId,
    user_id: &UserId,
) -> Result<UserAnswer, InterviewError> {
    let answer = repository
        .find_by_id(answer_id)
        .await?
        .ok_or(InterviewError::AnswerNotFound(*answer_id))?;

    if !answer.is_owned_by(user_id) {
        return Err(InterviewError::Forbidden);
    }

    Ok(answer)
}
