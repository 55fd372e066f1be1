//! Interview-specific error types.

use thiserror::Error;

use crate::domain::extraction::ExtractionFailure;
use crate::domain::foundation::{AnswerId, DomainError, ErrorCode, InterviewId, ValidationError};

/// Errors returned by the interview use cases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterviewError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Interview not found: {0}")]
    NotFound(InterviewId),

    #[error("Answer not found: {0}")]
    AnswerNotFound(AnswerId),

    #[error("Permission denied")]
    Forbidden,

    #[error("Question {index} does not exist; interview has {count} questions")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("Answer must be longer than {min_length} characters, got {actual}")]
    AnswerTooShort { min_length: usize, actual: usize },

    #[error("AI provider error: {0}")]
    AIProvider(String),

    #[error("AI provider rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("AI response could not be read after {attempts} attempt(s): {failure}")]
    UnreadableResponse {
        failure: ExtractionFailure,
        attempts: u32,
    },

    #[error("AI response contained no interview questions")]
    NoQuestionsGenerated,

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl InterviewError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        InterviewError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        InterviewError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            InterviewError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            InterviewError::NotFound(_) => ErrorCode::InterviewNotFound,
            InterviewError::AnswerNotFound(_) => ErrorCode::AnswerNotFound,
            InterviewError::Forbidden => ErrorCode::Forbidden,
            InterviewError::QuestionOutOfRange { .. } => ErrorCode::QuestionOutOfRange,
            InterviewError::AnswerTooShort { .. } => ErrorCode::AnswerTooShort,
            InterviewError::AIProvider(_) => ErrorCode::AIProviderError,
            InterviewError::RateLimited { .. } => ErrorCode::RateLimited,
            InterviewError::UnreadableResponse { .. } => ErrorCode::UnreadableAIResponse,
            InterviewError::NoQuestionsGenerated => ErrorCode::UnreadableAIResponse,
            InterviewError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for InterviewError {
    fn from(err: ValidationError) -> Self {
        InterviewError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for InterviewError {
    fn from(err: DomainError) -> Self {
        InterviewError::Infrastructure(err.to_string())
    }
}
