//! Answer repository port.
//!
//! Stores evaluated user answers. Answers reference their interview by ID.

use async_trait::async_trait;

use crate::domain::feedback::UserAnswer;
use crate::domain::foundation::{AnswerId, DomainError, InterviewId};

/// Repository port for UserAnswer persistence.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Save a new answer.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, answer: &UserAnswer) -> Result<(), DomainError>;

    /// Update an existing answer (e.g. to attach a skill report).
    ///
    /// # Errors
    ///
    /// - `AnswerNotFound` if the answer doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, answer: &UserAnswer) -> Result<(), DomainError>;

    /// Find an answer by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AnswerId) -> Result<Option<UserAnswer>, DomainError>;

    /// Find all answers for an interview, in the order they were recorded.
    async fn find_by_interview(
        &self,
        interview_id: &InterviewId,
    ) -> Result<Vec<UserAnswer>, DomainError>;
}
