//! Interview repository port.
//!
//! Defines the contract for persisting and retrieving MockInterview
//! aggregates. Interviews are written once and never modified.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, InterviewId, UserId};
use crate::domain::interview::MockInterview;

/// Repository port for MockInterview persistence.
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Save a new interview.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, interview: &MockInterview) -> Result<(), DomainError>;

    /// Find an interview by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &InterviewId) -> Result<Option<MockInterview>, DomainError>;

    /// Find all interviews created by a user, newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<MockInterview>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn interview_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn InterviewRepository) {}
    }
}
