//! In-Memory Interview Repository
//!
//! Stores generated interviews in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, InterviewId, UserId};
use crate::domain::interview::MockInterview;
use crate::ports::InterviewRepository;

/// In-memory storage for interviews, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInterviewRepository {
    interviews: Arc<RwLock<Vec<MockInterview>>>,
}

impl InMemoryInterviewRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored interviews
    pub async fn len(&self) -> usize {
        self.interviews.read().await.len()
    }

    /// Whether nothing has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.interviews.read().await.is_empty()
    }
}

#[async_trait]
impl InterviewRepository for InMemoryInterviewRepository {
    async fn save(&self, interview: &MockInterview) -> Result<(), DomainError> {
        let mut interviews = self.interviews.write().await;
        if interviews.iter().any(|i| i.id() == interview.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Interview already exists",
            )
            .with_detail("interview_id", interview.id().to_string()));
        }
        interviews.push(interview.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &InterviewId) -> Result<Option<MockInterview>, DomainError> {
        let interviews = self.interviews.read().await;
        Ok(interviews.iter().find(|i| i.id() == id).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<MockInterview>, DomainError> {
        let interviews = self.interviews.read().await;
        let mut owned: Vec<MockInterview> = interviews
            .iter()
            .rev()
            .filter(|i| i.is_owner(user_id))
            .cloned()
            .collect();
        // Stable: equal timestamps stay newest-inserted first.
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }
}
