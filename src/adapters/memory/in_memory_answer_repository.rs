//! In-Memory Answer Repository
//!
//! Stores evaluated answers in memory, in recording order.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feedback::UserAnswer;
use crate::domain::foundation::{AnswerId, DomainError, ErrorCode, InterviewId};
use crate::ports::AnswerRepository;

/// In-memory storage for user answers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnswerRepository {
    answers: Arc<RwLock<Vec<UserAnswer>>>,
}

impl InMemoryAnswerRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored answers
    pub async fn len(&self) -> usize {
        self.answers.read().await.len()
    }

    /// Whether nothing has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.answers.read().await.is_empty()
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn save(&self, answer: &UserAnswer) -> Result<(), DomainError> {
        let mut answers = self.answers.write().await;
        if answers.iter().any(|a| a.id == answer.id) {
            return Err(
                DomainError::new(ErrorCode::DatabaseError, "Answer already exists")
                    .with_detail("answer_id", answer.id.to_string()),
            );
        }
        answers.push(answer.clone());
        Ok(())
    }

    async fn update(&self, answer: &UserAnswer) -> Result<(), DomainError> {
        let mut answers = self.answers.write().await;
        match answers.iter_mut().find(|a| a.id == answer.id) {
            Some(existing) => {
                *existing = answer.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::AnswerNotFound, "Answer not found")
                .with_detail("answer_id", answer.id.to_string())),
        }
    }

    async fn find_by_id(&self, id: &AnswerId) -> Result<Option<UserAnswer>, DomainError> {
        let answers = self.answers.read().await;
        Ok(answers.iter().find(|a| &a.id == id).cloned())
    }

    async fn find_by_interview(
        &self,
        interview_id: &InterviewId,
    ) -> Result<Vec<UserAnswer>, DomainError> {
        let answers = self.answers.read().await;
        Ok(answers
            .iter()
            .filter(|a| &a.interview_id == interview_id)
            .cloned()
            .collect())
    }
}
