//! ListInterviewsHandler - Query handler for a user's past interviews.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::interview::{InterviewError, InterviewSummary};
use crate::ports::InterviewRepository;

/// Query for every interview a user created.
#[derive(Debug, Clone)]
pub struct ListInterviewsQuery {
    pub user_id: UserId,
}

/// Handler for listing interviews.
pub struct ListInterviewsHandler {
    repository: Arc<dyn InterviewRepository>,
}

impl ListInterviewsHandler {
    pub fn new(repository: Arc<dyn InterviewRepository>) -> Self {
        Self { repository }
    }

    /// Newest first.
    pub async fn handle(
        &self,
        query: ListInterviewsQuery,
    ) -> Result<Vec<InterviewSummary>, InterviewError> {
        let interviews = self.repository.find_by_user(&query.user_id).await?;
        Ok(interviews.iter().map(|i| i.summary()).collect())
    }
}
