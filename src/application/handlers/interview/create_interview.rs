//! CreateInterviewHandler - Command handler for generating a mock interview.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::foundation::UserId;
use crate::domain::interview::{
    prompts, InterviewError, InterviewQuestion, JobProfile, MockInterview,
};
use crate::ports::{AIProvider, InterviewRepository, RequestMetadata};

use super::{InterviewSettings, StructuredRequester};

/// Command to generate a new interview for a job profile.
#[derive(Debug, Clone)]
pub struct CreateInterviewCommand {
    pub user_id: UserId,
    pub position: String,
    pub description: String,
    pub years_of_experience: u32,
}

/// Result of successful interview creation.
#[derive(Debug, Clone)]
pub struct CreateInterviewResult {
    pub interview: MockInterview,
}

/// Handler for creating interviews.
pub struct CreateInterviewHandler {
    requester: StructuredRequester,
    repository: Arc<dyn InterviewRepository>,
    question_count: u32,
}

impl CreateInterviewHandler {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        repository: Arc<dyn InterviewRepository>,
        settings: InterviewSettings,
    ) -> Self {
        Self {
            requester: StructuredRequester::new(ai_provider, settings.max_extraction_attempts),
            repository,
            question_count: settings.question_count,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateInterviewCommand,
    ) -> Result<CreateInterviewResult, InterviewError> {
        // 1. Validate the job profile
        let profile = JobProfile::new(cmd.position, cmd.description, cmd.years_of_experience)?;

        // 2. Ask the model for questions
        let prompt = prompts::question_generation_prompt(&profile, self.question_count);
        let metadata = RequestMetadata::new(cmd.user_id.clone(), Uuid::new_v4().to_string());
        let questions: Vec<InterviewQuestion> = self
            .requester
            .request(&prompt, &InterviewQuestion::list_shape(), metadata)
            .await?;

        if questions.is_empty() {
            return Err(InterviewError::NoQuestionsGenerated);
        }

        // 3. Build and persist the aggregate
        let interview = MockInterview::new(profile, questions, cmd.user_id)?;
        self.repository.save(&interview).await?;

        info!(
            interview_id = %interview.id(),
            question_count = interview.question_count(),
            requested = self.question_count,
            "Mock interview created"
        );

        Ok(CreateInterviewResult { interview })
    }
}
