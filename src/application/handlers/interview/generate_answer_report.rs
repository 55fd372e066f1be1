//! GenerateAnswerReportHandler - Command handler for per-skill answer reports.

use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::feedback::{SkillReport, UserAnswer};
use crate::domain::foundation::{AnswerId, UserId};
use crate::domain::interview::{prompts, InterviewError};
use crate::ports::{AIProvider, AnswerRepository, RequestMetadata};

use super::access::load_owned_answer;
use super::{InterviewSettings, StructuredRequester};

/// Command to assess a recorded answer skill by skill.
#[derive(Debug, Clone)]
pub struct GenerateAnswerReportCommand {
    pub user_id: UserId,
    pub answer_id: AnswerId,
}

/// Result carrying the answer with its report attached.
#[derive(Debug, Clone)]
pub struct GenerateAnswerReportResult {
    pub answer: UserAnswer,
}

/// Handler for generating skill reports.
pub struct GenerateAnswerReportHandler {
    requester: StructuredRequester,
    answers: Arc<dyn AnswerRepository>,
}

impl GenerateAnswerReportHandler {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        answers: Arc<dyn AnswerRepository>,
        settings: InterviewSettings,
    ) -> Self {
        Self {
            requester: StructuredRequester::new(ai_provider, settings.max_extraction_attempts),
            answers,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateAnswerReportCommand,
    ) -> Result<GenerateAnswerReportResult, InterviewError> {
        // 1. Load the answer
        let mut answer =
            load_owned_answer(self.answers.as_ref(), &cmd.answer_id, &cmd.user_id).await?;

        // 2. Ask the model for a per-skill assessment
        let prompt = prompts::skill_report_prompt(&answer.question, &answer.user_answer);
        let metadata = RequestMetadata::new(cmd.user_id, Uuid::new_v4().to_string())
            .for_interview(answer.interview_id);
        let extracted: Value = self
            .requester
            .request(&prompt, &SkillReport::shape(), metadata)
            .await?;
        let report = SkillReport::from_json(extracted)?;

        // 3. Store it on the answer
        let skill_count = report.skills().len();
        answer.attach_report(report);
        self.answers.update(&answer).await?;

        info!(
            answer_id = %answer.id,
            skill_count,
            "Skill report generated"
        );

        Ok(GenerateAnswerReportResult { answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::memory::InMemoryAnswerRepository;
    use crate::domain::feedback::{AnswerFeedback, RawRating};
    use crate::domain::foundation::InterviewId;
    use crate::domain::interview::InterviewQuestion;

    const REPORT: &str = r#"Assessment:
{
  "technical_knowledge": {"rating": 4, "feedback": "Accurate."},
  "communication": {"rating": "3/5", "feedback": "A bit terse."}
}"#;

    fn alice() -> UserId {
        UserId::new("alice@example.com").unwrap()
    }

    async fn stored_answer(repo: &InMemoryAnswerRepository) -> UserAnswer {
        let answer = UserAnswer::new(
            InterviewId::new(),
            0,
            &InterviewQuestion::new("What is ownership?", "One owner per value."),
            "Each value has a single owner.",
            AnswerFeedback {
                rating: RawRating::Number(7.0),
                feedback: "Good.".to_string(),
            },
            alice(),
        );
        repo.save(&answer).await.unwrap();
        answer
    }

    fn handler(ai: &MockAIProvider, repo: Arc<InMemoryAnswerRepository>) -> GenerateAnswerReportHandler {
        GenerateAnswerReportHandler::new(Arc::new(ai.clone()), repo, InterviewSettings::default())
    }

    #[tokio::test]
    async fn attaches_report_in_model_order() {
        let ai = MockAIProvider::new().with_response(REPORT);
        let repo = Arc::new(InMemoryAnswerRepository::new());
        let stored = stored_answer(&repo).await;

        let result = handler(&ai, repo.clone())
            .handle(GenerateAnswerReportCommand {
                user_id: alice(),
                answer_id: stored.id,
            })
            .await
            .unwrap();

        let report = result.answer.report.unwrap();
        let skills: Vec<&str> = report.skills().iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(skills, vec!["technical_knowledge", "communication"]);
        assert_eq!(report.skills()[1].1.rating, RawRating::Text("3/5".to_string()));

        let persisted = repo.find_by_id(&stored.id).await.unwrap().unwrap();
        assert!(persisted.report.is_some());
        assert!(ai.last_prompt().unwrap().contains("Each value has a single owner."));
    }

    #[tokio::test]
    async fn unknown_answer_is_not_found() {
        let ai = MockAIProvider::new().with_response(REPORT);
        let repo = Arc::new(InMemoryAnswerRepository::new());
        let missing = AnswerId::new();

        let err = handler(&ai, repo)
            .handle(GenerateAnswerReportCommand {
                user_id: alice(),
                answer_id: missing,
            })
            .await
            .unwrap_err();

        assert_eq!(err, InterviewError::AnswerNotFound(missing));
        assert_eq!(ai.call_count(), 0);
    }

    #[tokio::test]
    async fn other_users_answer_is_forbidden() {
        let ai = MockAIProvider::new().with_response(REPORT);
        let repo = Arc::new(InMemoryAnswerRepository::new());
        let stored = stored_answer(&repo).await;

        let err = handler(&ai, repo)
            .handle(GenerateAnswerReportCommand {
                user_id: UserId::new("bob@example.com").unwrap(),
                answer_id: stored.id,
            })
            .await
            .unwrap_err();

        assert_eq!(err, InterviewError::Forbidden);
    }

    #[tokio::test]
    async fn skill_without_feedback_is_unreadable() {
        let ai = MockAIProvider::new()
            .with_response(r#"{"clarity": {"rating": 4, "feedback": "ok"}, "depth": {"rating": 2}}"#);
        let repo = Arc::new(InMemoryAnswerRepository::new());
        let stored = stored_answer(&repo).await;

        let err = handler(&ai, repo.clone())
            .handle(GenerateAnswerReportCommand {
                user_id: alice(),
                answer_id: stored.id,
            })
            .await
            .unwrap_err();

        match err {
            InterviewError::UnreadableResponse { failure, .. } => {
                assert_eq!(failure.mismatched_field(), Some("depth.feedback"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        let persisted = repo.find_by_id(&stored.id).await.unwrap().unwrap();
        assert!(persisted.report.is_none());
    }

    #[tokio::test]
    async fn reprompts_when_report_is_cut_off() {
        let ai = MockAIProvider::new()
            .with_response(r#"{"clarity": {"rating": 4, "feedback": "Clear"#)
            .with_response(REPORT);
        let repo = Arc::new(InMemoryAnswerRepository::new());
        let stored = stored_answer(&repo).await;

        let result = handler(&ai, repo)
            .handle(GenerateAnswerReportCommand {
                user_id: alice(),
                answer_id: stored.id,
            })
            .await
            .unwrap();

        assert_eq!(result.answer.report.unwrap().skills().len(), 2);
        assert_eq!(ai.call_count(), 2);
    }
}
