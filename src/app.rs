//! Composition root: wires the AI provider, repositories and handlers.

use secrecy::ExposeSecret;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::adapters::ai::{GeminiConfig, GeminiProvider, MockAIProvider};
use crate::adapters::memory::{InMemoryAnswerRepository, InMemoryInterviewRepository};
use crate::application::{
    CreateInterviewHandler, GenerateAnswerReportHandler, GetFeedbackSummaryHandler,
    GetInterviewReportHandler, InterviewSettings, ListInterviewsHandler, RecordAnswerHandler,
};
use crate::config::{AiConfig, AiProvider, AppConfig, ValidationError};
use crate::ports::{AIError, AIProvider, AnswerRepository, InterviewRepository};

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("AI provider could not be created: {0}")]
    Provider(#[from] AIError),
}

/// All interview use cases, sharing one provider and one set of stores.
pub struct InterviewApp {
    pub create_interview: CreateInterviewHandler,
    pub record_answer: RecordAnswerHandler,
    pub generate_answer_report: GenerateAnswerReportHandler,
    pub feedback_summary: GetFeedbackSummaryHandler,
    pub interview_report: GetInterviewReportHandler,
    pub list_interviews: ListInterviewsHandler,
    ai_provider: Arc<dyn AIProvider>,
}

impl InterviewApp {
    /// Validates `config` and builds the app with in-memory storage.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let ai_provider = build_provider(&config.ai)?;

        let info = ai_provider.provider_info();
        info!(provider = %info.name, model = %info.model, "AI provider ready");

        Ok(Self::new(
            ai_provider,
            Arc::new(InMemoryInterviewRepository::new()),
            Arc::new(InMemoryAnswerRepository::new()),
            config.interview.settings(),
        ))
    }

    /// Builds the app from explicit collaborators.
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        interviews: Arc<dyn InterviewRepository>,
        answers: Arc<dyn AnswerRepository>,
        settings: InterviewSettings,
    ) -> Self {
        Self {
            create_interview: CreateInterviewHandler::new(
                ai_provider.clone(),
                interviews.clone(),
                settings,
            ),
            record_answer: RecordAnswerHandler::new(
                ai_provider.clone(),
                interviews.clone(),
                answers.clone(),
                settings,
            ),
            generate_answer_report: GenerateAnswerReportHandler::new(
                ai_provider.clone(),
                answers.clone(),
                settings,
            ),
            feedback_summary: GetFeedbackSummaryHandler::new(interviews.clone(), answers.clone()),
            interview_report: GetInterviewReportHandler::new(interviews.clone(), answers),
            list_interviews: ListInterviewsHandler::new(interviews),
            ai_provider,
        }
    }

    pub fn ai_provider(&self) -> &Arc<dyn AIProvider> {
        &self.ai_provider
    }
}

fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AppError> {
    match config.provider {
        AiProvider::Mock => Ok(Arc::new(MockAIProvider::new())),
        AiProvider::Gemini => {
            let api_key = config
                .gemini_api_key
                .as_ref()
                .ok_or(ValidationError::MissingRequired("GEMINI_API_KEY"))?;

            let mut gemini = GeminiConfig::new(api_key.expose_secret().clone())
                .with_model(config.model.clone())
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries)
                .with_temperature(config.temperature);
            if let Some(url) = &config.base_url {
                gemini = gemini.with_base_url(url.clone());
            }

            Ok(Arc::new(GeminiProvider::new(gemini)?))
        }
    }
}
