//! Interview behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::InterviewSettings;
use crate::domain::interview::DEFAULT_MIN_ANSWER_LENGTH;

/// Largest interview that can be requested.
pub const MAX_QUESTION_COUNT: u32 = 20;

/// Interview configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewConfig {
    /// Questions generated per interview
    #[serde(default = "default_question_count")]
    pub question_count: u32,

    /// Answers must be longer than this many characters
    #[serde(default = "default_min_answer_length")]
    pub min_answer_length: usize,

    /// Model calls per structured request, re-prompts included
    #[serde(default = "default_max_extraction_attempts")]
    pub max_extraction_attempts: u32,
}

impl InterviewConfig {
    /// Validate interview configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question_count == 0 || self.question_count > MAX_QUESTION_COUNT {
            return Err(ValidationError::QuestionCountOutOfRange(self.question_count));
        }

        if self.max_extraction_attempts == 0 {
            return Err(ValidationError::InvalidExtractionAttempts);
        }

        Ok(())
    }

    /// Settings handed to the interview handlers.
    pub fn settings(&self) -> InterviewSettings {
        InterviewSettings {
            question_count: self.question_count,
            min_answer_length: self.min_answer_length,
            max_extraction_attempts: self.max_extraction_attempts,
        }
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            min_answer_length: default_min_answer_length(),
            max_extraction_attempts: default_max_extraction_attempts(),
        }
    }
}

fn default_question_count() -> u32 {
    5
}

fn default_min_answer_length() -> usize {
    DEFAULT_MIN_ANSWER_LENGTH
}

fn default_max_extraction_attempts() -> u32 {
    2
}
