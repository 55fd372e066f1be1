//! Tunables for the interview use cases.

use crate::domain::interview::DEFAULT_MIN_ANSWER_LENGTH;

/// Per-deployment interview behaviour, built from `InterviewConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterviewSettings {
    /// Questions requested from the model per interview.
    pub question_count: u32,
    /// Answers must be strictly longer than this many characters.
    pub min_answer_length: usize,
    /// Total model calls allowed per structured request, re-prompts included.
    pub max_extraction_attempts: u32,
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            question_count: 5,
            min_answer_length: DEFAULT_MIN_ANSWER_LENGTH,
            max_extraction_attempts: 2,
        }
    }
}
