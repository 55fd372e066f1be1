//! Prompt-and-extract round trips against the AI provider.
//!
//! Sends a prompt, reads the reply through `domain::extraction`, and asks
//! again with a stricter instruction when the reply had no readable JSON.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::extraction::{extract_as, ExpectedShape};
use crate::domain::interview::{prompts, InterviewError};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata};

impl From<AIError> for InterviewError {
    fn from(err: AIError) -> Self {
        match err {
            AIError::RateLimited { retry_after_secs } => {
                InterviewError::RateLimited { retry_after_secs }
            }
            other => InterviewError::AIProvider(other.to_string()),
        }
    }
}

/// Requests structured data from the model.
#[derive(Clone)]
pub struct StructuredRequester {
    ai_provider: Arc<dyn AIProvider>,
    max_attempts: u32,
}

impl StructuredRequester {
    /// `max_attempts` is clamped to at least one.
    pub fn new(ai_provider: Arc<dyn AIProvider>, max_attempts: u32) -> Self {
        Self {
            ai_provider,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Sends `prompt` and extracts a `T` matching `shape`.
    ///
    /// Replies with no balanced JSON, or JSON that does not parse, are
    /// retried with a re-prompt until `max_attempts` is reached. Shape
    /// mismatches and empty replies are not retried.
    ///
    /// # Errors
    ///
    /// - `AIProvider` / `RateLimited` if the provider call fails
    /// - `UnreadableResponse` if no attempt produced a valid record
    pub async fn request<T: DeserializeOwned>(
        &self,
        prompt: &str,
        shape: &ExpectedShape,
        metadata: RequestMetadata,
    ) -> Result<T, InterviewError> {
        let mut attempt = 1;
        loop {
            let text = if attempt == 1 {
                prompt.to_string()
            } else {
                prompts::with_reprompt(prompt)
            };

            let request = CompletionRequest::new(metadata.clone())
                .with_system_prompt(prompts::SYSTEM_PROMPT)
                .with_message(MessageRole::User, text)
                .with_json_response();

            let response = self.ai_provider.complete(request).await?;

            match extract_as::<T>(&response.content, shape) {
                Ok(value) => return Ok(value),
                Err(failure) => {
                    debug!(
                        kind = %failure.kind,
                        detail = %failure.detail,
                        raw_output = %failure.raw_input,
                        trace_id = %metadata.trace_id,
                        "Failed to extract structured data from AI response"
                    );

                    if !failure.is_retryable() || attempt >= self.max_attempts {
                        return Err(InterviewError::UnreadableResponse {
                            failure,
                            attempts: attempt,
                        });
                    }

                    warn!(
                        kind = %failure.kind,
                        attempt,
                        max_attempts = self.max_attempts,
                        trace_id = %metadata.trace_id,
                        "AI response unreadable, re-prompting"
                    );
                    attempt += 1;
                }
            }
        }
    }
}
