//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## AI Ports
//!
//! - `AIProvider` - Generative model used for questions and evaluations
//!
//! ## Persistence Ports
//!
//! - `InterviewRepository` - Generated interviews
//! - `AnswerRepository` - Evaluated user answers

mod ai_provider;
mod answer_repository;
mod interview_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use answer_repository::AnswerRepository;
pub use interview_repository::InterviewRepository;
