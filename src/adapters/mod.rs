//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Generative model providers (Gemini, mock)
//! - `memory` - In-memory repositories

pub mod ai;
pub mod memory;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider, MockError};
pub use memory::{InMemoryAnswerRepository, InMemoryInterviewRepository};
