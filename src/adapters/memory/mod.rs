//! In-memory persistence adapters.
//!
//! Back the repository ports with tokio `RwLock`-guarded collections. Used
//! by tests and by local runs without a database.

mod in_memory_answer_repository;
mod in_memory_interview_repository;

pub use in_memory_answer_repository::InMemoryAnswerRepository;
pub use in_memory_interview_repository::InMemoryInterviewRepository;
