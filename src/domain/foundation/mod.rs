//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the mock interview domain.

mod errors;
mod ids;
mod numeric;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnswerId, InterviewId, UserId};
pub use numeric::parse_leading_number;
pub use timestamp::Timestamp;
