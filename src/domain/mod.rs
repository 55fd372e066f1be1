//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `extraction` - Structured-response extraction from model output
//! - `interview` - Job profiles, generated interviews, answering state
//! - `feedback` - Answer evaluations, rating aggregation, skill reports

pub mod extraction;
pub mod feedback;
pub mod foundation;
pub mod interview;
