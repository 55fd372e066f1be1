//! Feedback module - answer evaluations, rating aggregation and reports.

mod aggregation;
mod answer;
mod rating;
mod report;
mod summary;

pub use aggregation::{aggregate, OverallRating, MAX_OVERALL_RATING, MIN_OVERALL_RATING};
pub use answer::{AnswerFeedback, UserAnswer};
pub use rating::RawRating;
pub use report::{humanize_skill, ReportRow, SkillAssessment, SkillReport, SKILL_RATING_SCALE};
pub use summary::FeedbackSummary;
