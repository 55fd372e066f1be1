//! Interview handlers.
//!
//! Commands generate interviews, evaluate answers and build skill reports
//! through the AI provider. Queries read back summaries and reports.

mod access;
mod create_interview;
mod generate_answer_report;
mod get_feedback_summary;
mod get_interview_report;
mod list_interviews;
mod record_answer;
mod settings;
mod structured_request;

pub use create_interview::{CreateInterviewCommand, CreateInterviewHandler, CreateInterviewResult};
pub use generate_answer_report::{
    GenerateAnswerReportCommand, GenerateAnswerReportHandler, GenerateAnswerReportResult,
};
pub use get_feedback_summary::{GetFeedbackSummaryHandler, GetFeedbackSummaryQuery};
pub use get_interview_report::{GetInterviewReportHandler, GetInterviewReportQuery, InterviewReport};
pub use list_interviews::{ListInterviewsHandler, ListInterviewsQuery};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use settings::InterviewSettings;
pub use structured_request::StructuredRequester;
