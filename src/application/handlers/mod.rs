//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod interview;

pub use interview::{
    // Commands and results
    CreateInterviewCommand, CreateInterviewHandler, CreateInterviewResult,
    GenerateAnswerReportCommand, GenerateAnswerReportHandler, GenerateAnswerReportResult,
    RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult,
    // Queries
    GetFeedbackSummaryHandler, GetFeedbackSummaryQuery,
    GetInterviewReportHandler, GetInterviewReportQuery, InterviewReport,
    ListInterviewsHandler, ListInterviewsQuery,
    // Shared
    InterviewSettings, StructuredRequester,
};
