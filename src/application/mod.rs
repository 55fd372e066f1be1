//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers call the AI provider and write; query handlers only read.

pub mod handlers;

pub use handlers::{
    CreateInterviewCommand, CreateInterviewHandler, CreateInterviewResult,
    GenerateAnswerReportCommand, GenerateAnswerReportHandler, GenerateAnswerReportResult,
    GetFeedbackSummaryHandler, GetFeedbackSummaryQuery, GetInterviewReportHandler,
    GetInterviewReportQuery, InterviewReport, InterviewSettings, ListInterviewsHandler,
    ListInterviewsQuery, RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult,
    StructuredRequester,
};
