//! Interview module - job profiles, generated interviews and answering state.

mod aggregate;
mod answer_session;
mod errors;
mod profile;
pub mod prompts;
mod question;

pub use aggregate::{InterviewSummary, MockInterview};
pub use answer_session::{
    AnswerSession, AnswerSessionError, PendingAnswer, DEFAULT_MIN_ANSWER_LENGTH,
};
pub use errors::InterviewError;
pub use profile::{JobProfile, MAX_YEARS_OF_EXPERIENCE};
pub use question::InterviewQuestion;
