//! Per-user state while answering an interview.
//!
//! Tracks which question is active, the transcript segments delivered by
//! the speech-to-text collaborator, and whether recording or a submission
//! is in progress.

use thiserror::Error;

/// Default minimum answer length, in characters. Answers must be longer.
pub const DEFAULT_MIN_ANSWER_LENGTH: usize = 10;

/// Rejected session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerSessionError {
    #[error("question index {index} is out of range for {count} questions")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("recording is in progress")]
    Recording,

    #[error("a submission is already in progress")]
    Submitting,

    #[error("answer must be longer than {min_length} characters, got {actual}")]
    AnswerTooShort { min_length: usize, actual: usize },
}

/// An answer handed off for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnswer {
    pub question_index: usize,
    pub answer: String,
}

/// Explicit answering state for one interview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSession {
    question_count: usize,
    active_question: usize,
    transcript: Vec<String>,
    recording: bool,
    loading: bool,
    min_answer_length: usize,
}

impl AnswerSession {
    /// Starts on the first question with an empty transcript.
    pub fn new(question_count: usize, min_answer_length: usize) -> Self {
        Self {
            question_count,
            active_question: 0,
            transcript: Vec::new(),
            recording: false,
            loading: false,
            min_answer_length,
        }
    }

    pub fn active_question(&self) -> usize {
        self.active_question
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Moves to another question, discarding any unsubmitted transcript.
    pub fn select_question(&mut self, index: usize) -> Result<(), AnswerSessionError> {
        if index >= self.question_count {
            return Err(AnswerSessionError::QuestionOutOfRange {
                index,
                count: self.question_count,
            });
        }
        self.ensure_idle()?;
        if index != self.active_question {
            self.transcript.clear();
        }
        self.active_question = index;
        Ok(())
    }

    /// Starts recording. Recording again while already recording is a no-op.
    pub fn start_recording(&mut self) -> Result<(), AnswerSessionError> {
        if self.loading {
            return Err(AnswerSessionError::Submitting);
        }
        self.recording = true;
        Ok(())
    }

    /// Stops recording and reports whether the answer can be submitted now.
    pub fn stop_recording(&mut self) -> bool {
        self.recording = false;
        self.is_ready_to_submit()
    }

    /// Appends one transcript segment. Blank segments are ignored.
    pub fn push_transcript(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        let trimmed = segment.trim();
        if !trimmed.is_empty() {
            self.transcript.push(trimmed.to_string());
        }
    }

    /// Replaces the transcript with `text`, e.g. after manual editing.
    pub fn set_transcript(&mut self, text: impl Into<String>) {
        self.transcript.clear();
        self.push_transcript(text);
    }

    /// The current answer: segments joined by single spaces.
    pub fn answer_text(&self) -> String {
        self.transcript.join(" ").trim().to_string()
    }

    /// True when not recording, not submitting, and the answer is long enough.
    pub fn is_ready_to_submit(&self) -> bool {
        !self.recording
            && !self.loading
            && self.answer_text().chars().count() > self.min_answer_length
    }

    /// Marks a submission as in flight and returns what to submit.
    pub fn begin_submission(&mut self) -> Result<PendingAnswer, AnswerSessionError> {
        self.ensure_idle()?;
        let answer = self.answer_text();
        let actual = answer.chars().count();
        if actual <= self.min_answer_length {
            return Err(AnswerSessionError::AnswerTooShort {
                min_length: self.min_answer_length,
                actual,
            });
        }
        self.loading = true;
        Ok(PendingAnswer {
            question_index: self.active_question,
            answer,
        })
    }

    /// Ends the in-flight submission. The transcript is kept on failure so
    /// the user can retry.
    pub fn finish_submission(&mut self, success: bool) {
        self.loading = false;
        if success {
            self.transcript.clear();
        }
    }

    fn ensure_idle(&self) -> Result<(), AnswerSessionError> {
        if self.loading {
            return Err(AnswerSessionError::Submitting);
        }
        if self.recording {
            return Err(AnswerSessionError::Recording);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AnswerSession {
        AnswerSession::new(3, DEFAULT_MIN_ANSWER_LENGTH)
    }

    #[test]
    fn transcript_segments_are_joined_with_single_spaces() {
        let mut s = session();
        s.push_transcript("I would use");
        s.push_transcript("  ");
        s.push_transcript(" a hash map ");
        assert_eq!(s.answer_text(), "I would use a hash map");
    }

    #[test]
    fn set_transcript_replaces_segments() {
        let mut s = session();
        s.push_transcript("first");
        s.set_transcript("edited answer");
        assert_eq!(s.answer_text(), "edited answer");
    }

    #[test]
    fn stop_recording_reports_readiness() {
        let mut s = session();
        s.start_recording().unwrap();
        s.push_transcript("short");
        assert!(!s.is_ready_to_submit());
        assert!(!s.stop_recording());

        s.start_recording().unwrap();
        s.push_transcript("and now much longer");
        assert!(!s.is_ready_to_submit());
        assert!(s.stop_recording());
    }

    #[test]
    fn exactly_minimum_length_is_not_enough() {
        let mut s = session();
        s.set_transcript("0123456789");
        assert!(!s.is_ready_to_submit());
        s.set_transcript("0123456789a");
        assert!(s.is_ready_to_submit());
    }

    #[test]
    fn begin_submission_rejects_short_answers() {
        let mut s = session();
        s.set_transcript("too short");
        assert_eq!(
            s.begin_submission(),
            Err(AnswerSessionError::AnswerTooShort {
                min_length: 10,
                actual: 9
            })
        );
        assert!(!s.is_loading());
    }

    #[test]
    fn submission_lifecycle_clears_transcript_on_success() {
        let mut s = session();
        s.select_question(1).unwrap();
        s.set_transcript("Ownership moves values between bindings");

        let pending = s.begin_submission().unwrap();
        assert_eq!(pending.question_index, 1);
        assert_eq!(pending.answer, "Ownership moves values between bindings");
        assert!(s.is_loading());
        assert_eq!(s.begin_submission(), Err(AnswerSessionError::Submitting));
        assert_eq!(s.start_recording(), Err(AnswerSessionError::Submitting));

        s.finish_submission(true);
        assert!(!s.is_loading());
        assert_eq!(s.answer_text(), "");
    }

    #[test]
    fn failed_submission_keeps_transcript() {
        let mut s = session();
        s.set_transcript("Ownership moves values between bindings");
        s.begin_submission().unwrap();
        s.finish_submission(false);
        assert!(!s.is_loading());
        assert!(s.is_ready_to_submit());
    }

    #[test]
    fn select_question_validates_index_and_state() {
        let mut s = session();
        assert_eq!(
            s.select_question(3),
            Err(AnswerSessionError::QuestionOutOfRange { index: 3, count: 3 })
        );

        s.start_recording().unwrap();
        assert_eq!(s.select_question(1), Err(AnswerSessionError::Recording));
        s.stop_recording();

        s.push_transcript("draft for question one");
        s.select_question(2).unwrap();
        assert_eq!(s.active_question(), 2);
        assert_eq!(s.answer_text(), "");
    }

    #[test]
    fn cannot_submit_while_recording() {
        let mut s = session();
        s.start_recording().unwrap();
        s.push_transcript("a long enough spoken answer");
        assert_eq!(s.begin_submission(), Err(AnswerSessionError::Recording));
    }
}
