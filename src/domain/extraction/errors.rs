//! Extraction failure taxonomy.

use std::fmt;
use thiserror::Error;

/// Why a piece of AI output could not be turned into a validated record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtractionErrorKind {
    /// The raw input was empty or whitespace-only (fences included).
    EmptyInput,
    /// No balanced object/array span could be isolated from the text.
    NoStructuredSpanFound,
    /// An isolated span was not valid JSON.
    ParseFailure,
    /// Parsed, but a required field was missing or had the wrong type.
    /// Carries the path of the first offending field (`feedback`,
    /// `[2].Answer`, `communication.rating`, or `$` for the root).
    ShapeMismatch(String),
}

impl ExtractionErrorKind {
    /// Stable machine-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExtractionErrorKind::EmptyInput => "empty_input",
            ExtractionErrorKind::NoStructuredSpanFound => "no_structured_span_found",
            ExtractionErrorKind::ParseFailure => "parse_failure",
            ExtractionErrorKind::ShapeMismatch(_) => "shape_mismatch",
        }
    }
}

impl fmt::Display for ExtractionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionErrorKind::ShapeMismatch(field) => write!(f, "shape_mismatch({})", field),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// A classified extraction failure.
///
/// Always carries the unmodified raw model output so callers can log it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct ExtractionFailure {
    pub kind: ExtractionErrorKind,
    pub detail: String,
    pub raw_input: String,
}

impl ExtractionFailure {
    /// Creates a failure of the given kind.
    pub fn new(kind: ExtractionErrorKind, detail: impl Into<String>, raw_input: &str) -> Self {
        Self {
            kind,
            detail: detail.into(),
            raw_input: raw_input.to_string(),
        }
    }

    /// True when asking the model again has a reasonable chance of success.
    ///
    /// Shape mismatches and empty replies are left to the caller's product
    /// rules (defaulting a field, or giving up).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ExtractionErrorKind::NoStructuredSpanFound | ExtractionErrorKind::ParseFailure
        )
    }

    /// The offending field path, for shape mismatches.
    pub fn mismatched_field(&self) -> Option<&str> {
        match &self.kind {
            ExtractionErrorKind::ShapeMismatch(field) => Some(field),
            _ => None,
        }
    }
}
