//! Structured-response extraction.
//!
//! Model replies are requested as JSON but arrive as free-form text: wrapped
//! in code fences, surrounded by prose, or carrying raw newlines inside
//! string values. This module isolates the payload, repairs what can be
//! repaired without changing meaning, parses it and validates it against an
//! [`ExpectedShape`].

mod errors;
mod extractor;
mod scanner;
mod shape;

pub use errors::{ExtractionErrorKind, ExtractionFailure};
pub use extractor::{extract, extract_as, ExtractionResult};
pub use scanner::{find_structured_span, normalize_control_chars, strip_fences, Span, SpanKind};
pub use shape::{ExpectedShape, FieldSpec, FieldType, RecordShape, ShapeViolation, ROOT_PATH};
