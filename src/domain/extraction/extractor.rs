//! Turns free-form model output into a validated JSON value.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::{ExtractionErrorKind, ExtractionFailure};
use super::scanner::{find_structured_span, normalize_control_chars, strip_fences};
use super::shape::{ExpectedShape, ROOT_PATH};

/// Outcome of an extraction: the validated value, or a classified failure.
pub type ExtractionResult = Result<Value, ExtractionFailure>;

/// Extracts the structured payload expected by `shape` from raw model text.
///
/// # Steps
/// 1. Reject empty input
/// 2. Strip wrapping code fences
/// 3. Isolate the first balanced object (or array, for list shapes)
/// 4. Escape control characters inside string literals, drop the rest
/// 5. Parse as JSON
/// 6. Validate against `shape`
///
/// Only the first balanced span is considered. If it fails to parse the
/// result is a `ParseFailure`; later spans are not tried.
///
/// Pure and deterministic: the same input always yields the same result.
pub fn extract(raw: &str, shape: &ExpectedShape) -> ExtractionResult {
    if raw.trim().is_empty() {
        return Err(ExtractionFailure::new(
            ExtractionErrorKind::EmptyInput,
            "model output is empty",
            raw,
        ));
    }

    let payload = strip_fences(raw);
    if payload.is_empty() {
        return Err(ExtractionFailure::new(
            ExtractionErrorKind::EmptyInput,
            "model output contains only code fences",
            raw,
        ));
    }

    let span = find_structured_span(payload, shape.accepts_array()).ok_or_else(|| {
        let wanted = if shape.accepts_array() {
            "object or array"
        } else {
            "object"
        };
        ExtractionFailure::new(
            ExtractionErrorKind::NoStructuredSpanFound,
            format!("no balanced JSON {} found", wanted),
            raw,
        )
    })?;

    let normalized = normalize_control_chars(span.text);
    let value: Value = serde_json::from_str(&normalized).map_err(|e| {
        ExtractionFailure::new(ExtractionErrorKind::ParseFailure, e.to_string(), raw)
    })?;

    shape.validate(value).map_err(|violation| {
        ExtractionFailure::new(
            ExtractionErrorKind::ShapeMismatch(violation.field.clone()),
            format!("field '{}': {}", violation.field, violation.reason),
            raw,
        )
    })
}

/// Extracts and deserializes into `T`.
///
/// A value that passes `shape` but still does not fit `T` is reported as a
/// shape mismatch at the root.
pub fn extract_as<T: DeserializeOwned>(
    raw: &str,
    shape: &ExpectedShape,
) -> Result<T, ExtractionFailure> {
    let value = extract(raw, shape)?;
    serde_json::from_value(value).map_err(|e| {
        ExtractionFailure::new(
            ExtractionErrorKind::ShapeMismatch(ROOT_PATH.to_string()),
            e.to_string(),
            raw,
        )
    })
}
