//! Declarative descriptors of the structure expected from the model.

use serde_json::{Map, Value};

use crate::domain::foundation::parse_leading_number;

/// Primitive type a field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    /// A JSON number, or a string starting with a decimal number (`"8/10"`).
    Numeric,
    Boolean,
    Object,
    Array,
    /// Any value, `null` included, as long as the key is present.
    Any,
}

impl FieldType {
    /// Returns true if `value` satisfies this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Numeric => match value {
                Value::Number(_) => true,
                Value::String(s) => parse_leading_number(s).is_some(),
                _ => false,
            },
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object => value.is_object(),
            FieldType::Array => value.is_array(),
            FieldType::Any => true,
        }
    }

    /// Human-readable type name used in mismatch details.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Numeric => "numeric",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
            FieldType::Any => "any",
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A required field and its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// The set of fields one record must carry. Extra keys are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordShape {
    fields: Vec<FieldSpec>,
}

impl RecordShape {
    /// Builds a record shape from `(name, type)` pairs.
    pub fn new<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, FieldType)>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, field_type)| FieldSpec::new(name, field_type))
                .collect(),
        }
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn validate(&self, value: &Value, path: Option<&str>) -> Result<(), ShapeViolation> {
        let obj = match value {
            Value::Object(obj) => obj,
            other => {
                return Err(ShapeViolation::new(
                    path.unwrap_or(ROOT_PATH),
                    format!("expected object, got {}", json_type_name(other)),
                ))
            }
        };

        for field in &self.fields {
            let field_path = match path {
                Some(prefix) => format!("{}.{}", prefix, field.name),
                None => field.name.clone(),
            };
            match obj.get(&field.name) {
                None => {
                    return Err(ShapeViolation::new(field_path, "missing required field"));
                }
                Some(v) if !field.field_type.matches(v) => {
                    return Err(ShapeViolation::new(
                        field_path,
                        format!(
                            "expected {}, got {}",
                            field.field_type.name(),
                            json_type_name(v)
                        ),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Path used when the root value itself has the wrong structure.
pub const ROOT_PATH: &str = "$";

/// What the caller expects the model to have produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedShape {
    /// A single object.
    Record(RecordShape),
    /// A list of objects. A lone object is accepted as a one-element list.
    ListOf(RecordShape),
    /// An object whose every value is a record (keys are free-form).
    MapOf(RecordShape),
}

impl ExpectedShape {
    /// Shorthand for `ExpectedShape::Record(RecordShape::new(fields))`.
    pub fn record<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, FieldType)>,
    {
        ExpectedShape::Record(RecordShape::new(fields))
    }

    /// Shorthand for `ExpectedShape::ListOf(RecordShape::new(fields))`.
    pub fn list_of<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, FieldType)>,
    {
        ExpectedShape::ListOf(RecordShape::new(fields))
    }

    /// Shorthand for `ExpectedShape::MapOf(RecordShape::new(fields))`.
    pub fn map_of<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, FieldType)>,
    {
        ExpectedShape::MapOf(RecordShape::new(fields))
    }

    /// Whether a top-level array may satisfy this shape.
    pub fn accepts_array(&self) -> bool {
        matches!(self, ExpectedShape::ListOf(_))
    }

    /// Validates `value`, returning it in canonical form.
    ///
    /// For list shapes a single object is wrapped into a one-element array.
    /// Elements are checked in order and the first invalid one is reported.
    pub fn validate(&self, value: Value) -> Result<Value, ShapeViolation> {
        match self {
            ExpectedShape::Record(record) => {
                record.validate(&value, None)?;
                Ok(value)
            }
            ExpectedShape::ListOf(record) => {
                let items = match value {
                    Value::Array(items) => items,
                    obj @ Value::Object(_) => vec![obj],
                    other => {
                        return Err(ShapeViolation::new(
                            ROOT_PATH,
                            format!("expected array, got {}", json_type_name(&other)),
                        ))
                    }
                };
                for (index, item) in items.iter().enumerate() {
                    record.validate(item, Some(&format!("[{}]", index)))?;
                }
                Ok(Value::Array(items))
            }
            ExpectedShape::MapOf(record) => {
                let entries: &Map<String, Value> = value.as_object().ok_or_else(|| {
                    ShapeViolation::new(
                        ROOT_PATH,
                        format!("expected object, got {}", json_type_name(&value)),
                    )
                })?;
                for (key, item) in entries {
                    record.validate(item, Some(key))?;
                }
                Ok(value)
            }
        }
    }
}

/// The first field that did not satisfy a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeViolation {
    pub field: String,
    pub reason: String,
}

impl ShapeViolation {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feedback_shape() -> ExpectedShape {
        ExpectedShape::record([("rating", FieldType::Number), ("feedback", FieldType::String)])
    }

    #[test]
    fn record_accepts_matching_object_with_extra_keys() {
        let value = json!({"rating": 8, "feedback": "Good", "extra": true});
        assert_eq!(feedback_shape().validate(value.clone()), Ok(value));
    }

    #[test]
    fn record_reports_first_missing_field() {
        let err = feedback_shape().validate(json!({"rating": 8})).unwrap_err();
        assert_eq!(err.field, "feedback");
        assert_eq!(err.reason, "missing required field");
    }

    #[test]
    fn record_reports_wrong_type() {
        let err = feedback_shape()
            .validate(json!({"rating": "eight", "feedback": "ok"}))
            .unwrap_err();
        assert_eq!(err.field, "rating");
        assert_eq!(err.reason, "expected number, got string");
    }

    #[test]
    fn record_rejects_non_object_root() {
        let err = feedback_shape().validate(json!([1, 2])).unwrap_err();
        assert_eq!(err.field, ROOT_PATH);
    }

    #[test]
    fn numeric_accepts_numbers_and_numeric_strings() {
        assert!(FieldType::Numeric.matches(&json!(7)));
        assert!(FieldType::Numeric.matches(&json!("8/10")));
        assert!(!FieldType::Numeric.matches(&json!("great")));
        assert!(!FieldType::Numeric.matches(&json!(null)));
    }

    #[test]
    fn any_requires_presence_only() {
        let shape = ExpectedShape::record([("note", FieldType::Any)]);
        assert!(shape.validate(json!({"note": null})).is_ok());
        assert_eq!(shape.validate(json!({})).unwrap_err().field, "note");
    }

    #[test]
    fn list_wraps_single_object() {
        let shape = ExpectedShape::list_of([("Question", FieldType::String)]);
        let value = shape.validate(json!({"Question": "Why Rust?"})).unwrap();
        assert_eq!(value, json!([{"Question": "Why Rust?"}]));
    }

    #[test]
    fn list_reports_index_of_first_invalid_element() {
        let shape = ExpectedShape::list_of([
            ("Question", FieldType::String),
            ("Answer", FieldType::String),
        ]);
        let value = json!([
            {"Question": "a", "Answer": "b"},
            {"Question": "c"},
            {"Answer": "d"}
        ]);
        let err = shape.validate(value).unwrap_err();
        assert_eq!(err.field, "[1].Answer");
    }

    #[test]
    fn list_reports_non_object_element_by_index() {
        let shape = ExpectedShape::list_of([("Question", FieldType::String)]);
        let err = shape.validate(json!([{"Question": "a"}, "oops"])).unwrap_err();
        assert_eq!(err.field, "[1]");
    }

    #[test]
    fn empty_list_is_valid() {
        let shape = ExpectedShape::list_of([("Question", FieldType::String)]);
        assert_eq!(shape.validate(json!([])), Ok(json!([])));
    }

    #[test]
    fn map_validates_every_value() {
        let shape =
            ExpectedShape::map_of([("rating", FieldType::Numeric), ("feedback", FieldType::String)]);
        let ok = json!({
            "communication": {"rating": 4, "feedback": "Clear"},
            "technical_depth": {"rating": "3/5", "feedback": "Shallow"}
        });
        assert!(shape.validate(ok).is_ok());

        let bad = json!({
            "communication": {"rating": 4, "feedback": "Clear"},
            "technical_depth": {"feedback": "Shallow"}
        });
        assert_eq!(shape.validate(bad).unwrap_err().field, "technical_depth.rating");
    }

    #[test]
    fn only_list_shapes_accept_arrays() {
        assert!(ExpectedShape::list_of([("a", FieldType::Any)]).accepts_array());
        assert!(!ExpectedShape::record([("a", FieldType::Any)]).accepts_array());
        assert!(!ExpectedShape::map_of([("a", FieldType::Any)]).accepts_array());
    }
}
