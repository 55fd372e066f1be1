//! Ratings as the model reports them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::parse_leading_number;

/// A rating exactly as produced by the model: a number, free text such as
/// `"8/10"`, or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRating {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawRating {
    /// The numeric value, read leniently. `None` if nothing numeric is there.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            RawRating::Number(n) if n.is_finite() => Some(*n),
            RawRating::Number(_) => None,
            RawRating::Text(s) => parse_leading_number(s),
            RawRating::Missing => None,
        }
    }
}

impl From<f64> for RawRating {
    fn from(value: f64) -> Self {
        RawRating::Number(value)
    }
}

impl From<&str> for RawRating {
    fn from(value: &str) -> Self {
        RawRating::Text(value.to_string())
    }
}

impl fmt::Display for RawRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawRating::Number(n) => write!(f, "{}", n),
            RawRating::Text(s) => write!(f, "{}", s),
            RawRating::Missing => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_reads_numbers_and_text() {
        assert_eq!(RawRating::Number(7.0).numeric(), Some(7.0));
        assert_eq!(RawRating::from("8/10").numeric(), Some(8.0));
        assert_eq!(RawRating::from("excellent").numeric(), None);
        assert_eq!(RawRating::Missing.numeric(), None);
        assert_eq!(RawRating::Number(f64::NAN).numeric(), None);
    }

    #[test]
    fn deserializes_from_any_json_scalar() {
        let r: RawRating = serde_json::from_value(json!(8)).unwrap();
        assert_eq!(r, RawRating::Number(8.0));
        let r: RawRating = serde_json::from_value(json!("6.5")).unwrap();
        assert_eq!(r, RawRating::Text("6.5".to_string()));
        let r: RawRating = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(r, RawRating::Missing);
    }

    #[test]
    fn displays_as_produced() {
        assert_eq!(RawRating::Number(8.0).to_string(), "8");
        assert_eq!(RawRating::Number(7.5).to_string(), "7.5");
        assert_eq!(RawRating::from("9/10").to_string(), "9/10");
        assert_eq!(RawRating::Missing.to_string(), "");
    }
}
