//! Job profile value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Upper bound accepted for years of experience.
pub const MAX_YEARS_OF_EXPERIENCE: u8 = 20;

/// The role a mock interview is generated for.
///
/// # Invariants
///
/// - `position` and `description` are trimmed and non-empty
/// - `years_of_experience` is within `0..=MAX_YEARS_OF_EXPERIENCE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobProfile {
    position: String,
    description: String,
    years_of_experience: u8,
}

impl JobProfile {
    /// Creates a validated job profile.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if position or description is blank
    /// - `OutOfRange` if years of experience exceeds the maximum
    pub fn new(
        position: impl Into<String>,
        description: impl Into<String>,
        years_of_experience: u32,
    ) -> Result<Self, ValidationError> {
        let position = position.into().trim().to_string();
        if position.is_empty() {
            return Err(ValidationError::empty_field("position"));
        }

        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(ValidationError::empty_field("description"));
        }

        if years_of_experience > MAX_YEARS_OF_EXPERIENCE as u32 {
            return Err(ValidationError::out_of_range(
                "years_of_experience",
                0,
                MAX_YEARS_OF_EXPERIENCE as i64,
                years_of_experience as i64,
            ));
        }

        Ok(Self {
            position,
            description,
            years_of_experience: years_of_experience as u8,
        })
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn years_of_experience(&self) -> u8 {
        self.years_of_experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_valid_profile() {
        let profile = JobProfile::new("  Backend Engineer ", " Rust, Postgres ", 4).unwrap();
        assert_eq!(profile.position(), "Backend Engineer");
        assert_eq!(profile.description(), "Rust, Postgres");
        assert_eq!(profile.years_of_experience(), 4);
    }

    #[test]
    fn rejects_blank_position() {
        let err = JobProfile::new("   ", "Rust", 1).unwrap_err();
        assert_eq!(err.field(), "position");
    }

    #[test]
    fn rejects_blank_description() {
        let err = JobProfile::new("Engineer", "", 1).unwrap_err();
        assert_eq!(err.field(), "description");
    }

    #[test]
    fn accepts_boundary_years() {
        assert!(JobProfile::new("Engineer", "Rust", 0).is_ok());
        assert!(JobProfile::new("Engineer", "Rust", 20).is_ok());
    }

    #[test]
    fn rejects_too_many_years() {
        let err = JobProfile::new("Engineer", "Rust", 21).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("years_of_experience", 0, 20, 21));
    }
}
