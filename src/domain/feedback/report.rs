//! Per-skill reports and their flattened table form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::extraction::{ExpectedShape, FieldType};
use crate::domain::foundation::ValidationError;

use super::{RawRating, UserAnswer};

/// Scale skill ratings are given on.
pub const SKILL_RATING_SCALE: u32 = 5;

/// The model's assessment of one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAssessment {
    #[serde(default)]
    pub rating: RawRating,
    pub feedback: String,
}

/// Skill assessments in the order the model produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillReport {
    skills: Vec<(String, SkillAssessment)>,
}

impl SkillReport {
    /// Shape of a skill-report reply: an object keyed by skill name.
    pub fn shape() -> ExpectedShape {
        ExpectedShape::map_of([("rating", FieldType::Numeric), ("feedback", FieldType::String)])
    }

    pub fn new(skills: Vec<(String, SkillAssessment)>) -> Self {
        Self { skills }
    }

    /// Builds a report from an extracted JSON object, keeping key order.
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let entries = match value {
            Value::Object(entries) => entries,
            _ => return Err(ValidationError::invalid_format("report", "expected an object")),
        };

        let skills = entries
            .into_iter()
            .map(|(skill, details)| {
                serde_json::from_value::<SkillAssessment>(details)
                    .map(|assessment| (skill.clone(), assessment))
                    .map_err(|e| ValidationError::invalid_format(skill, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { skills })
    }

    pub fn skills(&self) -> &[(String, SkillAssessment)] {
        &self.skills
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// One line of an exported interview report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// 1-based question number.
    pub number: usize,
    pub question: String,
    pub skill: String,
    /// Rating rendered as `N/5`.
    pub rating: String,
    pub feedback: String,
}

impl ReportRow {
    /// Rows for one answer; empty if it has no report yet.
    pub fn rows_for(answer: &UserAnswer) -> Vec<ReportRow> {
        let Some(report) = &answer.report else {
            return Vec::new();
        };

        report
            .skills()
            .iter()
            .map(|(skill, assessment)| ReportRow {
                number: answer.question_index + 1,
                question: answer.question.clone(),
                skill: humanize_skill(skill),
                rating: format_skill_rating(&assessment.rating),
                feedback: assessment.feedback.clone(),
            })
            .collect()
    }
}

/// `technical_knowledge` -> `Technical knowledge`.
pub fn humanize_skill(skill: &str) -> String {
    let spaced = skill.trim().replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_skill_rating(rating: &RawRating) -> String {
    match rating.numeric() {
        Some(n) => format!("{}/{}", n, SKILL_RATING_SCALE),
        None => format!("-/{}", SKILL_RATING_SCALE),
    }
}
