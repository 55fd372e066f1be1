//! Interview question with its reference answer.

use serde::{Deserialize, Serialize};

use crate::domain::extraction::{ExpectedShape, FieldType};

/// One generated question and the model's reference answer.
///
/// Field names follow what the model is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Answer")]
    pub answer: String,
}

impl InterviewQuestion {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Shape of a question-generation reply: a list of `{Question, Answer}`.
    pub fn list_shape() -> ExpectedShape {
        ExpectedShape::list_of([("Question", FieldType::String), ("Answer", FieldType::String)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction::extract_as;

    #[test]
    fn serializes_with_model_field_names() {
        let q = InterviewQuestion::new("What is ownership?", "A set of rules...");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["Question"], "What is ownership?");
        assert_eq!(json["Answer"], "A set of rules...");
    }

    #[test]
    fn fenced_single_question_extracts_as_one_element_list() {
        let raw = "```json\n{\"Question\":\"Explain closures\",\"Answer\":\"A closure is...\"}\n```";
        let questions: Vec<InterviewQuestion> =
            extract_as(raw, &InterviewQuestion::list_shape()).unwrap();
        assert_eq!(
            questions,
            vec![InterviewQuestion::new("Explain closures", "A closure is...")]
        );
    }
}
