//! Trivia question and its create payload

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::validation::{int_value, ValidationError};

/// Lowest accepted difficulty
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest accepted difficulty
pub const MAX_DIFFICULTY: i32 = 5;

/// Question row, serialised as-is
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Raw create body.
///
/// Fields stay loosely typed so that malformed values surface as a
/// `ValidationError` instead of a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

/// Validated question ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = non_empty("question", question.into())?;
        let answer = non_empty("answer", answer.into())?;

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let question = text_field("question", req.question)?;
        let answer = text_field("answer", req.answer)?;
        let category = int_field("category", req.category)?;
        let difficulty = int_field("difficulty", req.difficulty)?;

        Self::new(question, answer, category, difficulty)
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn text_field(field: &'static str, value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::NotAString { field }),
    }
}

/// Accepts a JSON integer or a string holding one (form values arrive as strings).
fn int_field(field: &'static str, value: Option<Value>) -> Result<i32, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(v) => int_value(&v).ok_or(ValidationError::NotAnInteger { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> CreateQuestionRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_numeric_strings() {
        let new = NewQuestion::try_from(request(json!({
            "question": "  What is the boiling point of water?  ",
            "answer": "100C",
            "category": "1",
            "difficulty": 2
        })))
        .unwrap();

        assert_eq!(new.question, "What is the boiling point of water?");
        assert_eq!(new.category, 1);
        assert_eq!(new.difficulty, 2);
    }

    #[test]
    fn rejects_non_numeric_category_and_difficulty() {
        let err = NewQuestion::try_from(request(json!({
            "question": "question 1",
            "answer": "answer 1",
            "category": "category 1",
            "difficulty": "difficulty 1"
        })))
        .unwrap_err();
        assert_eq!(err, ValidationError::NotAnInteger { field: "category" });

        let err = NewQuestion::try_from(request(json!({
            "question": "question 1",
            "answer": "answer 1",
            "category": 1,
            "difficulty": 2.5
        })))
        .unwrap_err();
        assert_eq!(err, ValidationError::NotAnInteger { field: "difficulty" });
    }

    #[test]
    fn rejects_missing_and_blank_text() {
        let err = NewQuestion::try_from(request(json!({
            "answer": "a",
            "category": 1,
            "difficulty": 1
        })))
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "question" });

        let err = NewQuestion::try_from(request(json!({
            "question": "q",
            "answer": "   ",
            "category": 1,
            "difficulty": 1
        })))
        .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "answer" });
    }

    #[test]
    fn difficulty_range() {
        assert!(NewQuestion::new("q", "a", 1, 0).is_err());
        assert!(NewQuestion::new("q", "a", 1, 6).is_err());
        assert!(NewQuestion::new("q", "a", 1, 5).is_ok());
    }
}
