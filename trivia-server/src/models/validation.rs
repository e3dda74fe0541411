//! Validation error types

use std::fmt;

use serde_json::Value;

/// Validation error for question payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent or null
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field should be a string
    NotAString { field: &'static str },

    /// Field is neither an integer nor a string holding one
    NotAnInteger { field: &'static str },

    /// Integer outside its allowed range
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotAString { field } => write!(f, "{} must be a string", field),
            Self::NotAnInteger { field } => write!(f, "{} must be an integer", field),
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Read a JSON integer, or a string holding one, as `i32`.
pub fn int_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}
