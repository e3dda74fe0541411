//! Trivia category

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category row. Serialised as `{"id": .., "type": ..}`, matching the column name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_kind_as_type() {
        let category = Category::new(1, "Science");
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value, serde_json::json!({ "id": 1, "type": "Science" }));
    }
}
