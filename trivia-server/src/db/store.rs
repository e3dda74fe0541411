//! Persistence seam used by the HTTP handlers

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violated: {0}")]
    Constraint(String),
}

/// Storage operations for categories and questions.
///
/// Every list comes back ordered by id; pagination happens above this layer.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError>;

    async fn list_questions(&self) -> Result<Vec<Question>, DbError>;

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>, DbError>;

    /// Case-insensitive literal substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError>;

    /// Insert a question. Fails with `DbError::Constraint` when the category does not exist.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    /// Delete a question. Fails with `DbError::NotFound` when absent.
    async fn delete_question(&self, id: i32) -> Result<(), DbError>;

    /// Questions not in `exclude`, restricted to `category` when given.
    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError>;
}
