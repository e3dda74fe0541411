//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CategoryRepo, QuestionRepo};
use super::{DbError, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

/// `TriviaStore` over a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list_by_category(category_id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).insert(new).await
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool)
            .quiz_candidates(category, exclude)
            .await
    }
}
