//! Question repository
//!
//! - insert: INSERT ... SELECT against categories (no check-then-insert)
//! - search: ILIKE with escaped wildcards

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewQuestion, Question};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions belonging to one category, ordered by id.
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring search on question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }

    /// Insert a question, only if its category exists.
    ///
    /// The SELECT over `categories` yields no row for an unknown category,
    /// so nothing is inserted and `DbError::Constraint` is returned.
    pub async fn insert(&self, new: NewQuestion) -> Result<Question, DbError> {
        let category = new.category;
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            SELECT $1, $2, c.id, $4
            FROM categories c
            WHERE c.id = $3
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::Constraint(format!("category {} does not exist", category)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Unseen questions for a quiz round. `None` spans every category.
    pub async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::int4 IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category)
        .bind(exclude)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }
}

/// Escape LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
