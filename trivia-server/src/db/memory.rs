//! In-process store with the same semantics as `PgStore`
//!
//! Backs the router tests and `trivia serve --in-memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

/// `TriviaStore` held in memory behind a `RwLock`
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed rows. Rows are kept ordered by id.
    pub fn with_data(mut categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        categories.sort_by_key(|c| c.id);
        questions.sort_by_key(|q| q.id);
        let next_question_id = questions.last().map(|q| q.id + 1).unwrap_or(1);

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// The stock trivia data set: six categories and a handful of questions.
    pub fn sample() -> Self {
        let categories = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
            .into_iter()
            .zip(1..)
            .map(|(kind, id)| Category::new(id, kind))
            .collect();

        let rows: [(&str, &str, i32, i32); 12] = [
            ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
            ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
            ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
            ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 2, 1),
            ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
            ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
            ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
            ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
            ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
            ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
            ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
            ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        ];
        let questions = rows
            .into_iter()
            .zip(1..)
            .map(|((question, answer, category, difficulty), id)| Question {
                id,
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            })
            .collect();

        Self::with_data(categories, questions)
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.tables.read().await.questions.clone())
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;

        if !tables.categories.iter().any(|c| c.id == new.category) {
            return Err(DbError::Constraint(format!(
                "category {} does not exist",
                new.category
            )));
        }

        let question = Question {
            id: tables.next_question_id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.next_question_id += 1;
        tables.questions.push(question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        let position = tables
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;
        tables.questions.remove(position);
        Ok(())
    }

    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect())
    }
}
