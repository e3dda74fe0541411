//! Category endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{Page, PathId};
use crate::models::{Category, Question};
use crate::state::AppState;

/// Category names, ordered by id
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

/// One page of a category's questions
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<Category>,
}

/// GET /categories - list category names
async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store().list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories.into_iter().map(|c| c.kind).collect(),
    }))
}

/// GET /categories/{category_id}/questions - questions filed under one category
///
/// An empty page is not an error here. `current_category` is null when no
/// category row has this id.
async fn category_questions(
    State(state): State<AppState>,
    PathId(category_id): PathId,
    Page(page): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let store = state.store();
    let questions = store.questions_in_category(category_id).await?;
    let current_category = store.get_category(category_id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.slice(&questions).to_vec(),
        total_questions: questions.len(),
        current_category,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(category_questions))
}
