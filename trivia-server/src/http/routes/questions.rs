//! Question endpoints - listing, search, create and delete

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, Page, PathId};
use crate::models::{CreateQuestionRequest, NewQuestion, Pagination, Question};
use crate::state::AppState;

/// GET /questions response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub current_category: String,
}

/// POST /questions body: a search when `searchTerm` is present, otherwise a new question
#[derive(Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub create: CreateQuestionRequest,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Search {
        success: bool,
        questions: Vec<Question>,
        total_questions: usize,
    },
    Created {
        success: bool,
        created: i32,
        questions: Vec<Question>,
        total_questions: usize,
    },
}

/// DELETE /questions/{question_id} response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// GET /questions - one page of the first category's questions
///
/// Only the lowest-id category is listed; `categories` carries every name so
/// the client can switch to `/categories/{id}/questions`.
async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let store = state.store();
    let categories = store.list_categories().await?;
    let first = categories
        .first()
        .ok_or_else(|| ApiError::not_found("category", "first"))?;

    let questions = store.questions_in_category(first.id).await?;
    let current = page.slice(&questions);
    if current.is_empty() {
        return Err(ApiError::not_found("questions page", page.page));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        current_category: first.kind.clone(),
        categories: categories.into_iter().map(|c| c.kind).collect(),
    }))
}

/// POST /questions - search or create
async fn post_questions(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(body): JsonBody<QuestionsPostBody>,
) -> Result<Json<QuestionsPostResponse>, ApiError> {
    let response = match body.search_term {
        Some(term) => search_questions(&state, page, &term).await?,
        None => create_question(&state, page, body.create).await?,
    };
    Ok(Json(response))
}

async fn search_questions(
    state: &AppState,
    page: Pagination,
    term: &str,
) -> Result<QuestionsPostResponse, ApiError> {
    let matches = state.store().search_questions(term).await?;
    tracing::debug!(term, hits = matches.len(), "question search");

    let current = page.slice(&matches);
    if current.is_empty() {
        return Err(ApiError::not_found("search results", term));
    }

    Ok(QuestionsPostResponse::Search {
        success: true,
        questions: current.to_vec(),
        total_questions: matches.len(),
    })
}

/// Every failure on the create path is a 422.
async fn create_question(
    state: &AppState,
    page: Pagination,
    req: CreateQuestionRequest,
) -> Result<QuestionsPostResponse, ApiError> {
    let new = NewQuestion::try_from(req)?;
    let store = state.store();

    let created = store
        .insert_question(new)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::info!(question_id = created.id, category = created.category, "question created");

    let questions = store
        .list_questions()
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(QuestionsPostResponse::Created {
        success: true,
        created: created.id,
        questions: page.slice(&questions).to_vec(),
        total_questions: questions.len(),
    })
}

/// DELETE /questions/{question_id}
///
/// A missing question is a 404; any other store failure is a 422.
async fn delete_question(
    State(state): State<AppState>,
    PathId(question_id): PathId,
    Page(page): Page,
) -> Result<Json<DeletedResponse>, ApiError> {
    let store = state.store();
    let not_found_or_unprocessable = |e: DbError| match e {
        DbError::NotFound { .. } => ApiError::from(e),
        other => ApiError::unprocessable(other),
    };

    store
        .get_question(question_id)
        .await
        .map_err(not_found_or_unprocessable)?
        .ok_or_else(|| ApiError::not_found("question", question_id))?;

    store
        .delete_question(question_id)
        .await
        .map_err(not_found_or_unprocessable)?;
    tracing::info!(question_id, "question deleted");

    let remaining = store
        .list_questions()
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
        questions: page.slice(&remaining).to_vec(),
        total_questions: remaining.len(),
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/{question_id}", delete(delete_question))
}
