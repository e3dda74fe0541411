//! Quiz endpoint - one random unseen question per call

use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{int_value, Question};
use crate::state::AppState;

/// Category id the client sends for "all categories"
pub const ALL_CATEGORIES: i32 = 0;

#[derive(Deserialize)]
pub struct QuizCategory {
    pub id: Value,
}

#[derive(Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i32>>,
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

/// POST /quizzes - pick a question not yet asked
///
/// Category id 0 draws from every category. An exhausted pool is a 404.
async fn next_question(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category_id = req
        .quiz_category
        .as_ref()
        .and_then(|c| int_value(&c.id))
        .ok_or_else(|| ApiError::unprocessable("quiz_category.id must be an integer"))?;
    let category = (category_id != ALL_CATEGORIES).then_some(category_id);
    let previous = req.previous_questions.unwrap_or_default();

    let candidates = state.store().quiz_candidates(category, &previous).await?;
    tracing::debug!(
        category = category_id,
        asked = previous.len(),
        remaining = candidates.len(),
        "quiz draw"
    );

    let question = candidates
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| ApiError::not_found("quiz question", category_id))?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::http::routes::test_support::{app, send_json};

    #[tokio::test]
    async fn picks_from_requested_category() {
        let app = app();
        let candidates: HashSet<i64> = [1, 2, 3].into_iter().collect();

        for _ in 0..10 {
            let (status, body) = send_json(
                &app,
                Method::POST,
                "/quizzes",
                json!({ "quiz_category": { "id": 1 }, "previous_questions": [] }),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], true);
            assert_eq!(body["question"]["category"], 1);
            assert!(candidates.contains(&body["question"]["id"].as_i64().unwrap()));
        }
    }

    #[tokio::test]
    async fn skips_previous_questions() {
        let app = app();
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/quizzes",
            json!({ "quiz_category": { "id": "1" }, "previous_questions": [1, 2] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 3);
    }

    #[tokio::test]
    async fn exhausted_pool_is_404() {
        let app = app();
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/quizzes",
            json!({ "quiz_category": { "id": 1 }, "previous_questions": [1, 2, 3] }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn zero_means_all_categories() {
        let app = app();
        let seen: Vec<i64> = (1..=11).collect();
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/quizzes",
            json!({ "quiz_category": { "id": 0, "type": "click" }, "previous_questions": seen }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 12);
    }

    #[tokio::test]
    async fn missing_previous_questions_is_empty() {
        let app = app();
        let (status, body) =
            send_json(&app, Method::POST, "/quizzes", json!({ "quiz_category": { "id": 5 } })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["answer"], "Apollo 13");
    }

    #[tokio::test]
    async fn missing_category_is_422() {
        let app = app();
        let (status, _) =
            send_json(&app, Method::POST, "/quizzes", json!({ "previous_questions": [] })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
