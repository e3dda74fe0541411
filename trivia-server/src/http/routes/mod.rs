//! Route handlers organized by resource

pub mod health;
pub mod categories;
pub mod questions;
pub mod quizzes;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::db::{DbError, MemoryStore, TriviaStore};
    use crate::http::server::build_router;
    use crate::models::{Category, NewQuestion, Question};
    use crate::state::AppState;

    /// Store whose every call fails as if the pool were exhausted
    pub struct FailingStore;

    fn pool_timeout<T>() -> Result<T, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    #[async_trait]
    impl TriviaStore for FailingStore {
        async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
            pool_timeout()
        }

        async fn get_category(&self, _id: i32) -> Result<Option<Category>, DbError> {
            pool_timeout()
        }

        async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
            pool_timeout()
        }

        async fn questions_in_category(&self, _category_id: i32) -> Result<Vec<Question>, DbError> {
            pool_timeout()
        }

        async fn search_questions(&self, _term: &str) -> Result<Vec<Question>, DbError> {
            pool_timeout()
        }

        async fn get_question(&self, _id: i32) -> Result<Option<Question>, DbError> {
            pool_timeout()
        }

        async fn insert_question(&self, _new: NewQuestion) -> Result<Question, DbError> {
            pool_timeout()
        }

        async fn delete_question(&self, _id: i32) -> Result<(), DbError> {
            pool_timeout()
        }

        async fn quiz_candidates(
            &self,
            _category: Option<i32>,
            _exclude: &[i32],
        ) -> Result<Vec<Question>, DbError> {
            pool_timeout()
        }
    }

    /// Router whose store is unreachable
    pub fn failing_app() -> Router {
        app_with(FailingStore)
    }

    /// Router over the sample data set
    pub fn app() -> Router {
        app_with(MemoryStore::sample())
    }

    pub fn app_with(store: impl TriviaStore + 'static) -> Router {
        build_router(AppState::new(store))
    }

    pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}
