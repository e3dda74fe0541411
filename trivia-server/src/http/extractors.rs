//! Custom Axum extractors
//!
//! Rejections are routed through `ApiError` so clients always get the JSON
//! error shape instead of axum's plain-text defaults.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{PageParams, Pagination};

/// JSON body; any rejection (bad syntax, wrong shape, missing content type) is a 422.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::unprocessable(e.body_text()))?;
        Ok(Self(value))
    }
}

/// `?page=N` resolved to a `Pagination` of `QUESTIONS_PER_PAGE` items
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PageParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                reason: e.body_text(),
            })?;
        Ok(Self(Pagination::from(params)))
    }
}

/// Integer id from the single path segment.
///
/// A segment that is not an integer names no resource, so it is a 404.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                reason: e.body_text(),
            })?;

        raw.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ApiError::not_found("path id", &raw))
    }
}
