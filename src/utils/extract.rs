//! Request extractors that reject with `AppError` instead of axum's defaults.

use crate::error::{AppError, AppResult};
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// JSON body whose rejections become `AppError::BadRequest`.
///
/// Payload validation is left to the service layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest {
                message: rejection.body_text(),
            })?;
        Ok(JsonBody(value))
    }
}

/// Integer `{id}` path segment.
///
/// A segment that is not an `i32` means no route matched, so it
/// rejects with `NotFound` rather than a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(PathId(id)),
            Err(PathRejection::FailedToDeserializePathParams(_)) => Err(AppError::NotFound {
                entity: "route".to_string(),
                field: "path".to_string(),
                value: parts.uri.path().to_string(),
            }),
            Err(rejection) => Err(AppError::Internal {
                source: anyhow::anyhow!(rejection.body_text()),
            }),
        }
    }
}
