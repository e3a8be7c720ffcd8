//! Custom Axum extractors
//!
//! All three wrappers collapse their inner rejection into an `ApiError`
//! so malformed input gets the same `{"error": ...}` body as every
//! other failure. The underlying rejection is logged at debug level.

use axum::extract::{Form, FromRequest, FromRequestParts, Query, Request};
use axum::http::header;
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::{ApiError, MSG_CONSULTA_NO_VALIDA, MSG_CUERPO_NO_VALIDO};

/// Strict JSON body. Unknown fields, mistyped fields, and non-JSON
/// payloads all reject with 400.
pub struct BodyJson<T>(pub T);

impl<S, T> FromRequest<S> for BodyJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection);
            ApiError::Validation(MSG_CUERPO_NO_VALIDO)
        })?;

        Ok(Self(value))
    }
}

/// Body that may arrive as JSON or as an urlencoded form, chosen by the
/// Content-Type header. The registration and quote routes accept both
/// because the form clients submit either.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
                tracing::debug!("Rejected JSON body: {}", rejection);
                ApiError::Validation(MSG_CUERPO_NO_VALIDO)
            })?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|rejection| {
                tracing::debug!("Rejected form body: {}", rejection);
                ApiError::Validation(MSG_CUERPO_NO_VALIDO)
            })?;
            return Ok(Self(value));
        }

        tracing::debug!("Unsupported content type: {:?}", content_type);
        Err(ApiError::Validation(MSG_CUERPO_NO_VALIDO))
    }
}

/// Strict query string. Missing or mistyped parameters reject with 400.
pub struct Params<T>(pub T);

impl<S, T> FromRequestParts<S> for Params<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected query string: {}", rejection);
                ApiError::Validation(MSG_CONSULTA_NO_VALIDA)
            })?;

        Ok(Self(value))
    }
}
