//! API error types with IntoResponse
//!
//! Every error renders as `{"error": <message>}` with the status the
//! route contract names. Messages are the client-facing Spanish (or,
//! for the profile routes, English) strings; the underlying cause is
//! logged server-side and never serialized.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;

/// Presence-check failure message shared by every write route.
pub const MSG_CAMPOS_OBLIGATORIOS: &str = "Todos los campos son obligatorios";

/// Message for bodies that fail strict deserialization.
pub const MSG_CUERPO_NO_VALIDO: &str = "Cuerpo de la petición no válido";

/// Message for query strings that fail deserialization.
pub const MSG_CONSULTA_NO_VALIDA: &str = "Parámetros de consulta no válidos";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request failed validation (400)
    Validation(&'static str),

    /// Resource not found (404)
    NotFound(&'static str),

    /// Wrong credentials (401)
    Unauthorized(&'static str),

    /// Database failure (500, logged)
    Database {
        message: &'static str,
        source: sqlx::Error,
    },

    /// Password hashing failure (500, logged)
    Hash {
        message: &'static str,
        source: bcrypt::BcryptError,
    },
}

impl ApiError {
    /// Curried constructor for `map_err`: each route names its own
    /// database failure message.
    pub fn db(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Database { message, source }
    }

    /// Curried constructor for `map_err` on bcrypt failures.
    pub fn hash(message: &'static str) -> impl FnOnce(bcrypt::BcryptError) -> Self {
        move |source| Self::Hash { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, *message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, *message),
            Self::Unauthorized(message) => (StatusCode::UNAUTHORIZED, *message),
            Self::Database { message, source } => {
                // Log the actual error, return the route's message
                tracing::error!("Database error: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
            Self::Hash { message, source } => {
                tracing::error!("Password hashing error: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        tracing::debug!("Validation failed: {}", e);
        Self::Validation(MSG_CAMPOS_OBLIGATORIOS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_message_body() {
        let err: ApiError = ValidationError::Missing { field: "correo" }.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": MSG_CAMPOS_OBLIGATORIOS })
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound("Usuario no encontrado").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Usuario no encontrado" })
        );
    }

    #[tokio::test]
    async fn unauthorized_is_401() {
        let response = ApiError::Unauthorized("Contraseña incorrecta").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn database_error_hides_cause() {
        let err = ApiError::db("Error al obtener las casas")(sqlx::Error::PoolClosed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Error al obtener las casas" }));
    }
}
