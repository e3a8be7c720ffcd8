//! Registration and login endpoints
//!
//! Both accept JSON or urlencoded form bodies. Passwords are hashed
//! before they reach the repository and compared only through bcrypt;
//! the login flow deliberately distinguishes unknown email (404) from
//! wrong password (401), matching what the frontend displays.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::ClienteRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonOrForm;
use crate::http::server::AppState;
use crate::models::{LoginRequest, RegistroRequest};
use crate::password::{hash_password, verify_password};

use super::clientes::ClienteResponse;

/// Response for both register and login: the client, wrapped.
#[derive(Serialize)]
pub struct AuthResponse {
    pub user: ClienteResponse,
}

/// POST /register - create a client account
async fn register(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<RegistroRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let registro = req.validate()?;

    let contrasena_hash =
        hash_password(&registro.contrasena).map_err(ApiError::hash("Error al registrar el usuario"))?;

    let cliente = ClienteRepo::new(&state.pool)
        .insert(&registro, &contrasena_hash)
        .await
        .map_err(ApiError::db("Error al registrar el usuario"))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse { user: cliente.into() }),
    ))
}

/// POST /login - verify credentials
async fn login(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let credenciales = req.validate()?;

    let cliente = ClienteRepo::new(&state.pool)
        .find_by_correo(&credenciales.correo)
        .await
        .map_err(ApiError::db("Error al iniciar sesión"))?
        .ok_or(ApiError::NotFound("Usuario no encontrado"))?;

    let coincide = verify_password(&credenciales.contrasena, &cliente.contrasena)
        .map_err(ApiError::hash("Error al iniciar sesión"))?;
    if !coincide {
        return Err(ApiError::Unauthorized("Contraseña incorrecta"));
    }

    Ok(Json(AuthResponse { user: cliente.into() }))
}

/// Auth routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
