//! Client profile endpoints
//!
//! Reads and partial updates for registered clients, always keyed by
//! email. The stored record carries the password hash; everything
//! served from here goes through `ClienteResponse`, which does not.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Cliente, ClienteRepo, Sueldo};
use crate::http::error::ApiError;
use crate::http::extractors::{BodyJson, Params};
use crate::http::server::AppState;
use crate::models::PerfilCambios;

/// Client as served: the stored record minus the password hash.
#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub id_cliente: i32,
    pub nombre_completo: String,
    pub rfc: String,
    pub edad: i32,
    pub telefono: String,
    pub correo: String,
    pub sueldo: Option<f64>,
    pub id_estado_civil: i32,
    pub fecha_registro: String,
}

impl From<Cliente> for ClienteResponse {
    fn from(c: Cliente) -> Self {
        Self {
            id_cliente: c.id_cliente,
            nombre_completo: c.nombre_completo,
            rfc: c.rfc,
            edad: c.edad,
            telefono: c.telefono,
            correo: c.correo,
            sueldo: c.sueldo,
            id_estado_civil: c.id_estado_civil,
            fecha_registro: c.fecha_registro.to_rfc3339(),
        }
    }
}

/// Profile update response
#[derive(Serialize)]
pub struct PerfilActualizado {
    pub message: &'static str,
    pub user: ClienteResponse,
}

/// Email lookup query, shared with the quote listing route.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailParams {
    pub email: String,
}

/// PUT /edit-profile - partial update keyed by email
async fn edit_profile(
    State(state): State<Arc<AppState>>,
    BodyJson(cambios): BodyJson<PerfilCambios>,
) -> Result<Json<PerfilActualizado>, ApiError> {
    let cliente = ClienteRepo::new(&state.pool)
        .update_perfil(&cambios)
        .await
        .map_err(ApiError::db("Error updating the user"))?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(PerfilActualizado {
        message: "User updated successfully",
        user: cliente.into(),
    }))
}

/// GET /get-user - full profile by email
async fn get_user(
    State(state): State<Arc<AppState>>,
    Params(params): Params<EmailParams>,
) -> Result<Json<ClienteResponse>, ApiError> {
    let cliente = ClienteRepo::new(&state.pool)
        .find_by_correo(&params.email)
        .await
        .map_err(ApiError::db("Error al obtener los datos del usuario"))?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(cliente.into()))
}

/// GET /get-user-sueldo - salary only, by email
async fn get_user_sueldo(
    State(state): State<Arc<AppState>>,
    Params(params): Params<EmailParams>,
) -> Result<Json<Sueldo>, ApiError> {
    let sueldo = ClienteRepo::new(&state.pool)
        .fetch_sueldo(&params.email)
        .await
        .map_err(ApiError::db("Error al obtener el sueldo del usuario"))?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(sueldo))
}

/// Client profile routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/edit-profile", put(edit_profile))
        .route("/get-user", get(get_user))
        .route("/get-user-sueldo", get(get_user_sueldo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn response_omits_password_hash() {
        let cliente = Cliente {
            id_cliente: 7,
            nombre_completo: "Ana Torres".into(),
            rfc: "TOAA900101QX1".into(),
            edad: 34,
            telefono: "5512345678".into(),
            correo: "ana@example.test".into(),
            contrasena: "$2b$12$secreto".into(),
            sueldo: Some(28500.0),
            id_estado_civil: 1,
            fecha_registro: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };

        let body = serde_json::to_value(ClienteResponse::from(cliente)).unwrap();
        assert_eq!(body["correo"], "ana@example.test");
        assert!(body.get("contrasena").is_none());
        assert!(body["fecha_registro"].as_str().unwrap().starts_with("2024-03-01T12:00:00"));
    }
}
