//! Quote endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::db::repos::{Cotizacion, CotizacionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonOrForm, Params};
use crate::http::server::AppState;
use crate::models::CotizacionRequest;

use super::clientes::EmailParams;

/// Creation response
#[derive(Serialize)]
pub struct CotizacionCreada {
    pub message: &'static str,
    pub cotizacion: Cotizacion,
}

/// POST /add-cotizacion - request a quote for a house
async fn add_cotizacion(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<CotizacionRequest>,
) -> Result<(StatusCode, Json<CotizacionCreada>), ApiError> {
    let nueva = req.validate()?;

    let cotizacion = CotizacionRepo::new(&state.pool)
        .insert(&nueva)
        .await
        .map_err(ApiError::db("Error al añadir la cotización"))?;

    Ok((
        StatusCode::CREATED,
        Json(CotizacionCreada {
            message: "Cotización añadida exitosamente",
            cotizacion,
        }),
    ))
}

/// GET /get-coti-usr - all quotes requested by one client
async fn get_coti_usr(
    State(state): State<Arc<AppState>>,
    Params(params): Params<EmailParams>,
) -> Result<Json<Vec<Cotizacion>>, ApiError> {
    let cotizaciones = CotizacionRepo::new(&state.pool)
        .list_por_cliente(&params.email)
        .await
        .map_err(ApiError::db("Error al obtener las cotizaciones del usuario"))?;

    Ok(Json(cotizaciones))
}

/// Quote routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add-cotizacion", post(add_cotizacion))
        .route("/get-coti-usr", get(get_coti_usr))
}
