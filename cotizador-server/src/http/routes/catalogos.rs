//! Catalog endpoints
//!
//! Lookup data for the quote form: marital statuses, loan types,
//! lenders (amortization plans), and terms. Every response is an array
//! of rows, including the by-id lookups, which serve a one-element
//! array for a hit and an empty one for a miss.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{
    Amortizacion, CatalogoRepo, EstadoCivil, Plazo, PlazoAnios, Prestamista, TipoPrestamo,
};
use crate::http::error::ApiError;
use crate::http::extractors::Params;
use crate::http::server::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmortizacionParams {
    pub id_amortizacion: i32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrestamoParams {
    pub id_tipo_prestamo: i32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlazoParams {
    pub id_plazo: i32,
}

/// GET /estado-civil
async fn estados_civiles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EstadoCivil>>, ApiError> {
    let filas = CatalogoRepo::new(&state.pool)
        .estados_civiles()
        .await
        .map_err(ApiError::db("Error al obtener los estados civiles"))?;

    Ok(Json(filas))
}

/// GET /cat-tipos-prest
async fn tipos_prestamo(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TipoPrestamo>>, ApiError> {
    let filas = CatalogoRepo::new(&state.pool)
        .tipos_prestamo()
        .await
        .map_err(ApiError::db("Error al obtener los tipos de préstamos"))?;

    Ok(Json(filas))
}

/// GET /cat-prestamistas - the amortization table, one lender per plan
async fn prestamistas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Amortizacion>>, ApiError> {
    let filas = CatalogoRepo::new(&state.pool)
        .amortizaciones()
        .await
        .map_err(ApiError::db("Error al obtener los prestamistas"))?;

    Ok(Json(filas))
}

/// GET /cat-plazos - terms under one amortization plan
async fn plazos(
    State(state): State<Arc<AppState>>,
    Params(params): Params<AmortizacionParams>,
) -> Result<Json<Vec<Plazo>>, ApiError> {
    let filas = CatalogoRepo::new(&state.pool)
        .plazos_por_amortizacion(params.id_amortizacion)
        .await
        .map_err(ApiError::db("Error al obtener los plazos del banco"))?;

    Ok(Json(filas))
}

/// GET /get-prestamo-byid
async fn prestamo_por_id(
    State(state): State<Arc<AppState>>,
    Params(params): Params<PrestamoParams>,
) -> Result<Json<Vec<TipoPrestamo>>, ApiError> {
    let filas = CatalogoRepo::new(&state.pool)
        .tipo_prestamo_por_id(params.id_tipo_prestamo)
        .await
        .map_err(ApiError::db("Error al obtener los datos del prestamo"))?;

    Ok(Json(filas))
}

/// GET /get-amortizacion-byid - lender name only
async fn amortizacion_por_id(
    State(state): State<Arc<AppState>>,
    Params(params): Params<AmortizacionParams>,
) -> Result<Json<Vec<Prestamista>>, ApiError> {
    let filas = CatalogoRepo::new(&state.pool)
        .prestamista_por_id(params.id_amortizacion)
        .await
        .map_err(ApiError::db("Error al obtener los datos de la amortizacion"))?;

    Ok(Json(filas))
}

/// GET /get-plazo-byid - term years only
async fn plazo_por_id(
    State(state): State<Arc<AppState>>,
    Params(params): Params<PlazoParams>,
) -> Result<Json<Vec<PlazoAnios>>, ApiError> {
    let filas = CatalogoRepo::new(&state.pool)
        .plazo_por_id(params.id_plazo)
        .await
        .map_err(ApiError::db("Error al obtener los datos del plazo"))?;

    Ok(Json(filas))
}

/// Catalog routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/estado-civil", get(estados_civiles))
        .route("/cat-tipos-prest", get(tipos_prestamo))
        .route("/cat-prestamistas", get(prestamistas))
        .route("/cat-plazos", get(plazos))
        .route("/get-prestamo-byid", get(prestamo_por_id))
        .route("/get-amortizacion-byid", get(amortizacion_por_id))
        .route("/get-plazo-byid", get(plazo_por_id))
}
