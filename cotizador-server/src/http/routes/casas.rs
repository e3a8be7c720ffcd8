//! House listing endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{Casa, CasaRepo};
use crate::http::error::ApiError;
use crate::http::extractors::Params;
use crate::http::server::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CasaParams {
    pub id_casa: i32,
}

/// GET /casas - every listing
async fn list_casas(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Casa>>, ApiError> {
    let casas = CasaRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::db("Error al obtener las casas"))?;

    Ok(Json(casas))
}

/// GET /get-house - one listing by id, served as a one-element array
async fn get_house(
    State(state): State<Arc<AppState>>,
    Params(params): Params<CasaParams>,
) -> Result<Json<Vec<Casa>>, ApiError> {
    let casas = CasaRepo::new(&state.pool)
        .find_by_id(params.id_casa)
        .await
        .map_err(ApiError::db("Error al obtener los datos de la casa"))?;

    Ok(Json(casas))
}

/// House routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/casas", get(list_casas))
        .route("/get-house", get(get_house))
}
