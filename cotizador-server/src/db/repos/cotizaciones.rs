//! Quote repository
//!
//! Quotes reference the four catalogs plus the client's email. Inserts
//! lean on the FK constraints: a dangling reference comes back as a
//! database error instead of a pre-flight existence check.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::NuevaCotizacion;

/// Quote record as stored and as served.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Cotizacion {
    pub id_cotizacion: i32,
    pub id_casa: i32,
    pub id_tipo_prestamo: i32,
    pub id_amortizacion: i32,
    pub id_plazo: i32,
    pub correo_cliente: String,
    pub fecha_creacion: DateTime<Utc>,
}

/// Quote repository
pub struct CotizacionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CotizacionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, nueva: &NuevaCotizacion) -> Result<Cotizacion, sqlx::Error> {
        let cotizacion: Cotizacion = sqlx::query_as(
            r#"
            INSERT INTO tr_cotizacion
                (id_casa, id_tipo_prestamo, id_amortizacion, id_plazo, correo_cliente)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_cotizacion, id_casa, id_tipo_prestamo, id_amortizacion,
                      id_plazo, correo_cliente, fecha_creacion
            "#,
        )
        .bind(nueva.id_casa)
        .bind(nueva.id_tipo_prestamo)
        .bind(nueva.id_amortizacion)
        .bind(nueva.id_plazo)
        .bind(&nueva.correo_cliente)
        .fetch_one(self.pool)
        .await?;

        Ok(cotizacion)
    }

    /// All quotes requested by one client, oldest first.
    pub async fn list_por_cliente(&self, correo: &str) -> Result<Vec<Cotizacion>, sqlx::Error> {
        let cotizaciones: Vec<Cotizacion> = sqlx::query_as(
            r#"
            SELECT id_cotizacion, id_casa, id_tipo_prestamo, id_amortizacion,
                   id_plazo, correo_cliente, fecha_creacion
            FROM tr_cotizacion
            WHERE correo_cliente = $1
            ORDER BY fecha_creacion
            "#,
        )
        .bind(correo)
        .fetch_all(self.pool)
        .await?;

        Ok(cotizaciones)
    }
}
