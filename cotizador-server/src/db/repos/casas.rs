//! House listing repository

use sqlx::{FromRow, PgPool};

/// House listing as stored and as served.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Casa {
    pub id_casa: i32,
    pub direccion: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub imagen: Option<String>,
}

/// House repository
pub struct CasaRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CasaRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Casa>, sqlx::Error> {
        let casas: Vec<Casa> = sqlx::query_as(
            r#"
            SELECT id_casa, direccion, descripcion, precio, imagen
            FROM tr_casa
            ORDER BY id_casa
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(casas)
    }

    /// Lookup by id. Returns a one-or-zero element `Vec`; the detail
    /// endpoint serves an array and treats an unknown id as empty.
    pub async fn find_by_id(&self, id_casa: i32) -> Result<Vec<Casa>, sqlx::Error> {
        let casas: Vec<Casa> = sqlx::query_as(
            r#"
            SELECT id_casa, direccion, descripcion, precio, imagen
            FROM tr_casa
            WHERE id_casa = $1
            "#,
        )
        .bind(id_casa)
        .fetch_all(self.pool)
        .await?;

        Ok(casas)
    }
}
