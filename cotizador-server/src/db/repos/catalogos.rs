//! Catalog repository
//!
//! Read-only access to the four lookup tables: marital statuses, loan
//! types, amortization plans (lenders), and terms. Rows serialize with
//! their column names, so handlers can return them as-is.
//!
//! The by-id lookups return a `Vec` on purpose: clients of this API
//! treat every catalog response as an array, and an unknown id is an
//! empty array rather than a 404.

use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct EstadoCivil {
    pub id_estado_civil: i32,
    pub estado_civil: String,
}

#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct TipoPrestamo {
    pub id_tipo_prestamo: i32,
    pub tipo_prestamo: String,
}

#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Amortizacion {
    pub id_amortizacion: i32,
    pub prestamista: String,
}

#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Plazo {
    pub id_plazo: i32,
    pub plazo: i32,
    pub id_amortizacion: i32,
}

/// Lender-name projection for `GET /get-amortizacion-byid`.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Prestamista {
    pub prestamista: String,
}

/// Term-years projection for `GET /get-plazo-byid`.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct PlazoAnios {
    pub plazo: i32,
}

/// Catalog repository
pub struct CatalogoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn estados_civiles(&self) -> Result<Vec<EstadoCivil>, sqlx::Error> {
        let filas: Vec<EstadoCivil> = sqlx::query_as(
            r#"
            SELECT id_estado_civil, estado_civil
            FROM tc_estado_civil
            ORDER BY id_estado_civil
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }

    pub async fn tipos_prestamo(&self) -> Result<Vec<TipoPrestamo>, sqlx::Error> {
        let filas: Vec<TipoPrestamo> = sqlx::query_as(
            r#"
            SELECT id_tipo_prestamo, tipo_prestamo
            FROM tc_tipo_prestamo
            ORDER BY id_tipo_prestamo
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }

    pub async fn amortizaciones(&self) -> Result<Vec<Amortizacion>, sqlx::Error> {
        let filas: Vec<Amortizacion> = sqlx::query_as(
            r#"
            SELECT id_amortizacion, prestamista
            FROM tc_amortizacion
            ORDER BY id_amortizacion
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }

    /// Terms offered under one amortization plan.
    pub async fn plazos_por_amortizacion(
        &self,
        id_amortizacion: i32,
    ) -> Result<Vec<Plazo>, sqlx::Error> {
        let filas: Vec<Plazo> = sqlx::query_as(
            r#"
            SELECT id_plazo, plazo, id_amortizacion
            FROM tc_plazo
            WHERE id_amortizacion = $1
            ORDER BY plazo
            "#,
        )
        .bind(id_amortizacion)
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }

    pub async fn tipo_prestamo_por_id(
        &self,
        id_tipo_prestamo: i32,
    ) -> Result<Vec<TipoPrestamo>, sqlx::Error> {
        let filas: Vec<TipoPrestamo> = sqlx::query_as(
            r#"
            SELECT id_tipo_prestamo, tipo_prestamo
            FROM tc_tipo_prestamo
            WHERE id_tipo_prestamo = $1
            "#,
        )
        .bind(id_tipo_prestamo)
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }

    pub async fn prestamista_por_id(
        &self,
        id_amortizacion: i32,
    ) -> Result<Vec<Prestamista>, sqlx::Error> {
        let filas: Vec<Prestamista> = sqlx::query_as(
            r#"
            SELECT prestamista
            FROM tc_amortizacion
            WHERE id_amortizacion = $1
            "#,
        )
        .bind(id_amortizacion)
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }

    pub async fn plazo_por_id(&self, id_plazo: i32) -> Result<Vec<PlazoAnios>, sqlx::Error> {
        let filas: Vec<PlazoAnios> = sqlx::query_as(
            r#"
            SELECT plazo
            FROM tc_plazo
            WHERE id_plazo = $1
            "#,
        )
        .bind(id_plazo)
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seeded_catalogs_are_listed() {
        let pool = testing::pool().await;
        let repo = CatalogoRepo::new(&pool);

        let estados = repo.estados_civiles().await.unwrap();
        assert!(estados.iter().any(|e| e.estado_civil == "Soltero(a)"));

        let tipos = repo.tipos_prestamo().await.unwrap();
        assert!(!tipos.is_empty());

        let planes = repo.amortizaciones().await.unwrap();
        assert!(!planes.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn plazos_filtered_by_amortizacion() {
        let pool = testing::pool().await;
        let repo = CatalogoRepo::new(&pool);

        let planes = repo.amortizaciones().await.unwrap();
        let id = planes[0].id_amortizacion;

        let plazos = repo.plazos_por_amortizacion(id).await.unwrap();
        assert!(!plazos.is_empty());
        assert!(plazos.iter().all(|p| p.id_amortizacion == id));

        // Unknown plan id: empty, not an error
        assert!(repo.plazos_por_amortizacion(999_999).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn by_id_lookups_project_named_columns() {
        let pool = testing::pool().await;
        let repo = CatalogoRepo::new(&pool);

        let planes = repo.amortizaciones().await.unwrap();
        let plan = &planes[0];

        let prestamistas = repo.prestamista_por_id(plan.id_amortizacion).await.unwrap();
        assert_eq!(prestamistas.len(), 1);
        assert_eq!(prestamistas[0].prestamista, plan.prestamista);

        let plazos = repo.plazos_por_amortizacion(plan.id_amortizacion).await.unwrap();
        let anios = repo.plazo_por_id(plazos[0].id_plazo).await.unwrap();
        assert_eq!(anios.len(), 1);
        assert_eq!(anios[0].plazo, plazos[0].plazo);
    }
}
