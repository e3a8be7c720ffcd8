//! Client repository
//!
//! Backs registration, login, profile reads, and partial profile updates
//! against `tr_cliente`. The email column is UNIQUE and doubles as the
//! lookup key everywhere; duplicate registrations surface as a constraint
//! violation rather than a pre-check.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{PerfilCambios, Registro};

/// Full client record as stored.
///
/// Deliberately not `Serialize`: `contrasena` holds the bcrypt hash and
/// must never reach a response body. Handlers convert to a response type
/// that omits it.
#[derive(Debug, Clone, FromRow)]
pub struct Cliente {
    pub id_cliente: i32,
    pub nombre_completo: String,
    pub rfc: String,
    pub edad: i32,
    pub telefono: String,
    pub correo: String,
    pub contrasena: String,
    pub sueldo: Option<f64>,
    pub id_estado_civil: i32,
    pub fecha_registro: DateTime<Utc>,
}

/// Salary projection for `GET /get-user-sueldo`.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Sueldo {
    pub sueldo: Option<f64>,
}

/// Client repository
pub struct ClienteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ClienteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new client. `contrasena_hash` is the already-hashed password;
    /// hashing stays out of the database layer.
    pub async fn insert(
        &self,
        datos: &Registro,
        contrasena_hash: &str,
    ) -> Result<Cliente, sqlx::Error> {
        let cliente: Cliente = sqlx::query_as(
            r#"
            INSERT INTO tr_cliente
                (nombre_completo, rfc, edad, telefono, correo, contrasena, sueldo, id_estado_civil)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id_cliente, nombre_completo, rfc, edad, telefono, correo,
                      contrasena, sueldo, id_estado_civil, fecha_registro
            "#,
        )
        .bind(&datos.nombre_completo)
        .bind(&datos.rfc)
        .bind(datos.edad)
        .bind(&datos.telefono)
        .bind(&datos.correo)
        .bind(contrasena_hash)
        .bind(datos.sueldo)
        .bind(datos.id_estado_civil)
        .fetch_one(self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn find_by_correo(&self, correo: &str) -> Result<Option<Cliente>, sqlx::Error> {
        let cliente: Option<Cliente> = sqlx::query_as(
            r#"
            SELECT id_cliente, nombre_completo, rfc, edad, telefono, correo,
                   contrasena, sueldo, id_estado_civil, fecha_registro
            FROM tr_cliente
            WHERE correo = $1
            "#,
        )
        .bind(correo)
        .fetch_optional(self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn fetch_sueldo(&self, correo: &str) -> Result<Option<Sueldo>, sqlx::Error> {
        let sueldo: Option<Sueldo> = sqlx::query_as(
            r#"
            SELECT sueldo FROM tr_cliente WHERE correo = $1
            "#,
        )
        .bind(correo)
        .fetch_optional(self.pool)
        .await?;

        Ok(sueldo)
    }

    /// Partial update keyed by email. `None` fields keep their stored value
    /// via COALESCE; the whole statement is a single round trip.
    ///
    /// Returns `None` when no client has that email.
    pub async fn update_perfil(
        &self,
        cambios: &PerfilCambios,
    ) -> Result<Option<Cliente>, sqlx::Error> {
        let cliente: Option<Cliente> = sqlx::query_as(
            r#"
            UPDATE tr_cliente
            SET
                nombre_completo = COALESCE($1, nombre_completo),
                rfc = COALESCE($2, rfc),
                edad = COALESCE($3, edad),
                telefono = COALESCE($4, telefono),
                sueldo = COALESCE($5, sueldo),
                id_estado_civil = COALESCE($6, id_estado_civil)
            WHERE correo = $7
            RETURNING id_cliente, nombre_completo, rfc, edad, telefono, correo,
                      contrasena, sueldo, id_estado_civil, fecha_registro
            "#,
        )
        .bind(&cambios.nombre_completo)
        .bind(&cambios.rfc)
        .bind(cambios.edad)
        .bind(&cambios.telefono)
        .bind(cambios.sueldo)
        .bind(cambios.id_estado_civil)
        .bind(&cambios.correo)
        .fetch_optional(self.pool)
        .await?;

        Ok(cliente)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p cotizador-server -- --ignored

    fn registro(correo: &str) -> Registro {
        Registro {
            nombre_completo: "Ana Torres".into(),
            rfc: "TOAA900101QX1".into(),
            edad: 34,
            telefono: "5512345678".into(),
            correo: correo.into(),
            contrasena: "secreta123".into(),
            sueldo: Some(28500.0),
            id_estado_civil: 1,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_find_by_correo() {
        let pool = testing::pool().await;
        let repo = ClienteRepo::new(&pool);
        let correo = testing::unique_correo("insert");

        let inserted = repo.insert(&registro(&correo), "$2b$10$hash").await.unwrap();
        assert_eq!(inserted.correo, correo);
        assert_eq!(inserted.contrasena, "$2b$10$hash");

        let found = repo.find_by_correo(&correo).await.unwrap().unwrap();
        assert_eq!(found.id_cliente, inserted.id_cliente);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_correo_rejected_by_constraint() {
        let pool = testing::pool().await;
        let repo = ClienteRepo::new(&pool);
        let correo = testing::unique_correo("dup");

        repo.insert(&registro(&correo), "$2b$10$hash").await.unwrap();
        let err = repo.insert(&registro(&correo), "$2b$10$hash").await.unwrap_err();
        match err {
            sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
            other => panic!("expected unique violation, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_perfil_keeps_omitted_fields() {
        let pool = testing::pool().await;
        let repo = ClienteRepo::new(&pool);
        let correo = testing::unique_correo("update");

        let before = repo.insert(&registro(&correo), "$2b$10$hash").await.unwrap();

        let cambios = PerfilCambios {
            correo: correo.clone(),
            nombre_completo: None,
            rfc: None,
            edad: None,
            telefono: Some("5587654321".into()),
            sueldo: None,
            id_estado_civil: None,
        };
        let after = repo.update_perfil(&cambios).await.unwrap().unwrap();

        assert_eq!(after.telefono, "5587654321");
        assert_eq!(after.nombre_completo, before.nombre_completo);
        assert_eq!(after.sueldo, before.sueldo);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_perfil_unknown_correo_is_none() {
        let pool = testing::pool().await;
        let repo = ClienteRepo::new(&pool);

        let cambios = PerfilCambios {
            correo: testing::unique_correo("missing"),
            nombre_completo: Some("Nadie".into()),
            rfc: None,
            edad: None,
            telefono: None,
            sueldo: None,
            id_estado_civil: None,
        };
        assert!(repo.update_perfil(&cambios).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn fetch_sueldo_projects_single_column() {
        let pool = testing::pool().await;
        let repo = ClienteRepo::new(&pool);
        let correo = testing::unique_correo("sueldo");

        repo.insert(&registro(&correo), "$2b$10$hash").await.unwrap();
        let sueldo = repo.fetch_sueldo(&correo).await.unwrap().unwrap();
        assert_eq!(sueldo.sueldo, Some(28500.0));

        assert!(repo.fetch_sueldo("nadie@example.test").await.unwrap().is_none());
    }
}
