//! Schema migrations for the quote application tables
//!
//! All statements are idempotent (`CREATE TABLE IF NOT EXISTS`) so the
//! server can run them unconditionally at startup. Referential integrity
//! lives entirely in these constraints; handlers never pre-check references.

use sqlx::PgPool;

/// Create all tables, in FK dependency order.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    // Marital status lookup
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tc_estado_civil (
            id_estado_civil SERIAL PRIMARY KEY,
            estado_civil TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Loan type lookup
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tc_tipo_prestamo (
            id_tipo_prestamo SERIAL PRIMARY KEY,
            tipo_prestamo TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Amortization plan lookup (one lender per plan)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tc_amortizacion (
            id_amortizacion SERIAL PRIMARY KEY,
            prestamista TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Term lookup, filterable by amortization plan
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tc_plazo (
            id_plazo SERIAL PRIMARY KEY,
            plazo INT NOT NULL,
            id_amortizacion INT NOT NULL REFERENCES tc_amortizacion(id_amortizacion),
            UNIQUE (plazo, id_amortizacion)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // House listings
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tr_casa (
            id_casa SERIAL PRIMARY KEY,
            direccion TEXT NOT NULL UNIQUE,
            descripcion TEXT,
            precio DOUBLE PRECISION NOT NULL,
            imagen TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Client registry; correo is the login identity
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tr_cliente (
            id_cliente SERIAL PRIMARY KEY,
            nombre_completo TEXT NOT NULL,
            rfc TEXT NOT NULL,
            edad INT NOT NULL,
            telefono TEXT NOT NULL,
            correo TEXT NOT NULL UNIQUE,
            contrasena TEXT NOT NULL,
            sueldo DOUBLE PRECISION,
            id_estado_civil INT NOT NULL REFERENCES tc_estado_civil(id_estado_civil),
            fecha_registro TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Quote requests; every column but the PK references another table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tr_cotizacion (
            id_cotizacion SERIAL PRIMARY KEY,
            id_casa INT NOT NULL REFERENCES tr_casa(id_casa),
            id_tipo_prestamo INT NOT NULL REFERENCES tc_tipo_prestamo(id_tipo_prestamo),
            id_amortizacion INT NOT NULL REFERENCES tc_amortizacion(id_amortizacion),
            id_plazo INT NOT NULL REFERENCES tc_plazo(id_plazo),
            correo_cliente TEXT NOT NULL REFERENCES tr_cliente(correo),
            fecha_creacion TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}
