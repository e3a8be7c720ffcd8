//! Demo data for local development
//!
//! Fills the lookup tables and adds a few house listings. Every insert
//! is `ON CONFLICT DO NOTHING`, so reseeding an existing database is a
//! no-op rather than an error.

use sqlx::PgPool;

pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Seeding catalog tables...");

    sqlx::query(
        r#"
        INSERT INTO tc_estado_civil (estado_civil)
        VALUES ('Soltero(a)'), ('Casado(a)'), ('Divorciado(a)'), ('Viudo(a)'), ('Unión libre')
        ON CONFLICT (estado_civil) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO tc_tipo_prestamo (tipo_prestamo)
        VALUES ('Tasa fija'), ('Tasa variable'), ('Cofinanciamiento')
        ON CONFLICT (tipo_prestamo) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO tc_amortizacion (prestamista)
        VALUES ('Banco Hipotecario Nacional'), ('Financiera del Centro'), ('Caja Popular del Valle')
        ON CONFLICT (prestamista) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    // Every plan offers the same run of terms, in years.
    sqlx::query(
        r#"
        INSERT INTO tc_plazo (plazo, id_amortizacion)
        SELECT v.plazo, a.id_amortizacion
        FROM (VALUES (10), (15), (20), (25), (30)) AS v(plazo)
        CROSS JOIN tc_amortizacion a
        ON CONFLICT (plazo, id_amortizacion) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO tr_casa (direccion, descripcion, precio, imagen)
        VALUES
            ('Av. de los Pinos 212, Col. Las Arboledas',
             'Casa de dos plantas con tres recámaras y patio trasero',
             1850000, 'casa-arboledas.jpg'),
            ('Calle Jacarandas 45, Col. Jardines del Sur',
             'Casa de una planta con dos recámaras y cochera techada',
             1240000, 'casa-jardines.jpg'),
            ('Privada del Lago 8, Col. Residencial El Lago',
             'Residencia con cuatro recámaras, estudio y jardín amplio',
             3100000, 'casa-lago.jpg')
        ON CONFLICT (direccion) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Seed data loaded");
    Ok(())
}
