//! Database management commands: migrate and seed

use anyhow::{Context, Result};
use clap::Parser;

use cotizador_server::db::{create_pool, migrations, seed, PgPool};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

async fn connect(database_url: Option<String>) -> Result<PgPool> {
    let database_url = database_url
        .context("DATABASE_URL not set. Set via --database-url, the DATABASE_URL env var, or .env")?;

    create_pool(&database_url)
        .await
        .context("Failed to create database pool")
}

/// Apply schema migrations and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = connect(args.database_url).await?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations applied");
    Ok(())
}

/// Load catalog and demo data; safe to run repeatedly
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = connect(args.database_url).await?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;
    seed::run(&pool).await.context("Failed to seed database")?;

    tracing::info!("Seed data loaded");
    Ok(())
}
