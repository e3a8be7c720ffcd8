//! cotizador CLI - mortgage-quote API server
//!
//! Entry point for running the HTTP server and managing its database:
//! - `cotizador serve` starts the API (migrating on startup)
//! - `cotizador migrate` applies the schema and exits
//! - `cotizador seed` loads catalog and demo data

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "cotizador",
    author,
    version,
    about = "HTTP API for mortgage quotes: clients, houses, loan catalogs, and quote requests"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Apply schema migrations and exit
    Migrate(commands::db::MigrateArgs),
    /// Load catalog and demo data (idempotent)
    Seed(commands::db::SeedArgs),
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env may carry DATABASE_URL; absence is fine
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }
    Ok(())
}
