//! cotizador-server: HTTP API for the mortgage-quote application
//!
//! Exposes the client registry, house listings, loan catalogs, and quote
//! requests over HTTP, backed directly by a Postgres connection pool.

pub mod db;
pub mod http;
pub mod models;
pub mod password;

pub use http::{build_router, run_server, AppState, ServerConfig};
