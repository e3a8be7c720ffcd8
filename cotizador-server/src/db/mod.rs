//! Database layer - connection pool, migrations, seed data, repositories
//!
//! # Design Principles
//!
//! - One shared pool (max 5 connections), injected into the router state
//! - Rely on DB constraints, surface conflicts - no check-then-insert
//! - Repositories borrow the pool and return `sqlx::Error`; handlers
//!   own status codes and client-facing messages

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::create_pool;
pub use repos::*;
pub use sqlx::PgPool;
