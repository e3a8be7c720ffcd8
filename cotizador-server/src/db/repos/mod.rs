//! Repository implementations for database access
//!
//! Each repository borrows the pool and returns plain `sqlx::Error`;
//! handlers decide the status code and the client-facing message.
//! Lookups that can miss return `Option` so the caller picks the 404.

pub mod casas;
pub mod catalogos;
pub mod clientes;
pub mod cotizaciones;

pub use casas::{Casa, CasaRepo};
pub use catalogos::{
    Amortizacion, CatalogoRepo, EstadoCivil, Plazo, PlazoAnios, Prestamista, TipoPrestamo,
};
pub use clientes::{Cliente, ClienteRepo, Sueldo};
pub use cotizaciones::{Cotizacion, CotizacionRepo};
