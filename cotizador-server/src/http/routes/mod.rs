//! Route handlers organized by resource

pub mod auth;
pub mod casas;
pub mod catalogos;
pub mod clientes;
pub mod cotizaciones;
pub mod health;
