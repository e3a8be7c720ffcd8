//! Request payloads with validation before use
//!
//! Bodies deserialize strictly (unknown or mistyped fields fail), then
//! `validate()` enforces field presence. Invalid input returns
//! ValidationError, not panic.

pub mod cliente;
pub mod cotizacion;
pub mod validation;

pub use cliente::{Credenciales, LoginRequest, PerfilCambios, Registro, RegistroRequest};
pub use cotizacion::{CotizacionRequest, NuevaCotizacion};
pub use validation::ValidationError;
