//! Client request payloads
//!
//! Every inbound body deserializes into a `*Request` struct with
//! `deny_unknown_fields`, so stray or misspelled keys fail at the
//! extractor. Presence of the required fields is then checked by
//! `validate()`, which produces the owned payload the repositories
//! take. Empty strings count as missing, matching what untouched form
//! inputs submit.

use serde::Deserialize;

use super::validation::{require, require_text, ValidationError};

/// Raw registration body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistroRequest {
    pub nombre_completo: Option<String>,
    pub rfc: Option<String>,
    pub edad: Option<i32>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub contrasena: Option<String>,
    pub sueldo: Option<f64>,
    pub id_estado_civil: Option<i32>,
}

/// Validated registration payload. `contrasena` is still the plaintext
/// here; hashing happens in the handler before the insert.
#[derive(Debug, Clone)]
pub struct Registro {
    pub nombre_completo: String,
    pub rfc: String,
    pub edad: i32,
    pub telefono: String,
    pub correo: String,
    pub contrasena: String,
    pub sueldo: Option<f64>,
    pub id_estado_civil: i32,
}

impl RegistroRequest {
    /// Require everything except `sueldo`, which is genuinely optional.
    pub fn validate(self) -> Result<Registro, ValidationError> {
        Ok(Registro {
            nombre_completo: require_text("nombre_completo", self.nombre_completo)?,
            rfc: require_text("rfc", self.rfc)?,
            edad: require("edad", self.edad)?,
            telefono: require_text("telefono", self.telefono)?,
            correo: require_text("correo", self.correo)?,
            contrasena: require_text("contrasena", self.contrasena)?,
            sueldo: self.sueldo,
            id_estado_civil: require("id_estado_civil", self.id_estado_civil)?,
        })
    }
}

/// Raw login body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub correo: Option<String>,
    pub contrasena: Option<String>,
}

/// Validated login payload.
#[derive(Debug, Clone)]
pub struct Credenciales {
    pub correo: String,
    pub contrasena: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<Credenciales, ValidationError> {
        Ok(Credenciales {
            correo: require_text("correo", self.correo)?,
            contrasena: require_text("contrasena", self.contrasena)?,
        })
    }
}

/// Partial profile update, keyed by email.
///
/// `correo` identifies the client and is the one field serde itself
/// requires; omitted fields stay `None` and keep their stored values.
/// The email is not updatable through this payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerfilCambios {
    pub correo: String,
    pub nombre_completo: Option<String>,
    pub rfc: Option<String>,
    pub edad: Option<i32>,
    pub telefono: Option<String>,
    pub sueldo: Option<f64>,
    pub id_estado_civil: Option<i32>,
}
