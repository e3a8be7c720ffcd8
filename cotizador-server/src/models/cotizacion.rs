//! Quote request payload

use serde::Deserialize;

use super::validation::{require, require_text, ValidationError};

/// Raw quote body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CotizacionRequest {
    pub id_casa: Option<i32>,
    pub id_tipo_prestamo: Option<i32>,
    pub id_amortizacion: Option<i32>,
    pub id_plazo: Option<i32>,
    pub correo_cliente: Option<String>,
}

/// Validated quote payload. Whether the ids actually exist is left to
/// the FK constraints at insert time.
#[derive(Debug, Clone)]
pub struct NuevaCotizacion {
    pub id_casa: i32,
    pub id_tipo_prestamo: i32,
    pub id_amortizacion: i32,
    pub id_plazo: i32,
    pub correo_cliente: String,
}

impl CotizacionRequest {
    pub fn validate(self) -> Result<NuevaCotizacion, ValidationError> {
        Ok(NuevaCotizacion {
            id_casa: require("id_casa", self.id_casa)?,
            id_tipo_prestamo: require("id_tipo_prestamo", self.id_tipo_prestamo)?,
            id_amortizacion: require("id_amortizacion", self.id_amortizacion)?,
            id_plazo: require("id_plazo", self.id_plazo)?,
            correo_cliente: require_text("correo_cliente", self.correo_cliente)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_body_validates() {
        let req: CotizacionRequest = serde_json::from_value(json!({
            "id_casa": 1,
            "id_tipo_prestamo": 2,
            "id_amortizacion": 1,
            "id_plazo": 3,
            "correo_cliente": "ana@example.test"
        }))
        .unwrap();
        let nueva = req.validate().unwrap();
        assert_eq!(nueva.id_plazo, 3);
    }

    #[test]
    fn missing_id_fails_validation() {
        let req: CotizacionRequest = serde_json::from_value(json!({
            "id_casa": 1,
            "id_tipo_prestamo": 2,
            "id_plazo": 3,
            "correo_cliente": "ana@example.test"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn unknown_field_rejected_at_deserialization() {
        assert!(serde_json::from_value::<CotizacionRequest>(json!({
            "id_casa": 1,
            "id_tipo_prestamo": 2,
            "id_amortizacion": 1,
            "id_plazo": 3,
            "correo_cliente": "ana@example.test",
            "enganche": 150000
        }))
        .is_err());
    }
}
