//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field absent from the payload, or present but empty
    Missing { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "required field missing or empty: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a text field to be present and non-empty.
///
/// Whitespace-only values pass; only the empty string counts as absent,
/// matching how the form clients submit untouched inputs.
pub fn require_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::Missing { field }),
    }
}

/// Require a non-text field to be present.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "correo" };
        assert_eq!(err.to_string(), "required field missing or empty: correo");
    }

    #[test]
    fn require_text_rejects_none_and_empty() {
        assert!(require_text("correo", None).is_err());
        assert!(require_text("correo", Some(String::new())).is_err());
        assert_eq!(
            require_text("correo", Some("a@b.mx".into())).unwrap(),
            "a@b.mx"
        );
        // Whitespace is not empty
        assert_eq!(require_text("correo", Some(" ".into())).unwrap(), " ");
    }

    #[test]
    fn require_rejects_only_none() {
        assert!(require::<i32>("edad", None).is_err());
        assert_eq!(require("edad", Some(0)).unwrap(), 0);
    }
}
