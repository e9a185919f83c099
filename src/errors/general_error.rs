use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error genérico sin dominio: mensaje + código numérico opcional.
///
/// Es el valor que los steps dejan en un side channel (`Capture`) antes de
/// detener la cadena, ya que la cadena sólo transporta `{Continue, Halt}`.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}{}", code_suffix(.code))]
pub struct GeneralError {
    pub message: String,
    pub code: Option<i64>,
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|c| format!(" (código {c})")).unwrap_or_default()
}

impl GeneralError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(),
               code: None }
    }

    pub fn with_code(message: impl Into<String>, code: i64) -> Self {
        Self { message: message.into(),
               code: Some(code) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_format() {
        let err = GeneralError::new("sin conexión");
        assert_eq!(err.code, None);
        assert_eq!(err.to_string(), "sin conexión");
    }

    #[test]
    fn test_message_with_code_format() {
        let err = GeneralError::with_code("respuesta inválida", 422);
        assert_eq!(err.to_string(), "respuesta inválida (código 422)");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(GeneralError::with_code("x", 1)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "message": "x", "code": 1 }));
    }
}
