//! Request shape validation.
//!
//! Pure checks over the raw JSON body fields. Handlers accept loosely typed
//! `Option<Value>` fields so that a wrong shape becomes a descriptive 400
//! instead of a deserialization error.

use serde_json::{Map, Value};

use super::{ReportError, ReportFormat};

/// The field must be present and be a JSON array.
pub fn require_array<'a>(
    value: Option<&'a Value>,
    message: &str,
) -> Result<&'a Vec<Value>, ReportError> {
    value
        .and_then(Value::as_array)
        .ok_or_else(|| ReportError::InvalidInput(message.to_string()))
}

/// The field must be present and be a JSON object.
pub fn require_object<'a>(
    value: Option<&'a Value>,
    message: &str,
) -> Result<&'a Map<String, Value>, ReportError> {
    value
        .and_then(Value::as_object)
        .ok_or_else(|| ReportError::InvalidInput(message.to_string()))
}

/// The field must be one of the recognized format values.
pub fn require_format(value: Option<&str>) -> Result<ReportFormat, ReportError> {
    value.and_then(ReportFormat::parse).ok_or_else(|| {
        ReportError::InvalidInput("Formato inválido. Use 'xlsx' ou 'pdf'.".to_string())
    })
}

/// The field must be present and non-blank.
pub fn require_text<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ReportError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ReportError::InvalidInput(message.to_string())),
    }
}
