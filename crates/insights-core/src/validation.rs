//! Boundary validation: untyped JSON in, typed command out.
//!
//! Numeric identifiers are coerced the way a browser form or a route
//! parameter delivers them: JSON numbers and numeric strings are both
//! accepted, as long as the value is an integer in `0..=MAX_SAFE_INTEGER`.
//! `text` must be a JSON string; the empty string is valid. Unknown keys are
//! ignored, missing required keys fail.
//!
//! Every function here is pure. Nothing touches storage.

use serde_json::{Map, Value};

use crate::commands::{CreateInsight, DeleteInsight};
use crate::errors::{FieldIssue, ValidationError};

/// Largest integer a JSON number can carry without losing precision in a
/// browser client (`Number.MAX_SAFE_INTEGER`).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Validate a create request body (`{ brand, text }`).
///
/// # Errors
///
/// Returns `ValidationError` naming every field that is missing or malformed.
pub fn parse_create_insight(input: &Value) -> Result<CreateInsight, ValidationError> {
    let obj = expect_object(input)?;
    let mut issues = Vec::new();

    let brand = non_negative_int(obj.get("brand"))
        .map_err(|message| issues.push(FieldIssue::new("brand", message)))
        .ok();
    let text = string_field(obj.get("text"))
        .map_err(|message| issues.push(FieldIssue::new("text", message)))
        .ok();

    match (brand, text) {
        (Some(brand), Some(text)) => Ok(CreateInsight { brand, text }),
        _ => Err(ValidationError::new(issues)),
    }
}

/// Validate a delete request (`{ id }`).
///
/// # Errors
///
/// Returns `ValidationError` if `id` is missing or not a non-negative integer.
pub fn parse_delete_insight(input: &Value) -> Result<DeleteInsight, ValidationError> {
    parse_insight_id(input).map(|id| DeleteInsight { id })
}

/// Validate a lookup request (`{ id }`) and return the identifier.
///
/// # Errors
///
/// Returns `ValidationError` if `id` is missing or not a non-negative integer.
pub fn parse_insight_id(input: &Value) -> Result<i64, ValidationError> {
    let obj = expect_object(input)?;
    non_negative_int(obj.get("id"))
        .map_err(|message| ValidationError::new(vec![FieldIssue::new("id", message)]))
}

fn expect_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input.as_object().ok_or_else(|| {
        ValidationError::new(vec![FieldIssue::new(
            "(root)",
            format!("Expected object, received {}", type_name(input)),
        )])
    })
}

fn string_field(value: Option<&Value>) -> Result<String, String> {
    match value {
        None => Err("Required".to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("Expected string, received {}", type_name(other))),
    }
}

fn non_negative_int(value: Option<&Value>) -> Result<i64, String> {
    match value {
        None => Err("Required".to_string()),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                check_range(i)
            } else if n.is_u64() {
                Err("Number must be a safe integer".to_string())
            } else {
                n.as_f64()
                    .ok_or_else(|| "Expected number, received nan".to_string())
                    .and_then(from_float)
            }
        }
        Some(Value::String(s)) => coerce_str(s),
        Some(other) => Err(format!("Expected number, received {}", type_name(other))),
    }
}

fn coerce_str(raw: &str) -> Result<i64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Expected number, received empty string".to_string());
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return check_range(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => from_float(f),
        _ => Err(format!("Expected number, received \"{trimmed}\"")),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn from_float(f: f64) -> Result<i64, String> {
    if f.fract() != 0.0 {
        return Err("Expected integer, received float".to_string());
    }
    if f < 0.0 {
        return Err("Number must be greater than or equal to 0".to_string());
    }
    if f > MAX_SAFE_INTEGER as f64 {
        return Err("Number must be a safe integer".to_string());
    }
    Ok(f as i64)
}

fn check_range(i: i64) -> Result<i64, String> {
    if i < 0 {
        Err("Number must be greater than or equal to 0".to_string())
    } else if i > MAX_SAFE_INTEGER {
        Err("Number must be a safe integer".to_string())
    } else {
        Ok(i)
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
