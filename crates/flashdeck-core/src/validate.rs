//! Input validation for deck and card fields.
//!
//! Every check runs before anything touches the database. Inputs arrive as
//! raw JSON values so that a wrong type is reported with the same message as
//! a missing field.

use serde_json::Value;
use thiserror::Error;

/// Default maximum length for names and terms.
pub const MAX_TEXT_LEN: usize = 255;

/// Maximum length for card definitions.
pub const MAX_DEFINITION_LEN: usize = 1000;

/// Prefix every accepted image payload must start with.
pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/";

/// A rejected request field. The message is safe to show to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Validate a required text field and return it trimmed.
///
/// The length limit is measured in characters after trimming.
pub fn validate_text(
    input: Option<&Value>,
    field_name: &str,
    max_len: usize,
) -> Result<String, ValidationError> {
    let Some(Value::String(raw)) = input else {
        return Err(ValidationError(format!("{field_name} must be a non-empty string")));
    };
    validate_str(raw, field_name, max_len)
}

/// [`validate_text`] for text that is already known to be a string.
pub fn validate_str(raw: &str, field_name: &str, max_len: usize) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError(format!("{field_name} must be a non-empty string")));
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError(format!("{field_name} cannot be just whitespace")));
    }
    if trimmed.chars().count() > max_len {
        return Err(ValidationError(format!(
            "{field_name} must be less than {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional image field.
///
/// Absent, `null` and empty values all mean "no image".
pub fn validate_image(
    input: Option<&Value>,
    field_name: &str,
) -> Result<Option<String>, ValidationError> {
    match input {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) if s.starts_with(IMAGE_DATA_URI_PREFIX) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError(format!(
            "{field_name} must be a valid base64 image"
        ))),
    }
}

/// Parse a positive integer id taken from a path segment.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_id(entity)),
    }
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_991.0;

/// Parse a positive integer id sent in a JSON body, as a number or a string.
///
/// Whole-valued floats such as `3.0` are accepted; fractional ones are not.
pub fn parse_id_value(input: Option<&Value>, entity: &str) -> Result<i64, ValidationError> {
    match input {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(whole_float))
            .filter(|id| *id > 0)
            .ok_or_else(|| invalid_id(entity)),
        Some(Value::String(s)) => parse_id(s, entity),
        _ => Err(invalid_id(entity)),
    }
}

/// Validate the `review` flag of a review toggle request.
pub fn validate_review(input: Option<&Value>) -> Result<bool, ValidationError> {
    match input {
        Some(Value::Bool(b)) => Ok(*b),
        _ => Err(ValidationError::new("Review status must be a boolean")),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_float(f: f64) -> Option<i64> {
    (f.trunc() == f && f.abs() <= MAX_EXACT_FLOAT_ID).then_some(f as i64)
}

fn invalid_id(entity: &str) -> ValidationError {
    ValidationError(format!("Invalid {entity} ID"))
}
