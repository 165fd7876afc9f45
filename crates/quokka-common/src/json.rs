//! Generic JSON encode/decode wrappers.
//!
//! Serialization emits composite members in struct-declaration order;
//! deserialization reconstructs by field *name*, so the serialized key
//! order never has to line up with any constructor's parameter order.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to encode or decode a JSON document.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct JsonError(#[from] serde_json::Error);

/// Serialize any value to its canonical JSON text.
///
/// # Errors
///
/// Returns [`JsonError`] if the value cannot be represented as JSON
/// (e.g. a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse JSON text into an instance of the target shape.
///
/// # Errors
///
/// Returns [`JsonError`] if the text is not valid JSON or does not match
/// the target shape.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    Ok(serde_json::from_str(text)?)
}
