//! Wire types for the form-relay endpoint.
//!
//! DESIGN
//! ======
//! The relay answers with a JSON object carrying at least `success`, plus a
//! human-readable `message` on refusal. `success` is read with JSON
//! truthiness so a relay that sends `1` or `"true"` is still understood.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};

/// Response body returned by the relay for a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    /// Whether the relay accepted the message. Absent means refused.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub success: bool,
    /// Human-readable outcome, shown verbatim when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Decode` if the body is not a JSON object of the
    /// expected shape.
    pub fn from_body(body: &str) -> Result<Self, RelayError> {
        serde_json::from_str(body).map_err(|e| RelayError::Decode(e.to_string()))
    }
}

/// Failure to obtain a usable relay response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay response unreadable: {0}")]
    Decode(String),
    #[error("relay is only reachable from the browser")]
    Unavailable,
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
