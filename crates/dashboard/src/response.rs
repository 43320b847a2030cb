//! How the page reads a proxy response; `public/app.js` applies the same
//! rules before painting.

use chart_model::Snapshot;
use serde_json::Value;
use std::error::Error;
use std::fmt;

/// Why a symbol load failed. The dashboard shows one message for all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Network(String),
    Status(u16),
    Embedded(String),
    Malformed(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Network(e) => write!(f, "Network error: {}", e),
            LoadError::Status(status) => write!(f, "Proxy responded with status {}", status),
            LoadError::Embedded(e) => write!(f, "Proxy error: {}", e),
            LoadError::Malformed(e) => write!(f, "Malformed response: {}", e),
        }
    }
}

impl Error for LoadError {}

/// Turns one proxy response into a load outcome.
pub fn decode_proxy_response(status: u16, body: &str) -> Result<Snapshot, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }

    let json: Value =
        serde_json::from_str(body).map_err(|e| LoadError::Malformed(e.to_string()))?;

    if let Some(error) = json.get("error").filter(|e| is_set(e)) {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(LoadError::Embedded(message));
    }

    serde_json::from_value(json).map_err(|e| LoadError::Malformed(e.to_string()))
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
