use crate::tail::TailBufferError;

/// Reads a buffer capacity out of a loosely typed JSON value.
///
/// Accepts positive integers and strings holding one. Anything else,
/// including zero and negative numbers, is an invalid capacity.
pub fn parse_capacity(value: &serde_json::Value) -> Result<usize, TailBufferError> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    };

    match parsed {
        Some(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(TailBufferError::InvalidCapacity(describe(value))),
    }
}

fn describe(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
