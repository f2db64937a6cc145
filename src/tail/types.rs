use super::buffer::TailBuffer;
use crate::utils::parse_capacity;
use serde::Deserialize;
use thiserror::Error;

/// Default retention, 1 MB.
pub const DEFAULT_CAPACITY: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TailBufferError {
    #[error("capacity must be a positive integer, got {0}")]
    InvalidCapacity(String),
}

/// Options as they arrive from a host's JSON payload or config file.
///
/// `capacity` may be a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
pub struct BufferOptions {
    #[serde(default = "default_capacity")]
    pub capacity: serde_json::Value,
}

fn default_capacity() -> serde_json::Value {
    serde_json::Value::from(DEFAULT_CAPACITY)
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl BufferOptions {
    pub fn build(&self) -> Result<TailBuffer, TailBufferError> {
        TailBuffer::new(parse_capacity(&self.capacity)?)
    }
}
