#![allow(dead_code)]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    // Several tests in one binary race to install it; only the first wins.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tailbuf=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Keeps every byte ever written and slices the tail on demand.
pub struct NaiveTail {
    stream: Vec<u8>,
    capacity: usize,
}

impl NaiveTail {
    pub fn new(capacity: usize) -> Self {
        Self {
            stream: Vec::new(),
            capacity,
        }
    }

    pub fn write(&mut self, data: &[u8]) {
        self.stream.extend_from_slice(data);
    }

    pub fn tail(&self) -> &[u8] {
        let start = self.stream.len().saturating_sub(self.capacity);
        &self.stream[start..]
    }
}
