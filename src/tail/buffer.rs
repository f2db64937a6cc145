use super::types::{TailBufferError, DEFAULT_CAPACITY};
use std::borrow::Cow;
use std::fmt;

/// Fixed-capacity byte buffer that keeps the most recent `capacity` bytes
/// written to it. Older bytes are overwritten in place.
pub struct TailBuffer {
    data: Box<[u8]>,
    position: usize,
    total_written: u64,
}

impl TailBuffer {
    pub fn new(capacity: usize) -> Result<Self, TailBufferError> {
        if capacity == 0 {
            return Err(TailBufferError::InvalidCapacity(capacity.to_string()));
        }
        Ok(Self::with_capacity_unchecked(capacity))
    }

    // `capacity` must be non-zero.
    fn with_capacity_unchecked(capacity: usize) -> Self {
        tracing::debug!(capacity, "Allocated tail buffer");

        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            position: 0,
            total_written: 0,
        }
    }

    /// Appends `new_data`, dropping whatever falls out of the window.
    /// Always accepts every byte and returns `new_data.len()`.
    pub fn write(&mut self, new_data: &[u8]) -> usize {
        let accepted = new_data.len();
        let max_size = self.data.len();
        self.total_written = self.total_written.saturating_add(accepted as u64);

        // Only the trailing window of an oversized write can survive.
        let new_data = if accepted > max_size {
            &new_data[accepted - max_size..]
        } else {
            new_data
        };

        let head = new_data.len().min(max_size - self.position);
        self.data[self.position..self.position + head].copy_from_slice(&new_data[..head]);
        let wrapped = &new_data[head..];
        self.data[..wrapped.len()].copy_from_slice(wrapped);

        self.position = (self.position + new_data.len()) % max_size;

        tracing::trace!(
            accepted,
            truncated = accepted - new_data.len(),
            position = self.position,
            "Buffered bytes"
        );
        accepted
    }

    /// Current contents, oldest byte first.
    ///
    /// Borrows the storage directly unless the window wraps past the end of
    /// the array, in which case the two halves are stitched into a new
    /// allocation.
    pub fn snapshot(&self) -> Cow<'_, [u8]> {
        let max_size = self.data.len() as u64;

        if self.total_written >= max_size && self.position == 0 {
            Cow::Borrowed(&self.data[..])
        } else if self.total_written > max_size {
            let mut result = Vec::with_capacity(self.data.len());
            result.extend_from_slice(&self.data[self.position..]);
            result.extend_from_slice(&self.data[..self.position]);
            Cow::Owned(result)
        } else {
            Cow::Borrowed(&self.data[..self.position])
        }
    }

    /// Forgets all retained bytes. Storage is kept and not zeroed.
    pub fn reset(&mut self) {
        tracing::debug!(
            capacity = self.data.len(),
            discarded = self.total_written,
            "Resetting tail buffer"
        );
        self.position = 0;
        self.total_written = 0;
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        // Fits: bounded by the capacity, which is a usize.
        self.total_written.min(self.data.len() as u64) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.total_written == 0
    }

    /// Bytes written since construction or the last reset.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Bytes accepted but no longer retrievable.
    pub fn discarded(&self) -> u64 {
        self.total_written - self.len() as u64
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.snapshot()).into_owned()
    }
}

impl Default for TailBuffer {
    fn default() -> Self {
        Self::with_capacity_unchecked(DEFAULT_CAPACITY)
    }
}

impl TryFrom<i64> for TailBuffer {
    type Error = TailBufferError;

    fn try_from(capacity: i64) -> Result<Self, Self::Error> {
        let capacity = usize::try_from(capacity)
            .map_err(|_| TailBufferError::InvalidCapacity(capacity.to_string()))?;
        Self::new(capacity)
    }
}

impl fmt::Debug for TailBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TailBuffer")
            .field("capacity", &self.data.len())
            .field("position", &self.position)
            .field("total_written", &self.total_written)
            .finish()
    }
}
