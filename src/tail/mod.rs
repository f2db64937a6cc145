mod buffer;
mod io;
mod types;

pub use buffer::TailBuffer;
pub use types::{BufferOptions, TailBufferError, DEFAULT_CAPACITY};
