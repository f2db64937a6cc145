//! A fixed-size tail buffer for streamed output.
//!
//! [`TailBuffer`] keeps the last `capacity` bytes written to it and can hand
//! back a chronologically ordered snapshot at any time. It implements both
//! [`std::io::Write`] and [`tokio::io::AsyncWrite`], so it can stand in for
//! any byte sink.
//!
//! ```
//! use tailbuf::TailBuffer;
//!
//! let mut buf = TailBuffer::new(4)?;
//! buf.write(b"AB");
//! buf.write(b"CDE");
//! assert_eq!(&*buf.snapshot(), b"BCDE");
//! # Ok::<(), tailbuf::TailBufferError>(())
//! ```
//!
//! There is no internal locking. Hosts that share a buffer across tasks wrap
//! it in a mutex, e.g. `Arc<tokio::sync::Mutex<TailBuffer>>`.

mod tail;
mod utils;

pub use tail::{BufferOptions, TailBuffer, TailBufferError, DEFAULT_CAPACITY};
pub use utils::parse_capacity;
