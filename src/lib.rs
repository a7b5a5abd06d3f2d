// src/lib.rs
//! # Byte Buffer Operations
//!
//! Access primitives for position-tracked byte buffers, for use by protocol
//! and codec layers.
//!
//! Features:
//! - Unsigned accessors for byte, short and int widths, relative (cursor
//!   advancing) and absolute (cursor untouched)
//! - Bulk copies between a buffer and a plain byte slice with explicit
//!   offsets and lengths, never moving the cursor
//! - Byte order taken from the buffer's configuration
//! - A single [`BufferError::OutOfBounds`] failure, raised before anything is
//!   written
//! - [`Buffer`], a fixed-capacity buffer with position, limit and mark that
//!   securely zeroes its memory on drop
//!
//! ```
//! use bufops::prelude::*;
//!
//! let mut buf = Buffer::allocate(8);
//! put_unsigned(&mut buf, 200)?;
//! put_unsigned_short(&mut buf, 60_000)?;
//! put_unsigned_int(&mut buf, 4_000_000_000)?;
//! buf.flip();
//!
//! assert_eq!(get_unsigned(&mut buf)?, 200);
//! assert_eq!(get_unsigned_short(&mut buf)?, 60_000);
//! assert_eq!(get_unsigned_int(&mut buf)?, 4_000_000_000);
//! # Ok::<(), BufferError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod error;
pub mod ops;

// Re-export main types
pub use buffer::{Buffer, ByteBuffer, ByteOrder};
pub use error::{BufferError, Result, ResultExt};

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::{Buffer, ByteBuffer, ByteOrder};
    pub use crate::error::{BufferError, Result, ResultExt};
    pub use crate::ops::*;
}
