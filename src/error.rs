// src/error.rs
//! Error types for buffer operations with conversion support

use thiserror::Error;

/// Errors that can occur during buffer operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The addressed byte range lies outside the buffer's limit or the array's length.
    #[error("Range of {len} bytes at offset {offset} out of bounds (bound {bound})")]
    OutOfBounds {
        /// First byte of the requested range
        offset: usize,
        /// Number of bytes requested
        len: usize,
        /// Exclusive upper bound the range was checked against
        bound: usize,
    },
    /// Position would exceed the buffer limit
    #[error("Position {0} exceeds limit")]
    PositionOutOfBounds(usize),
    /// Limit would exceed the buffer capacity
    #[error("Limit {0} exceeds capacity")]
    LimitOutOfBounds(usize),
    /// `reset` called without a mark set
    #[error("No mark set")]
    InvalidMark,
}

impl BufferError {
    /// Builds an [`OutOfBounds`](Self::OutOfBounds) error and records it at trace level.
    #[cold]
    pub(crate) fn out_of_bounds(offset: usize, len: usize, bound: usize) -> Self {
        tracing::trace!(offset, len, bound, "buffer range out of bounds");
        Self::OutOfBounds { offset, len, bound }
    }
}

/// Validates that `[offset, offset + len)` fits inside `[0, bound)`.
///
/// Overflow of `offset + len` is reported as out of bounds.
#[inline]
pub(crate) fn check_range(offset: usize, len: usize, bound: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= bound => Ok(()),
        _ => Err(BufferError::out_of_bounds(offset, len, bound)),
    }
}

// ============================================================================
// ERROR CONVERSION
// ============================================================================

/// Convert BufferError to std::io::Error
impl From<BufferError> for std::io::Error {
    fn from(err: BufferError) -> Self {
        use std::io::ErrorKind;
        match err {
            BufferError::OutOfBounds { .. } => std::io::Error::new(ErrorKind::UnexpectedEof, err),
            _ => std::io::Error::new(ErrorKind::InvalidInput, err),
        }
    }
}

/// Convert BufferError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<BufferError> for anyhow::Error {
    fn from(err: BufferError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Result type alias for buffer operations
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`bufops::Result<T>`) or use the conversion traits.
pub type Result<T> = std::result::Result<T, BufferError>;

// ============================================================================
// EXTENSION TRAIT FOR EASY CONVERSION
// ============================================================================

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}

// ============================================================================
// HELPER MACROS
// ============================================================================

/// Converts the error of a buffer operation into another error type.
///
/// The two-argument form names the target type explicitly, which is needed
/// for error types with overlapping `From` impls such as `anyhow::Error`.
///
/// # Example
/// ```
/// use bufops::prelude::*;
/// use bufops::buffer_op;
///
/// fn encode() -> std::io::Result<()> {
///     let mut buf = Buffer::allocate(2);
///     buffer_op!(put_unsigned_short(&mut buf, 0xBEEF))?;
///     Ok(())
/// }
/// # encode().unwrap();
/// ```
#[macro_export]
macro_rules! buffer_op {
    ($expr:expr, $target:ty) => {
        $expr.map_err(|e: $crate::BufferError| -> $target { e.into() })
    };
    // Defaults to std::io::Error
    ($expr:expr) => {
        $expr.map_err(|e: $crate::BufferError| -> std::io::Error { e.into() })
    };
}

/// Try a buffer operation with automatic error conversion
#[macro_export]
macro_rules! buffer_try {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => return Err(e.into()),
        }
    };
}
