// src/buffer/core.rs
//! Core buffer structure and cursor bookkeeping
//!
//! This module provides the [`Buffer`] type: fixed capacity, a limit, a
//! cursor with an optional mark, a byte order, and secure memory zeroing on
//! drop.

use super::order::ByteOrder;
use super::traits::ByteBuffer;
use crate::error::{check_range, BufferError, Result};
use zeroize::Zeroize;

/// Maximum buffer size (1GB)
pub const BUF_MAX_SIZE: usize = 1_000_000_000;

/// A fixed-capacity byte buffer with position, limit and mark.
///
/// Invariant: `mark <= position <= limit <= capacity`. The addressable span
/// for both absolute and relative access is `[0, limit)`.
///
/// The buffer automatically and securely zeros its memory on drop using
/// the [`zeroize`] crate.
///
/// # Examples
///
/// ```
/// use bufops::prelude::*;
///
/// let mut buf = Buffer::allocate(4);
/// buf.put_i16(-1)?;
/// buf.flip();
///
/// assert_eq!(buf.limit(), 2);
/// assert_eq!(get_unsigned_short(&mut buf)?, 0xFFFF);
/// # Ok::<(), BufferError>(())
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Buffer {
    /// Backing storage; its length is the capacity (securely erased on drop)
    data: Vec<u8>,
    /// Current read/write position
    pos: usize,
    /// End of the addressable span
    limit: usize,
    /// Position saved by [`mark`](Buffer::mark)
    mark: Option<usize>,
    #[zeroize(skip)]
    order: ByteOrder,
}

impl Buffer {
    /// Creates a zero-filled buffer with big-endian byte order.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`BUF_MAX_SIZE`] (1GB).
    ///
    /// # Examples
    ///
    /// ```
    /// use bufops::prelude::*;
    ///
    /// let buf = Buffer::allocate(8192);
    /// assert_eq!(buf.capacity(), 8192);
    /// assert_eq!(buf.limit(), 8192);
    /// assert_eq!(buf.position(), 0);
    /// ```
    #[inline]
    pub fn allocate(capacity: usize) -> Self {
        assert!(
            capacity <= BUF_MAX_SIZE,
            "Buffer size {} exceeds maximum {}",
            capacity,
            BUF_MAX_SIZE
        );
        Self::wrap(vec![0; capacity])
    }

    /// Wraps existing data; capacity and limit equal its length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bufops::prelude::*;
    ///
    /// let buf = Buffer::wrap(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(buf.capacity(), 5);
    /// assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn wrap(data: Vec<u8>) -> Self {
        let limit = data.len();
        Self {
            data,
            pos: 0,
            limit,
            mark: None,
            order: ByteOrder::default(),
        }
    }

    /// Sets the byte order, builder style.
    #[must_use]
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    /// Changes the byte order used by subsequent multi-byte accesses.
    #[inline]
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Sets the limit.
    ///
    /// The position is clamped to the new limit and a mark beyond it is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::LimitOutOfBounds`] if `limit` exceeds the capacity.
    pub fn set_limit(&mut self, limit: usize) -> Result<()> {
        if limit > self.data.len() {
            return Err(BufferError::LimitOutOfBounds(limit));
        }
        self.limit = limit;
        if self.pos > limit {
            self.pos = limit;
        }
        if self.mark.is_some_and(|m| m > limit) {
            self.mark = None;
        }
        Ok(())
    }

    /// Returns `true` if any bytes remain between position and limit.
    #[inline(always)]
    pub fn has_remaining(&self) -> bool {
        self.pos < self.limit
    }

    /// Sets the limit to the position, then rewinds the position to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bufops::prelude::*;
    ///
    /// let mut buf = Buffer::allocate(16);
    /// put_unsigned(&mut buf, 7)?;
    /// buf.flip();
    /// assert_eq!(buf.limit(), 1);
    /// assert_eq!(buf.position(), 0);
    /// # Ok::<(), BufferError>(())
    /// ```
    #[inline]
    pub fn flip(&mut self) {
        self.limit = self.pos;
        self.pos = 0;
        self.mark = None;
    }

    /// Resets position to 0 and limit to capacity. Contents are left as is.
    #[inline]
    pub fn clear(&mut self) {
        self.pos = 0;
        self.limit = self.data.len();
        self.mark = None;
    }

    /// Resets position to 0, keeping the limit.
    #[inline]
    pub fn rewind(&mut self) {
        self.pos = 0;
        self.mark = None;
    }

    /// Remembers the current position for a later [`reset`](Self::reset).
    #[inline]
    pub fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    /// Returns the position to the last mark.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidMark`] if no mark is set.
    pub fn reset(&mut self) -> Result<()> {
        let mark = self.mark.ok_or(BufferError::InvalidMark)?;
        self.pos = mark;
        Ok(())
    }

    /// Securely zeros all buffer memory and clears the cursor.
    ///
    /// Uses compiler-resistant zeroing via the [`zeroize`] crate.
    pub fn burn(&mut self) {
        // Slice zeroize keeps data.len(); Vec::zeroize would clear it.
        self.data.as_mut_slice().zeroize();
        self.clear();
    }

    /// Returns the whole backing storage, regardless of position and limit.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the whole backing storage mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns its storage without zeroing it.
    pub fn into_vec(mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }
}

impl ByteBuffer for Buffer {
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn limit(&self) -> usize {
        self.limit
    }

    #[inline(always)]
    fn position(&self) -> usize {
        self.pos
    }

    fn set_position(&mut self, pos: usize) -> Result<()> {
        if pos > self.limit {
            return Err(BufferError::PositionOutOfBounds(pos));
        }
        if self.mark.is_some_and(|m| m > pos) {
            self.mark = None;
        }
        self.pos = pos;
        Ok(())
    }

    #[inline(always)]
    fn order(&self) -> ByteOrder {
        self.order
    }

    #[inline]
    fn get_bytes_at(&self, index: usize, dst: &mut [u8]) -> Result<()> {
        check_range(index, dst.len(), self.limit)?;
        dst.copy_from_slice(&self.data[index..index + dst.len()]);
        Ok(())
    }

    #[inline]
    fn put_bytes_at(&mut self, index: usize, src: &[u8]) -> Result<()> {
        check_range(index, src.len(), self.limit)?;
        self.data[index..index + src.len()].copy_from_slice(src);
        Ok(())
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for Buffer {
    // Contents are deliberately omitted.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.data.len())
            .field("position", &self.pos)
            .field("limit", &self.limit)
            .field("mark", &self.mark)
            .field("order", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate() {
        let buf = Buffer::allocate(1024);
        assert_eq!(buf.capacity(), 1024);
        assert_eq!(buf.limit(), 1024);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.order(), ByteOrder::BigEndian);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_wrap() {
        let buf = Buffer::wrap(vec![1, 2, 3, 4, 5]);
        assert_eq!(buf.capacity(), 5);
        assert_eq!(buf.remaining(), 5);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_flip_and_clear() {
        let mut buf = Buffer::allocate(8);
        buf.put_i32(1).unwrap();
        buf.flip();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 4);

        buf.clear();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 8);
    }

    #[test]
    fn test_set_position_past_limit() {
        let mut buf = Buffer::allocate(8);
        buf.set_limit(4).unwrap();
        assert_eq!(
            buf.set_position(5),
            Err(BufferError::PositionOutOfBounds(5))
        );
        assert!(buf.set_position(4).is_ok());
    }

    #[test]
    fn test_set_limit_clamps_position_and_mark() {
        let mut buf = Buffer::allocate(8);
        buf.set_position(6).unwrap();
        buf.mark();
        buf.set_limit(3).unwrap();
        assert_eq!(buf.position(), 3);
        assert_eq!(buf.reset(), Err(BufferError::InvalidMark));
        assert_eq!(buf.set_limit(9), Err(BufferError::LimitOutOfBounds(9)));
    }

    #[test]
    fn test_mark_reset() {
        let mut buf = Buffer::allocate(8);
        buf.set_position(2).unwrap();
        buf.mark();
        buf.get_i16().unwrap();
        assert_eq!(buf.position(), 4);
        buf.reset().unwrap();
        assert_eq!(buf.position(), 2);
    }

    #[test]
    fn test_reset_without_mark() {
        let mut buf = Buffer::allocate(4);
        assert_eq!(buf.reset(), Err(BufferError::InvalidMark));
    }

    #[test]
    fn test_access_past_limit() {
        let mut buf = Buffer::allocate(8);
        buf.set_limit(2).unwrap();
        assert!(matches!(
            buf.get_i32_at(0),
            Err(BufferError::OutOfBounds { bound: 2, .. })
        ));
        assert!(buf.get_i16_at(0).is_ok());
    }

    #[test]
    fn test_absolute_put_between_limit_and_capacity_fails() {
        let mut buf = Buffer::allocate(8);
        buf.put_i16(0x0102).unwrap();
        buf.flip();

        assert_eq!(buf.limit(), 2);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(
            buf.put_i8_at(2, 1),
            Err(BufferError::OutOfBounds {
                offset: 2,
                len: 1,
                bound: 2
            })
        );
        assert!(buf.put_bytes_at(5, &[9]).is_err());
        assert_eq!(buf.as_slice(), &[0x01, 0x02, 0, 0, 0, 0, 0, 0]);

        buf.clear();
        assert!(buf.put_i8_at(5, 9).is_ok());
    }

    #[test]
    fn test_relative_failure_keeps_position() {
        let mut buf = Buffer::allocate(3);
        buf.set_position(1).unwrap();
        assert!(buf.put_i32(-1).is_err());
        assert_eq!(buf.position(), 1);
        assert_eq!(buf.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_little_endian() {
        let mut buf = Buffer::allocate(4).with_order(ByteOrder::LittleEndian);
        buf.put_i32_at(0, 0x0102_0304).unwrap();
        assert_eq!(buf.as_slice(), &[0x04, 0x03, 0x02, 0x01]);

        buf.set_order(ByteOrder::BigEndian);
        assert_eq!(buf.get_i32_at(0).unwrap(), 0x0403_0201);
    }

    #[test]
    fn test_burn() {
        let mut buf = Buffer::wrap(b"sensitive".to_vec());
        buf.set_position(4).unwrap();
        buf.set_limit(6).unwrap();
        buf.burn();
        assert!(buf.as_slice().iter().all(|&b| b == 0));
        assert_eq!(buf.capacity(), 9);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 9);
    }

    #[test]
    fn test_into_vec() {
        let buf = Buffer::wrap(vec![9, 8, 7]);
        assert_eq!(buf.into_vec(), vec![9, 8, 7]);
    }

    #[test]
    fn test_debug_omits_contents() {
        let buf = Buffer::wrap(b"secret".to_vec());
        let out = format!("{:?}", buf);
        assert!(out.contains("capacity: 6"));
        assert!(!out.contains("115"));
    }
}
