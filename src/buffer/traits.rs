// src/buffer/traits.rs
//! The buffer contract the free functions in [`crate::ops`] operate on

use super::order::ByteOrder;
use crate::error::{check_range, Result};

/// A bounded, mutable byte store with a cursor and a configured byte order.
///
/// Implementors supply capacity/limit/position bookkeeping and absolute bulk
/// copies. The signed accessors are provided on top of those and decode
/// multi-byte values with [`order`](Self::order).
///
/// Absolute accessors never move the cursor. Relative accessors read or write
/// at [`position`](Self::position) and advance it by the access width. Any
/// range reaching past [`limit`](Self::limit) fails with
/// [`BufferError::OutOfBounds`](crate::BufferError::OutOfBounds) and leaves
/// both the contents and the cursor unchanged.
pub trait ByteBuffer {
    /// Total number of bytes the buffer can hold.
    fn capacity(&self) -> usize;

    /// Exclusive upper bound of the addressable span.
    fn limit(&self) -> usize;

    /// Current cursor position.
    fn position(&self) -> usize;

    /// Moves the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::PositionOutOfBounds`](crate::BufferError::PositionOutOfBounds)
    /// if `pos` exceeds the limit.
    fn set_position(&mut self, pos: usize) -> Result<()>;

    /// Byte order applied to multi-byte accessors.
    fn order(&self) -> ByteOrder;

    /// Copies `dst.len()` bytes starting at `index` into `dst`.
    ///
    /// Must validate the whole range before copying.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index + dst.len()` exceeds the limit.
    fn get_bytes_at(&self, index: usize, dst: &mut [u8]) -> Result<()>;

    /// Copies all of `src` into the buffer starting at `index`.
    ///
    /// Must validate the whole range before copying.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index + src.len()` exceeds the limit.
    fn put_bytes_at(&mut self, index: usize, src: &[u8]) -> Result<()>;

    /// Bytes between the cursor and the limit.
    #[inline]
    fn remaining(&self) -> usize {
        self.limit().saturating_sub(self.position())
    }

    /// Reads a signed byte at `index`.
    #[inline]
    fn get_i8_at(&self, index: usize) -> Result<i8> {
        let mut bytes = [0u8; 1];
        self.get_bytes_at(index, &mut bytes)?;
        Ok(i8::from_ne_bytes(bytes))
    }

    /// Writes a signed byte at `index`.
    #[inline]
    fn put_i8_at(&mut self, index: usize, val: i8) -> Result<()> {
        self.put_bytes_at(index, &val.to_ne_bytes())
    }

    /// Reads a signed 16-bit value at `index`.
    #[inline]
    fn get_i16_at(&self, index: usize) -> Result<i16> {
        let mut bytes = [0u8; 2];
        self.get_bytes_at(index, &mut bytes)?;
        Ok(self.order().decode_i16(bytes))
    }

    /// Writes a signed 16-bit value at `index`.
    #[inline]
    fn put_i16_at(&mut self, index: usize, val: i16) -> Result<()> {
        let bytes = self.order().encode_i16(val);
        self.put_bytes_at(index, &bytes)
    }

    /// Reads a signed 32-bit value at `index`.
    #[inline]
    fn get_i32_at(&self, index: usize) -> Result<i32> {
        let mut bytes = [0u8; 4];
        self.get_bytes_at(index, &mut bytes)?;
        Ok(self.order().decode_i32(bytes))
    }

    /// Writes a signed 32-bit value at `index`.
    #[inline]
    fn put_i32_at(&mut self, index: usize, val: i32) -> Result<()> {
        let bytes = self.order().encode_i32(val);
        self.put_bytes_at(index, &bytes)
    }

    /// Reads a signed byte at the cursor and advances it by 1.
    #[inline]
    fn get_i8(&mut self) -> Result<i8> {
        let pos = claim(&*self, 1)?;
        let val = self.get_i8_at(pos)?;
        self.set_position(pos + 1)?;
        Ok(val)
    }

    /// Writes a signed byte at the cursor and advances it by 1.
    #[inline]
    fn put_i8(&mut self, val: i8) -> Result<()> {
        let pos = claim(&*self, 1)?;
        self.put_i8_at(pos, val)?;
        self.set_position(pos + 1)
    }

    /// Reads a signed 16-bit value at the cursor and advances it by 2.
    #[inline]
    fn get_i16(&mut self) -> Result<i16> {
        let pos = claim(&*self, 2)?;
        let val = self.get_i16_at(pos)?;
        self.set_position(pos + 2)?;
        Ok(val)
    }

    /// Writes a signed 16-bit value at the cursor and advances it by 2.
    #[inline]
    fn put_i16(&mut self, val: i16) -> Result<()> {
        let pos = claim(&*self, 2)?;
        self.put_i16_at(pos, val)?;
        self.set_position(pos + 2)
    }

    /// Reads a signed 32-bit value at the cursor and advances it by 4.
    #[inline]
    fn get_i32(&mut self) -> Result<i32> {
        let pos = claim(&*self, 4)?;
        let val = self.get_i32_at(pos)?;
        self.set_position(pos + 4)?;
        Ok(val)
    }

    /// Writes a signed 32-bit value at the cursor and advances it by 4.
    #[inline]
    fn put_i32(&mut self, val: i32) -> Result<()> {
        let pos = claim(&*self, 4)?;
        self.put_i32_at(pos, val)?;
        self.set_position(pos + 4)
    }
}

/// Checks that `width` bytes fit between the cursor and the limit and
/// returns the cursor.
#[inline]
fn claim<B: ByteBuffer + ?Sized>(buf: &B, width: usize) -> Result<usize> {
    let pos = buf.position();
    check_range(pos, width, buf.limit())?;
    Ok(pos)
}

impl<B: ByteBuffer + ?Sized> ByteBuffer for &mut B {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn limit(&self) -> usize {
        (**self).limit()
    }

    fn position(&self) -> usize {
        (**self).position()
    }

    fn set_position(&mut self, pos: usize) -> Result<()> {
        (**self).set_position(pos)
    }

    fn order(&self) -> ByteOrder {
        (**self).order()
    }

    fn get_bytes_at(&self, index: usize, dst: &mut [u8]) -> Result<()> {
        (**self).get_bytes_at(index, dst)
    }

    fn put_bytes_at(&mut self, index: usize, src: &[u8]) -> Result<()> {
        (**self).put_bytes_at(index, src)
    }
}
