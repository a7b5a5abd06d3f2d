// src/ops.rs
//! Buffer operations the [`ByteBuffer`] contract lacks
//!
//! Bulk copies with explicit offsets and lengths that never touch the cursor,
//! and unsigned accessors over the buffer's signed storage. Reads mask and
//! widen the signed value; writes keep the low bits of the argument and drop
//! the rest without validation. Byte order is whatever the buffer is
//! configured with.
//!
//! Every range is validated before any byte is copied, so a failing call
//! leaves the buffer, the array and the cursor as they were.

use crate::buffer::ByteBuffer;
use crate::error::{check_range, Result};

/// Copies `dst.len()` bytes from `buf` starting at `buffer_offset` into `dst`.
///
/// The cursor is not moved.
///
/// # Errors
///
/// Returns [`BufferError::OutOfBounds`](crate::BufferError::OutOfBounds) if
/// the range runs past the buffer's limit.
///
/// # Examples
///
/// ```
/// use bufops::prelude::*;
///
/// let buf = Buffer::wrap(vec![0x01, 0x02, 0x03, 0x04]);
/// let mut dst = [0u8; 2];
/// get(&buf, &mut dst, 1)?;
/// assert_eq!(dst, [0x02, 0x03]);
/// # Ok::<(), BufferError>(())
/// ```
#[inline]
pub fn get<B: ByteBuffer + ?Sized>(buf: &B, dst: &mut [u8], buffer_offset: usize) -> Result<()> {
    buf.get_bytes_at(buffer_offset, dst)
}

/// Copies `len` bytes from `buf` at `buffer_offset` into `dst` at `dst_offset`.
///
/// Bytes of `dst` outside `[dst_offset, dst_offset + len)` are left alone.
/// The cursor is not moved.
///
/// # Errors
///
/// Returns `OutOfBounds` if either range runs past the end of its storage.
///
/// # Examples
///
/// ```
/// use bufops::prelude::*;
///
/// let buf = Buffer::wrap(vec![0x01, 0x02, 0x03, 0x04]);
/// let mut dst = [0u8; 4];
/// // dst_offset = 2, buffer_offset = 1, len = 2
/// get_range(&buf, &mut dst, 2, 1, 2)?;
/// assert_eq!(dst, [0x00, 0x00, 0x02, 0x03]);
/// # Ok::<(), BufferError>(())
/// ```
#[inline]
pub fn get_range<B: ByteBuffer + ?Sized>(
    buf: &B,
    dst: &mut [u8],
    dst_offset: usize,
    buffer_offset: usize,
    len: usize,
) -> Result<()> {
    check_range(dst_offset, len, dst.len())?;
    buf.get_bytes_at(buffer_offset, &mut dst[dst_offset..dst_offset + len])
}

/// Copies all of `src` into `buf` starting at `buffer_offset`.
///
/// The cursor is not moved.
///
/// # Errors
///
/// Returns `OutOfBounds` if the range runs past the buffer's limit.
///
/// # Examples
///
/// ```
/// use bufops::prelude::*;
///
/// let mut buf = Buffer::allocate(4);
/// put(&mut buf, &[0x01, 0x02], 1)?;
/// assert_eq!(buf.as_slice(), &[0x00, 0x01, 0x02, 0x00]);
/// # Ok::<(), BufferError>(())
/// ```
#[inline]
pub fn put<B: ByteBuffer + ?Sized>(buf: &mut B, src: &[u8], buffer_offset: usize) -> Result<()> {
    buf.put_bytes_at(buffer_offset, src)
}

/// Copies `len` bytes from `src` at `src_offset` into `buf` at `buffer_offset`.
///
/// The cursor is not moved.
///
/// # Errors
///
/// Returns `OutOfBounds` if either range runs past the end of its storage.
///
/// # Examples
///
/// ```
/// use bufops::prelude::*;
///
/// let mut buf = Buffer::allocate(4);
/// // src_offset = 2, buffer_offset = 1, len = 2
/// put_range(&mut buf, &[0x01, 0x02, 0x03, 0x04], 2, 1, 2)?;
/// assert_eq!(buf.as_slice(), &[0x00, 0x03, 0x04, 0x00]);
/// # Ok::<(), BufferError>(())
/// ```
#[inline]
pub fn put_range<B: ByteBuffer + ?Sized>(
    buf: &mut B,
    src: &[u8],
    src_offset: usize,
    buffer_offset: usize,
    len: usize,
) -> Result<()> {
    check_range(src_offset, len, src.len())?;
    buf.put_bytes_at(buffer_offset, &src[src_offset..src_offset + len])
}

// ============================================================================
// UNSIGNED BYTE
// ============================================================================

/// Reads one byte at the cursor as an unsigned value and advances the cursor by 1.
///
/// # Errors
///
/// Returns `OutOfBounds` if no byte remains before the limit.
#[inline]
pub fn get_unsigned<B: ByteBuffer + ?Sized>(buf: &mut B) -> Result<u16> {
    Ok(u16::from(buf.get_i8()? as u8))
}

/// Reads the byte at `index` as an unsigned value.
///
/// # Errors
///
/// Returns `OutOfBounds` if `index` is not below the limit.
#[inline]
pub fn get_unsigned_at<B: ByteBuffer + ?Sized>(buf: &B, index: usize) -> Result<u16> {
    Ok(u16::from(buf.get_i8_at(index)? as u8))
}

/// Writes the low 8 bits of `value` at the cursor and advances it by 1.
///
/// # Errors
///
/// Returns `OutOfBounds` if no byte remains before the limit.
#[inline]
pub fn put_unsigned<B: ByteBuffer + ?Sized>(buf: &mut B, value: u16) -> Result<()> {
    buf.put_i8(value as i8)
}

/// Writes the low 8 bits of `value` at `index`.
///
/// # Errors
///
/// Returns `OutOfBounds` if `index` is not below the limit.
#[inline]
pub fn put_unsigned_at<B: ByteBuffer + ?Sized>(buf: &mut B, index: usize, value: u16) -> Result<()> {
    buf.put_i8_at(index, value as i8)
}

// ============================================================================
// UNSIGNED SHORT
// ============================================================================

/// Reads two bytes at the cursor as an unsigned value and advances the cursor by 2.
///
/// # Errors
///
/// Returns `OutOfBounds` if fewer than 2 bytes remain before the limit.
///
/// # Examples
///
/// ```
/// use bufops::prelude::*;
///
/// let mut buf = Buffer::wrap(vec![0xFF, 0xFE]);
/// assert_eq!(get_unsigned_short(&mut buf)?, 0xFFFE);
/// assert_eq!(buf.position(), 2);
/// # Ok::<(), BufferError>(())
/// ```
#[inline]
pub fn get_unsigned_short<B: ByteBuffer + ?Sized>(buf: &mut B) -> Result<u32> {
    Ok(u32::from(buf.get_i16()? as u16))
}

/// Reads two bytes at `index` as an unsigned value.
///
/// # Errors
///
/// Returns `OutOfBounds` if `index + 2` exceeds the limit.
#[inline]
pub fn get_unsigned_short_at<B: ByteBuffer + ?Sized>(buf: &B, index: usize) -> Result<u32> {
    Ok(u32::from(buf.get_i16_at(index)? as u16))
}

/// Writes the low 16 bits of `value` at the cursor and advances it by 2.
///
/// # Errors
///
/// Returns `OutOfBounds` if fewer than 2 bytes remain before the limit.
#[inline]
pub fn put_unsigned_short<B: ByteBuffer + ?Sized>(buf: &mut B, value: u32) -> Result<()> {
    buf.put_i16(value as i16)
}

/// Writes the low 16 bits of `value` at `index`.
///
/// # Errors
///
/// Returns `OutOfBounds` if `index + 2` exceeds the limit.
#[inline]
pub fn put_unsigned_short_at<B: ByteBuffer + ?Sized>(
    buf: &mut B,
    index: usize,
    value: u32,
) -> Result<()> {
    buf.put_i16_at(index, value as i16)
}

// ============================================================================
// UNSIGNED INT
// ============================================================================

/// Reads four bytes at the cursor as an unsigned value and advances the cursor by 4.
///
/// # Errors
///
/// Returns `OutOfBounds` if fewer than 4 bytes remain before the limit.
#[inline]
pub fn get_unsigned_int<B: ByteBuffer + ?Sized>(buf: &mut B) -> Result<u64> {
    Ok(u64::from(buf.get_i32()? as u32))
}

/// Reads four bytes at `index` as an unsigned value.
///
/// # Errors
///
/// Returns `OutOfBounds` if `index + 4` exceeds the limit.
#[inline]
pub fn get_unsigned_int_at<B: ByteBuffer + ?Sized>(buf: &B, index: usize) -> Result<u64> {
    Ok(u64::from(buf.get_i32_at(index)? as u32))
}

/// Writes the low 32 bits of `value` at the cursor and advances it by 4.
///
/// # Errors
///
/// Returns `OutOfBounds` if fewer than 4 bytes remain before the limit.
///
/// # Examples
///
/// ```
/// use bufops::prelude::*;
///
/// let mut buf = Buffer::allocate(4);
/// put_unsigned_int(&mut buf, 0x1_0000_0001)?;
/// assert_eq!(buf.as_slice(), &[0x00, 0x00, 0x00, 0x01]);
/// # Ok::<(), BufferError>(())
/// ```
#[inline]
pub fn put_unsigned_int<B: ByteBuffer + ?Sized>(buf: &mut B, value: u64) -> Result<()> {
    buf.put_i32(value as i32)
}

/// Writes the low 32 bits of `value` at `index`.
///
/// # Errors
///
/// Returns `OutOfBounds` if `index + 4` exceeds the limit.
#[inline]
pub fn put_unsigned_int_at<B: ByteBuffer + ?Sized>(
    buf: &mut B,
    index: usize,
    value: u64,
) -> Result<()> {
    buf.put_i32_at(index, value as i32)
}
