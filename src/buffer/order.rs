// src/buffer/order.rs
//! Byte order used by a buffer's multi-byte accessors

/// Byte order applied to 2- and 4-byte reads and writes.
///
/// Defaults to [`BigEndian`](ByteOrder::BigEndian), network order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most significant byte first
    #[default]
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    /// Returns the byte order of the target platform.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    #[inline]
    pub(crate) fn decode_i16(self, bytes: [u8; 2]) -> i16 {
        match self {
            Self::BigEndian => i16::from_be_bytes(bytes),
            Self::LittleEndian => i16::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub(crate) fn encode_i16(self, val: i16) -> [u8; 2] {
        match self {
            Self::BigEndian => val.to_be_bytes(),
            Self::LittleEndian => val.to_le_bytes(),
        }
    }

    #[inline]
    pub(crate) fn decode_i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            Self::BigEndian => i32::from_be_bytes(bytes),
            Self::LittleEndian => i32::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub(crate) fn encode_i32(self, val: i32) -> [u8; 4] {
        match self {
            Self::BigEndian => val.to_be_bytes(),
            Self::LittleEndian => val.to_le_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_big_endian() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }

    #[test]
    fn test_encode_i16() {
        assert_eq!(ByteOrder::BigEndian.encode_i16(0x0102), [0x01, 0x02]);
        assert_eq!(ByteOrder::LittleEndian.encode_i16(0x0102), [0x02, 0x01]);
    }

    #[test]
    fn test_decode_i32() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(ByteOrder::BigEndian.decode_i32(bytes), 0x0102_0304);
        assert_eq!(ByteOrder::LittleEndian.decode_i32(bytes), 0x0403_0201);
    }

    #[test]
    fn test_native() {
        #[cfg(target_endian = "little")]
        assert_eq!(ByteOrder::native(), ByteOrder::LittleEndian);
        #[cfg(target_endian = "big")]
        assert_eq!(ByteOrder::native(), ByteOrder::BigEndian);
    }
}
