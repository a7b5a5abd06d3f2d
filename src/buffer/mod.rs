// src/buffer/mod.rs
//! Position-tracked byte buffer and the contract the ops functions depend on

pub mod core;
pub mod order;
pub mod traits;

pub use self::core::Buffer;
pub use order::ByteOrder;
pub use traits::ByteBuffer;
