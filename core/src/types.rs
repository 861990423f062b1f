//! types.rs
//! Crate-wide error type.
//!
//! Failure classes:
//! - Capacity failures on block copies are signalled with `bool` (try-pattern), never with this type.
//! - Checked codecs report short windows as `BufferTooSmall`.
//! - Oversized requests (arrays, strings) are caller bugs and carry a human-readable "too short/small" message.
//! - Corrupt packed-string prefixes or payloads can only come from data this crate did not write.

use std::str::Utf8Error;

use thiserror::Error;

/// Unified error for blocks, codecs, strings and bit sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Byte window shorter than the value being read or written.
    #[error("buffer too small: {have} < {need}")]
    BufferTooSmall { have: usize, need: usize },

    /// Array accessor asked for more scalars than the block holds.
    #[error("{what} is too short: requested {requested} bytes, block holds {capacity}")]
    ArrayTooLarge {
        what: &'static str,
        requested: usize,
        capacity: usize,
    },

    /// UTF-8 encoding of the string does not fit the packed payload.
    #[error("The output byte buffer is too small to contain the encoded data: {len} > {capacity}")]
    StringTooLarge { len: usize, capacity: usize },

    /// Packed-string length prefix exceeds the payload capacity.
    #[error("corrupt string length: {len} > {capacity}")]
    CorruptLength { len: usize, capacity: usize },

    /// Packed-string payload is not valid UTF-8.
    #[error("corrupt string payload: {0}")]
    CorruptPayload(#[from] Utf8Error),

    /// Bit index outside the addressable range.
    #[error("index {index} out of range 0..={max}")]
    OutOfRange { index: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, MemoryError>;
