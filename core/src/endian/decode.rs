//! endian/decode.rs
//!
//! Scalar decoding helpers.
//!
//! Design notes:
//! - `decode_le` / `decode_be` are total over exactly `T::WIDTH` bytes.
//! - `try_decode` is the checked form for windows of unknown length.
//! - `decode_slice_into` backs the block array accessors; the caller has already validated sizes.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::endian::types::EndianValue;
use crate::types::{MemoryError, Result};

/// Decode a little-endian `T` from the first `T::WIDTH` bytes of `src`.
///
/// # Panics
/// If `src` is shorter than `T::WIDTH`.
#[inline]
pub fn decode_le<T: EndianValue>(src: &[u8]) -> T {
    T::decode::<LittleEndian>(src)
}

/// Decode a big-endian `T` from the first `T::WIDTH` bytes of `src`.
///
/// # Panics
/// If `src` is shorter than `T::WIDTH`.
#[inline]
pub fn decode_be<T: EndianValue>(src: &[u8]) -> T {
    T::decode::<BigEndian>(src)
}

/// Checked decode; short windows return `BufferTooSmall`.
#[inline]
pub fn try_decode<T: EndianValue, B: ByteOrder>(src: &[u8]) -> Result<T> {
    if src.len() < T::WIDTH {
        return Err(MemoryError::BufferTooSmall { have: src.len(), need: T::WIDTH });
    }
    Ok(T::decode::<B>(src))
}

/// Decode `dst.len()` consecutive values from the front of `src`.
///
/// # Panics
/// If `src` holds fewer than `dst.len() * T::WIDTH` bytes.
#[inline]
pub fn decode_slice_into<T: EndianValue, B: ByteOrder>(src: &[u8], dst: &mut [T]) {
    debug_assert!(src.len() >= dst.len() * T::WIDTH, "decode_slice_into: short source");
    for (value, chunk) in dst.iter_mut().zip(src.chunks_exact(T::WIDTH)) {
        *value = T::decode::<B>(chunk);
    }
}
