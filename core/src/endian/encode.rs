//! endian/encode.rs
//!
//! Scalar encoding helpers, mirror of `decode.rs`.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::endian::types::EndianValue;
use crate::types::{MemoryError, Result};

/// Encode `value` little-endian into the first `T::WIDTH` bytes of `dst`.
///
/// # Panics
/// If `dst` is shorter than `T::WIDTH`.
#[inline]
pub fn encode_le<T: EndianValue>(dst: &mut [u8], value: T) {
    value.encode::<LittleEndian>(dst)
}

/// Encode `value` big-endian into the first `T::WIDTH` bytes of `dst`.
///
/// # Panics
/// If `dst` is shorter than `T::WIDTH`.
#[inline]
pub fn encode_be<T: EndianValue>(dst: &mut [u8], value: T) {
    value.encode::<BigEndian>(dst)
}

/// Checked encode; short windows return `BufferTooSmall` and leave `dst` untouched.
#[inline]
pub fn try_encode<T: EndianValue, B: ByteOrder>(dst: &mut [u8], value: T) -> Result<()> {
    if dst.len() < T::WIDTH {
        return Err(MemoryError::BufferTooSmall { have: dst.len(), need: T::WIDTH });
    }
    value.encode::<B>(dst);
    Ok(())
}

/// Encode every value of `src` consecutively at the front of `dst`.
/// Bytes past `src.len() * T::WIDTH` are left untouched.
#[inline]
pub fn encode_slice_into<T: EndianValue, B: ByteOrder>(src: &[T], dst: &mut [u8]) {
    debug_assert!(dst.len() >= src.len() * T::WIDTH, "encode_slice_into: short target");
    for (value, chunk) in src.iter().zip(dst.chunks_exact_mut(T::WIDTH)) {
        value.encode::<B>(chunk);
    }
}
