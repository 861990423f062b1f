//! strings/decode.rs
//!
//! Packed string decoding.
//!
//! Design notes:
//! - The whole window is the field; the prefix width depends only on its length.
//! - A prefix larger than the capacity can never come from `write`, so it is reported as corruption.
//! - `write(None)` zeroes everything after the sentinel; a sentinel followed by data is corrupt.
//! - `read_str` borrows from the window and never allocates.

use tracing::debug;

use crate::strings::types::PackedLayout;
use crate::types::{MemoryError, Result};

/// Borrow the packed string stored in `src`.
///
/// # Returns
/// - `Ok(None)` for the absent sentinel with every following byte zero.
/// - `Ok(Some(""))` for a zero length prefix.
/// - `Err(CorruptLength)` / `Err(CorruptPayload)` for data not produced by [`write`](crate::strings::write).
pub fn read_str(src: &[u8]) -> Result<Option<&str>> {
    let layout = PackedLayout::for_window(src.len())?;

    let len = match layout.read_prefix(src) {
        None if src[layout.prefix_width..].iter().all(|&b| b == 0) => return Ok(None),
        None => {
            let len = layout.absent_marker();
            debug!(window = layout.window, len, "absent marker followed by payload bytes");
            return Err(MemoryError::CorruptLength { len, capacity: layout.capacity });
        }
        Some(len) => len,
    };

    if len > layout.capacity {
        debug!(window = layout.window, len, capacity = layout.capacity, "packed string prefix out of range");
        return Err(MemoryError::CorruptLength { len, capacity: layout.capacity });
    }

    let start = layout.prefix_width;
    let payload = &src[start..start + len];
    match std::str::from_utf8(payload) {
        Ok(s) => Ok(Some(s)),
        Err(e) => {
            debug!(window = layout.window, len, "packed string payload is not UTF-8");
            Err(MemoryError::CorruptPayload(e))
        }
    }
}

/// Owned variant of [`read_str`].
#[inline]
pub fn read(src: &[u8]) -> Result<Option<String>> {
    read_str(src).map(|s| s.map(str::to_owned))
}
