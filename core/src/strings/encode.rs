//! strings/encode.rs
//!
//! Packed string encoding.

use crate::strings::types::PackedLayout;
use crate::types::{MemoryError, Result};

/// Write `value` into `dst` as a packed string.
///
/// The window is cleared, then the prefix and payload are written. `None` writes the absent
/// sentinel and nothing else.
///
/// # Errors
/// - `StringTooLarge` when the UTF-8 length exceeds the capacity (nothing is written).
/// - `BufferTooSmall` for an empty window.
pub fn write(dst: &mut [u8], value: Option<&str>) -> Result<()> {
    let layout = PackedLayout::for_window(dst.len())?;

    let payload = value.map(str::as_bytes);
    if let Some(bytes) = payload {
        if bytes.len() > layout.capacity {
            return Err(MemoryError::StringTooLarge { len: bytes.len(), capacity: layout.capacity });
        }
    }

    dst.fill(0);
    layout.write_prefix(dst, payload.map(<[u8]>::len));
    if let Some(bytes) = payload {
        let start = layout.prefix_width;
        dst[start..start + bytes.len()].copy_from_slice(bytes);
    }
    Ok(())
}
