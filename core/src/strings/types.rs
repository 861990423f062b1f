//! strings/types.rs
//! Prefix layout of a packed string window.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::packed_string::{
    LONG_ABSENT, LONG_PREFIX_WIDTH, SHORT_ABSENT, SHORT_PREFIX_MAX_WINDOW, SHORT_PREFIX_WIDTH,
};
use crate::types::{MemoryError, Result};

/// Resolved layout for one window length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedLayout {
    /// Total window length in bytes.
    pub window: usize,
    /// 1 or 2.
    pub prefix_width: usize,
    /// Largest payload (in UTF-8 bytes) that can be stored.
    pub capacity: usize,
}

impl PackedLayout {
    /// Layout for a window of `window` bytes.
    /// A zero-length window cannot hold a prefix and is rejected.
    pub fn for_window(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MemoryError::BufferTooSmall { have: 0, need: SHORT_PREFIX_WIDTH });
        }
        let (prefix_width, max_len) = if window <= SHORT_PREFIX_MAX_WINDOW {
            (SHORT_PREFIX_WIDTH, SHORT_ABSENT as usize - 1)
        } else {
            (LONG_PREFIX_WIDTH, LONG_ABSENT as usize - 1)
        };
        Ok(Self {
            window,
            prefix_width,
            capacity: (window - prefix_width).min(max_len),
        })
    }

    /// True when the layout uses the 2-byte prefix.
    #[inline]
    pub fn is_long(&self) -> bool {
        self.prefix_width == LONG_PREFIX_WIDTH
    }

    /// Raw value of the absent sentinel for this prefix width.
    #[inline]
    pub(crate) fn absent_marker(&self) -> usize {
        if self.is_long() {
            LONG_ABSENT as usize
        } else {
            SHORT_ABSENT as usize
        }
    }

    /// Raw prefix value, `None` for the absent sentinel.
    pub(crate) fn read_prefix(&self, src: &[u8]) -> Option<usize> {
        if self.is_long() {
            match LittleEndian::read_u16(&src[..LONG_PREFIX_WIDTH]) {
                LONG_ABSENT => None,
                len => Some(len as usize),
            }
        } else {
            match src[0] {
                SHORT_ABSENT => None,
                len => Some(len as usize),
            }
        }
    }

    /// Write the prefix for `len` (or the absent sentinel). `len` must already fit `capacity`.
    pub(crate) fn write_prefix(&self, dst: &mut [u8], len: Option<usize>) {
        debug_assert!(len.map_or(true, |l| l <= self.capacity));
        if self.is_long() {
            let raw = len.map_or(LONG_ABSENT, |l| l as u16);
            LittleEndian::write_u16(&mut dst[..LONG_PREFIX_WIDTH], raw);
        } else {
            dst[0] = len.map_or(SHORT_ABSENT, |l| l as u8);
        }
    }
}

/// Prefix width used for a window of `window` bytes.
#[inline]
pub fn prefix_width(window: usize) -> usize {
    if window <= SHORT_PREFIX_MAX_WINDOW {
        SHORT_PREFIX_WIDTH
    } else {
        LONG_PREFIX_WIDTH
    }
}

/// Payload capacity of a window of `window` bytes (0 for an empty window).
#[inline]
pub fn capacity(window: usize) -> usize {
    PackedLayout::for_window(window).map_or(0, |l| l.capacity)
}
