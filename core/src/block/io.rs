//! block/io.rs
//!
//! Copying blocks in and out of buffers, plus the whole-block string view.
//!
//! Design notes:
//! - `try_*` copies report capacity failures with `false` and never touch the target on failure.
//! - `write_to` / `write_range_to` are the unchecked forms; a short target panics like slice indexing.

use tracing::debug;

use crate::block::types::Block;
use crate::constants::WORD_SIZE;
use crate::sequence::ByteSequence;
use crate::strings;
use crate::types::Result;
use crate::utils::to_base64;

impl<const N: usize> Block<N> {
    /// Copy the first `N` bytes of `src` into the block.
    pub fn try_read(&mut self, src: &[u8]) -> bool {
        if src.len() < N {
            return false;
        }
        self.bytes.copy_from_slice(&src[..N]);
        true
    }

    /// Copy the first `N` bytes of a possibly segmented source into the block.
    pub fn try_read_sequence(&mut self, src: &ByteSequence) -> bool {
        if src.is_single_segment() {
            return self.try_read(src.first());
        }
        if !src.copy_to(&mut self.bytes) {
            debug!(
                block = N,
                available = src.len(),
                segments = src.segment_count(),
                "segmented source too short for block"
            );
            return false;
        }
        true
    }

    /// Copy the block into the front of `dst`.
    pub fn try_write(&self, dst: &mut [u8]) -> bool {
        if dst.len() < N {
            return false;
        }
        dst[..N].copy_from_slice(&self.bytes);
        true
    }

    /// # Panics
    /// If `dst` is shorter than `N`.
    #[inline]
    pub fn write_to(&self, dst: &mut [u8]) {
        dst[..N].copy_from_slice(&self.bytes);
    }

    /// Copy bytes `[start, start + len)` of the block into the front of `dst`.
    ///
    /// # Panics
    /// If the range leaves the block or `dst` is shorter than `len`.
    #[inline]
    pub fn write_range_to(&self, start: usize, len: usize, dst: &mut [u8]) {
        dst[..len].copy_from_slice(&self.bytes[start..start + len]);
    }

    pub fn to_base64(&self) -> String {
        to_base64(&self.bytes)
    }

    /// # Panics
    /// If the range leaves the block.
    pub fn to_base64_range(&self, start: usize, len: usize) -> String {
        to_base64(&self.bytes[start..start + len])
    }

    pub fn to_byte_array(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// # Panics
    /// If the range leaves the block.
    pub fn to_byte_array_range(&self, start: usize, len: usize) -> Vec<u8> {
        self.bytes[start..start + len].to_vec()
    }

    /// True when every byte is zero.
    pub fn is_empty(&self) -> bool {
        if N >= WORD_SIZE {
            self.words().all(|w| w == 0)
        } else {
            self.bytes.iter().all(|&b| b == 0)
        }
    }

    /// The packed string stored across the whole block.
    pub fn utf8_string(&self) -> Result<Option<String>> {
        strings::read(&self.bytes)
    }

    /// Borrowing form of [`utf8_string`](Self::utf8_string).
    pub fn utf8_str(&self) -> Result<Option<&str>> {
        strings::read_str(&self.bytes)
    }

    /// Replace the block content with a packed string. On error the block is unchanged.
    pub fn set_utf8_string(&mut self, value: Option<&str>) -> Result<()> {
        strings::write(&mut self.bytes, value)
    }
}
