//! bits.rs
//! Immutable 32-bit bit set.

use std::fmt;

use byteorder::ByteOrder;

use crate::endian::EndianValue;
use crate::types::{MemoryError, Result};

/// A `u32` addressed bit by bit. Every update returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bits32 {
    pub data: u32,
}

impl Bits32 {
    pub const MAX_INDEX: usize = 31;

    #[inline]
    pub const fn new(data: u32) -> Self {
        Self { data }
    }

    pub fn get_bit(&self, index: usize) -> Result<bool> {
        let mask = Self::mask(index)?;
        Ok(self.data & mask != 0)
    }

    pub fn set_bit(&self, index: usize, value: bool) -> Result<Self> {
        let mask = Self::mask(index)?;
        let data = if value { self.data | mask } else { self.data & !mask };
        Ok(Self { data })
    }

    fn mask(index: usize) -> Result<u32> {
        if index > Self::MAX_INDEX {
            return Err(MemoryError::OutOfRange { index, max: Self::MAX_INDEX });
        }
        Ok(1u32 << index)
    }
}

impl From<u32> for Bits32 {
    fn from(data: u32) -> Self {
        Self { data }
    }
}

impl fmt::Display for Bits32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.data)
    }
}

impl EndianValue for Bits32 {
    const WIDTH: usize = 4;

    #[inline]
    fn decode<B: ByteOrder>(src: &[u8]) -> Self {
        Self { data: B::read_u32(src) }
    }

    #[inline]
    fn encode<B: ByteOrder>(self, dst: &mut [u8]) {
        B::write_u32(dst, self.data)
    }
}
