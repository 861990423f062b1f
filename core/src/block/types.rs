//! block/types.rs
//! `Block<N>`, the size aliases and the half-block pairing.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::size_of;

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{is_valid_block_size, WORD_SIZE};
use crate::utils::hex_preview;

const DEBUG_PREVIEW: usize = 32;

/// `N` raw bytes with typed views.
///
/// Only the sizes listed in [`BLOCK_SIZES`](crate::constants::BLOCK_SIZES) can be
/// instantiated; any other `N` fails to compile.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Block<const N: usize> {
    pub(crate) bytes: [u8; N],
}

impl<const N: usize> Block<N> {
    const VALID: () = assert!(
        is_valid_block_size(N),
        "block size must be a power of two between 1 and 8192 bytes"
    );

    /// Size of the block in bytes.
    pub const SIZE: usize = N;

    /// Zeroed block.
    #[inline]
    pub const fn new() -> Self {
        let () = Self::VALID;
        Self { bytes: [0u8; N] }
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        let () = Self::VALID;
        Self { bytes }
    }

    #[inline]
    pub const fn block_size(&self) -> usize {
        N
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }

    #[inline]
    pub const fn into_bytes(self) -> [u8; N] {
        self.bytes
    }

    /// Content as little-endian machine words. Empty for blocks under one word.
    #[inline]
    pub(crate) fn words(&self) -> impl Iterator<Item = u64> + '_ {
        self.bytes.chunks_exact(WORD_SIZE).map(LittleEndian::read_u64)
    }
}

impl<const N: usize> Default for Block<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[u8; N]> for Block<N> {
    #[inline]
    fn from(bytes: [u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Block<N> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> AsMut<[u8]> for Block<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl<const N: usize> PartialEq for Block<N> {
    fn eq(&self, other: &Self) -> bool {
        if N >= WORD_SIZE {
            self.words().eq(other.words())
        } else {
            self.bytes == other.bytes
        }
    }
}

impl<const N: usize> Eq for Block<N> {}

impl<const N: usize> Hash for Block<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(N);
        if N >= WORD_SIZE {
            for word in self.words() {
                state.write_u64(word);
            }
        } else {
            state.write(&self.bytes);
        }
    }
}

impl<const N: usize> fmt::Debug for Block<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("size", &N)
            .field("bytes", &hex_preview(&self.bytes, DEBUG_PREVIEW))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Block<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.bytes)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Block<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
        let bytes: [u8; N] = bytes.try_into().map_err(|v: Vec<u8>| {
            <D::Error as serde::de::Error>::invalid_length(v.len(), &"exactly the block size in bytes")
        })?;
        Ok(Self::from_bytes(bytes))
    }
}

// -----------------------------------------------------------------------------
// Size aliases
// -----------------------------------------------------------------------------

pub type BlockB001 = Block<1>;
pub type BlockB002 = Block<2>;
pub type BlockB004 = Block<4>;
pub type BlockB008 = Block<8>;
pub type BlockB016 = Block<16>;
pub type BlockB032 = Block<32>;
pub type BlockB064 = Block<64>;
pub type BlockB128 = Block<128>;
pub type BlockB256 = Block<256>;
pub type BlockB512 = Block<512>;
pub type BlockK001 = Block<1024>;
pub type BlockK002 = Block<2048>;
pub type BlockK004 = Block<4096>;
pub type BlockK008 = Block<8192>;

const _: () = {
    assert!(size_of::<BlockB001>() == 1);
    assert!(size_of::<BlockB002>() == 2);
    assert!(size_of::<BlockB004>() == 4);
    assert!(size_of::<BlockB008>() == 8);
    assert!(size_of::<BlockB016>() == 16);
    assert!(size_of::<BlockB032>() == 32);
    assert!(size_of::<BlockB064>() == 64);
    assert!(size_of::<BlockB128>() == 128);
    assert!(size_of::<BlockB256>() == 256);
    assert!(size_of::<BlockB512>() == 512);
    assert!(size_of::<BlockK001>() == 1024);
    assert!(size_of::<BlockK002>() == 2048);
    assert!(size_of::<BlockK004>() == 4096);
    assert!(size_of::<BlockK008>() == 8192);
};

// -----------------------------------------------------------------------------
// Halves
// -----------------------------------------------------------------------------

macro_rules! impl_halves {
    ($($n:literal => $h:literal),* $(,)?) => {$(
        impl Block<$n> {
            /// First half, bytes `[0, N/2)`.
            #[inline]
            pub fn a(&self) -> Block<$h> {
                let mut half = Block::<$h>::new();
                half.bytes.copy_from_slice(&self.bytes[..$h]);
                half
            }

            /// Second half, bytes `[N/2, N)`.
            #[inline]
            pub fn b(&self) -> Block<$h> {
                let mut half = Block::<$h>::new();
                half.bytes.copy_from_slice(&self.bytes[$h..]);
                half
            }

            #[inline]
            pub fn set_a(&mut self, half: Block<$h>) {
                self.bytes[..$h].copy_from_slice(&half.bytes);
            }

            #[inline]
            pub fn set_b(&mut self, half: Block<$h>) {
                self.bytes[$h..].copy_from_slice(&half.bytes);
            }

            pub fn from_halves(a: Block<$h>, b: Block<$h>) -> Self {
                let mut block = Self::new();
                block.set_a(a);
                block.set_b(b);
                block
            }
        }
    )*};
}

impl_halves! {
    2 => 1,
    4 => 2,
    8 => 4,
    16 => 8,
    32 => 16,
    64 => 32,
    128 => 64,
    256 => 128,
    512 => 256,
    1024 => 512,
    2048 => 1024,
    4096 => 2048,
    8192 => 4096,
}
