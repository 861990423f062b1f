//! constants.rs
//! Compile-time layout configuration shared by blocks, strings and octets.

/// Smallest block size in bytes.
pub const MIN_BLOCK_SIZE: usize = 1;
/// Largest block size in bytes (8 KiB).
pub const MAX_BLOCK_SIZE: usize = 8 * 1024;

/// Every supported block size, smallest first. Each entry is twice the previous one.
pub const BLOCK_SIZES: &[usize] = &[
    1, 2, 4, 8, 16, 32, 64, 128, 256, 512, // bytes
    1024,     // 1 KiB
    2 * 1024, // 2 KiB
    4 * 1024, // 4 KiB
    8 * 1024, // 8 KiB
];

/// Width of the machine word used for block equality, hashing and emptiness checks.
pub const WORD_SIZE: usize = 8;

/// Packed string layout.
pub mod packed_string {
    /// Windows up to this many bytes carry a 1-byte length prefix; larger windows a 2-byte LE prefix.
    pub const SHORT_PREFIX_MAX_WINDOW: usize = 256;

    pub const SHORT_PREFIX_WIDTH: usize = 1;
    pub const LONG_PREFIX_WIDTH: usize = 2;

    /// Length prefix marking an absent (`None`) string in the 1-byte form.
    pub const SHORT_ABSENT: u8 = 0xFF;
    /// Length prefix marking an absent (`None`) string in the 2-byte form.
    pub const LONG_ABSENT: u16 = 0xFFFF;
}

/// Returns true when `size` is one of [`BLOCK_SIZES`].
#[inline]
pub const fn is_valid_block_size(size: usize) -> bool {
    size.is_power_of_two() && size >= MIN_BLOCK_SIZE && size <= MAX_BLOCK_SIZE
}
