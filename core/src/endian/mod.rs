//! endian/mod.rs
//! Endian-aware scalar views over raw bytes.
//!
//! Notes:
//! - Every multi-byte value is read and written with an explicit byte order; there is no
//!   platform-dependent path.
//! - Floats go through `to_bits`/`from_bits`, so every IEEE-754 bit pattern (signed zero,
//!   infinities, NaN payloads) survives a round trip unchanged.
//! - UUIDs are converted field by field (u32, u16, u16, then 8 raw bytes), never by reversing
//!   the whole 16-byte buffer.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;

pub use byteorder::{BigEndian, ByteOrder, LittleEndian};
