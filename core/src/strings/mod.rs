//! strings/mod.rs
//! Packed, length-prefixed UTF-8 strings stored inside a fixed byte window.
//!
//! Layout notes:
//! - Windows of up to 256 bytes: `[len:u8][payload][zero padding]`.
//! - Larger windows: `[len:u16 LE][payload][zero padding]`.
//! - An all-ones prefix (`0xFF` / `0xFFFF`) marks an absent string; the rest of the window is zero.
//! - Writes never truncate: a payload that does not fit is an error.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
