//! octets/mod.rs
//! Immutable, possibly segmented byte buffers with value semantics.
//!
//! Notes:
//! - Equality and hashing look only at the logical bytes; how the buffer is split into segments
//!   is never observable through `==` or `Hash`.
//! - Copying constructors (`copy_from*`) own a private contiguous copy. Wrapping constructors
//!   (`unsafe_wrap*`) and every combine/slice operation share storage with their inputs.
//! - `bytes::Bytes` is immutable once frozen, so a wrapped buffer cannot change under an `Octets`
//!   from safe code. A producer that keeps a `BytesMut` and splits it again gets disjoint memory.
//! - Every zero-length result is the empty singleton.

pub mod types;
pub mod slicing;
pub mod equality;

pub use types::*;
