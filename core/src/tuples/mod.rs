//! tuples/mod.rs
//! Fixed tuples of same-width integers and the stateless span codecs.
//!
//! Wire layout: fields are concatenated in declaration order at the requested width and
//! byte order, e.g. `PairOfInt32(1, 2)` big-endian is `00 00 00 01 00 00 00 02`.

pub mod types;
pub mod codec;

pub use types::*;
pub use codec::*;
