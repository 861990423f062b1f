//! sequence/mod.rs
//! Segmented, read-only byte views and the builder that assembles them.
//!
//! Notes:
//! - Segments are `bytes::Bytes` handles, so building or slicing a view never copies payload bytes.
//! - A multi-segment view is an ordered chain of non-empty segments; each segment records the
//!   logical offset of its first byte (its running index). The chain is stored contiguously,
//!   segment `i + 1` is the successor of segment `i`.
//! - Zero-length segments are dropped at construction time.

pub mod segment;
pub mod types;
pub mod builder;

pub use segment::*;
pub use types::*;
pub use builder::*;
