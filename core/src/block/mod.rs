//! block/mod.rs
//! Fixed-size byte blocks and their typed views.
//!
//! Layout notes:
//! - A block is exactly its bytes: `size_of::<Block<N>>() == N`, no header, no padding.
//! - Every size from 1 B to 8 KiB is a power of two; block N splits into halves A = `[0, N/2)`
//!   and B = `[N/2, N)`, each a block of size N/2.
//! - Typed views (integers, floats, UUIDs, tuples, packed strings) are functions over the one
//!   byte array, so a write through any view is visible through every other view.
//! - Multi-byte views always name their byte order (`_le` / `_be`); nothing depends on the host.

pub mod types;
pub mod io;
pub mod views;
pub mod arrays;

pub use types::*;
