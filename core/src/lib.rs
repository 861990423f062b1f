//! blockmem-core
//!
//! Binary memory model: fixed-size byte blocks with endian-aware typed views,
//! packed strings, tuple codecs, and immutable segmented byte buffers.
//! Pure Rust, no I/O, no unsafe.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Value encodings
pub mod endian;
pub mod strings;
pub mod tuples;
pub mod bits;

// Fixed blocks
pub mod block;

// Segmented buffers
pub mod sequence;
pub mod octets;

pub use types::{MemoryError, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::bits::Bits32;
    pub use crate::block::{
        Block, BlockB001, BlockB002, BlockB004, BlockB008, BlockB016, BlockB032, BlockB064,
        BlockB128, BlockB256, BlockB512, BlockK001, BlockK002, BlockK004, BlockK008,
    };
    pub use crate::endian::{BigEndian, ByteOrder, EndianValue, LittleEndian};
    pub use crate::octets::Octets;
    pub use crate::sequence::{ByteSequence, SequenceBuilder};
    pub use crate::tuples::{
        Codec, PackedStringCodec, PairOfInt16, PairOfInt32, PairOfInt64, QuadOfInt16,
        QuadOfInt32, QuadOfInt64, SpanCodec,
    };
    pub use crate::types::{MemoryError, Result};
}
