//! octets/types.rs
//! `Octets` construction, combination and inspection.

use std::fmt;
use std::sync::OnceLock;

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::sequence::{ByteSequence, Iter, SequenceBuilder, Segments};
use crate::utils::hex_preview;

const DEBUG_PREVIEW: usize = 16;

/// Immutable logical byte sequence.
#[derive(Clone, Default)]
pub struct Octets {
    pub(crate) sequence: ByteSequence,
    pub(crate) hash: OnceLock<u32>,
}

impl Octets {
    /// The empty buffer. Every zero-length `Octets` is this value.
    #[inline]
    pub const fn empty() -> Self {
        Self { sequence: ByteSequence::empty(), hash: OnceLock::new() }
    }

    /// True when this is the empty singleton.
    ///
    /// Construction normalizes every zero-length value to [`Octets::empty`], so this is
    /// the same check as [`is_empty`](Self::is_empty).
    #[inline]
    pub fn is_empty_singleton(&self) -> bool {
        self.is_empty()
    }

    pub(crate) fn from_sequence(sequence: ByteSequence) -> Self {
        if sequence.is_empty() {
            return Self::empty();
        }
        Self { sequence, hash: OnceLock::new() }
    }

    // -------------------------------------------------------------------------
    // Copying constructors
    // -------------------------------------------------------------------------

    /// Private copy of `src`.
    pub fn copy_from(src: &[u8]) -> Self {
        Self::from_sequence(ByteSequence::from(Bytes::copy_from_slice(src)))
    }

    /// Private contiguous copy of `a` followed by `b`.
    pub fn copy_from2(a: &[u8], b: &[u8]) -> Self {
        Self::copy_from_multi(&[a, b])
    }

    /// Private contiguous copy of `a`, `b`, then `c`.
    pub fn copy_from3(a: &[u8], b: &[u8], c: &[u8]) -> Self {
        Self::copy_from_multi(&[a, b, c])
    }

    /// Private contiguous copy of every part, in order.
    pub fn copy_from_multi(parts: &[&[u8]]) -> Self {
        let len = parts.iter().map(|p| p.len()).sum();
        let mut buf = BytesMut::with_capacity(len);
        for part in parts {
            buf.extend_from_slice(part);
        }
        Self::from_sequence(ByteSequence::from(buf.freeze()))
    }

    /// Private contiguous copy of a segmented source.
    pub fn copy_from_sequence(src: &ByteSequence) -> Self {
        let mut buf = BytesMut::with_capacity(src.len());
        for segment in src.segments() {
            buf.extend_from_slice(segment);
        }
        Self::from_sequence(ByteSequence::from(buf.freeze()))
    }

    // -------------------------------------------------------------------------
    // Zero-copy constructors
    // -------------------------------------------------------------------------

    /// Wrap existing storage without copying.
    ///
    /// The buffer shares memory with `src`. The caller must not arrange for that memory to change
    /// afterwards; with `Bytes` handles this holds unless the storage came from a custom owner.
    pub fn unsafe_wrap(src: impl Into<Bytes>) -> Self {
        Self::from_sequence(ByteSequence::from(src.into()))
    }

    /// Wrap a segmented view without copying.
    pub fn unsafe_wrap_sequence(src: ByteSequence) -> Self {
        Self::from_sequence(src)
    }

    // -------------------------------------------------------------------------
    // Combination
    // -------------------------------------------------------------------------

    /// `a` followed by `b`, sharing both inputs' storage.
    pub fn combine(a: &Octets, b: &Octets) -> Self {
        Self::combine_all(&[a, b])
    }

    pub fn combine3(a: &Octets, b: &Octets, c: &Octets) -> Self {
        Self::combine_all(&[a, b, c])
    }

    /// Every source in order, sharing storage. Empty sources contribute nothing.
    pub fn combine_all(sources: &[&Octets]) -> Self {
        let mut builder = SequenceBuilder::new();
        for source in sources {
            for segment in source.sequence.segments() {
                builder.push(segment.clone());
            }
        }
        Self::from_sequence(builder.build())
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.sequence.segment_count()
    }

    #[inline]
    pub fn segments(&self) -> Segments<'_> {
        self.sequence.segments()
    }

    /// The underlying segmented view.
    #[inline]
    pub fn sequence(&self) -> &ByteSequence {
        &self.sequence
    }

    /// Contiguous bytes: the single segment itself, or one new allocation of exactly `len` bytes.
    pub fn as_contiguous(&self) -> Bytes {
        if !self.sequence.is_single_segment() {
            trace!(len = self.len(), segments = self.segment_count(), "octets made contiguous");
        }
        self.sequence.compact()
    }

    /// Owned copy of the content.
    pub fn to_byte_array(&self) -> Vec<u8> {
        self.sequence.to_vec()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        self.sequence.iter()
    }
}

impl<'a> IntoIterator for &'a Octets {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.sequence.iter()
    }
}

impl From<Bytes> for Octets {
    fn from(bytes: Bytes) -> Self {
        Self::unsafe_wrap(bytes)
    }
}

impl From<Vec<u8>> for Octets {
    fn from(bytes: Vec<u8>) -> Self {
        Self::unsafe_wrap(bytes)
    }
}

impl From<&[u8]> for Octets {
    fn from(bytes: &[u8]) -> Self {
        Self::copy_from(bytes)
    }
}

impl fmt::Debug for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.sequence.slice(0, DEBUG_PREVIEW).compact();
        f.debug_struct("Octets")
            .field("len", &self.len())
            .field("segments", &self.segment_count())
            .field("bytes", &hex_preview(&head, DEBUG_PREVIEW))
            .field("truncated", &(self.len() > DEBUG_PREVIEW))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Octets {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.as_contiguous())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Octets {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <Bytes as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::unsafe_wrap(bytes))
    }
}
