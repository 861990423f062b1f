//! sequence/builder.rs
//!
//! Append-only assembly of a `ByteSequence`.
//!
//! Design notes:
//! - `append` consumes the builder and returns the extended one, so chains read left to right:
//!   `SequenceBuilder::new().append(a).append(b).build()`.
//! - Running offsets are assigned as segments arrive; `build` never has to walk the chain again.

use bytes::Bytes;

use crate::sequence::segment::Segment;
use crate::sequence::types::ByteSequence;

#[derive(Debug, Clone, Default)]
pub struct SequenceBuilder {
    segments: Vec<Segment>,
    len: usize,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder holding a single segment.
    pub fn with_segment(segment: impl Into<Bytes>) -> Self {
        Self::new().append(segment)
    }

    /// Builder holding every segment of `segments`, in order.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Bytes>,
    {
        let mut builder = Self::new();
        for segment in segments {
            builder.push(segment);
        }
        builder
    }

    /// Returns the builder extended by `segment`. Zero-length segments are dropped.
    #[must_use]
    pub fn append(mut self, segment: impl Into<Bytes>) -> Self {
        self.push(segment);
        self
    }

    /// In-place form of [`append`](Self::append).
    pub fn push(&mut self, segment: impl Into<Bytes>) {
        let bytes = segment.into();
        if bytes.is_empty() {
            return;
        }
        let running_index = self.len;
        self.len += bytes.len();
        self.segments.push(Segment { bytes, running_index });
    }

    /// Number of (non-empty) segments appended so far.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total bytes appended so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Finish the view: no segments gives the empty view, one segment a contiguous view,
    /// anything more a chain with running offsets.
    pub fn build(mut self) -> ByteSequence {
        match self.segments.len() {
            0 => ByteSequence::empty(),
            1 => match self.segments.pop() {
                Some(segment) => ByteSequence::from(segment.bytes),
                None => ByteSequence::empty(),
            },
            _ => ByteSequence::from_chain(self.segments),
        }
    }
}
