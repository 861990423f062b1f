//! sequence/types.rs
//! `ByteSequence`: an immutable, possibly segmented byte view.

use std::fmt;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::sequence::builder::SequenceBuilder;
use crate::sequence::segment::Segment;
use crate::utils::hex_preview;

const DEBUG_PREVIEW: usize = 16;

#[derive(Clone, Default)]
enum Repr {
    #[default]
    Empty,
    Single(Bytes),
    /// At least two non-empty segments, running indexes starting at zero.
    Chain(Arc<[Segment]>),
}

/// Read-only view over one or more byte segments. Cloning is cheap.
#[derive(Clone, Default)]
pub struct ByteSequence {
    repr: Repr,
}

impl ByteSequence {
    #[inline]
    pub const fn empty() -> Self {
        Self { repr: Repr::Empty }
    }

    pub(crate) fn from_chain(segments: Vec<Segment>) -> Self {
        debug_assert!(segments.len() >= 2);
        debug_assert!(segments.iter().all(|s| !s.is_empty()));
        Self { repr: Repr::Chain(Arc::from(segments)) }
    }

    /// Total logical length.
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Empty => 0,
            Repr::Single(bytes) => bytes.len(),
            Repr::Chain(segments) => segments.last().map_or(0, Segment::end),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    /// True for the empty view and for contiguous views.
    #[inline]
    pub fn is_single_segment(&self) -> bool {
        !matches!(self.repr, Repr::Chain(_))
    }

    /// First segment's bytes (empty slice for the empty view).
    pub fn first(&self) -> &[u8] {
        match &self.repr {
            Repr::Empty => &[],
            Repr::Single(bytes) => &bytes[..],
            Repr::Chain(segments) => segments.first().map_or(&[][..], |s| &s.bytes[..]),
        }
    }

    pub fn segment_count(&self) -> usize {
        match &self.repr {
            Repr::Empty => 0,
            Repr::Single(_) => 1,
            Repr::Chain(segments) => segments.len(),
        }
    }

    /// Segments in logical order. Never yields an empty segment.
    pub fn segments(&self) -> Segments<'_> {
        let (single, chain): (Option<&Bytes>, &[Segment]) = match &self.repr {
            Repr::Empty => (None, &[][..]),
            Repr::Single(bytes) => (Some(bytes), &[][..]),
            Repr::Chain(segments) => (None, &segments[..]),
        };
        Segments { single, chain: chain.iter() }
    }

    /// Every byte in logical order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { segments: self.segments(), current: [].iter() }
    }

    /// Sub-view of `len` bytes starting at `start`. Both bounds are clamped to the view,
    /// so this never panics. Shares storage with `self`.
    pub fn slice(&self, start: usize, len: usize) -> ByteSequence {
        let total = self.len();
        let start = start.min(total);
        let end = start.saturating_add(len).min(total);
        if start == end {
            return Self::empty();
        }
        if start == 0 && end == total {
            return self.clone();
        }

        match &self.repr {
            Repr::Empty => Self::empty(),
            Repr::Single(bytes) => Self::from(bytes.slice(start..end)),
            Repr::Chain(segments) => {
                let first = segments.partition_point(|s| s.end() <= start);
                let mut builder = SequenceBuilder::new();
                for segment in &segments[first..] {
                    if segment.running_index >= end {
                        break;
                    }
                    let lo = start.saturating_sub(segment.running_index);
                    let hi = (end - segment.running_index).min(segment.len());
                    builder.push(segment.bytes.slice(lo..hi));
                }
                builder.build()
            }
        }
    }

    /// Everything from `start` to the end (clamped).
    #[inline]
    pub fn slice_from(&self, start: usize) -> ByteSequence {
        self.slice(start, usize::MAX)
    }

    /// Contiguous copy of the view. Zero-copy unless the view is segmented.
    pub fn compact(&self) -> Bytes {
        match &self.repr {
            Repr::Empty => Bytes::new(),
            Repr::Single(bytes) => bytes.clone(),
            Repr::Chain(segments) => {
                let len = self.len();
                trace!(len, segments = segments.len(), "compacting segmented view");
                let mut out = BytesMut::with_capacity(len);
                for segment in segments.iter() {
                    out.extend_from_slice(&segment.bytes);
                }
                out.freeze()
            }
        }
    }

    /// Fill `dst` from the front of the view, segment by segment.
    ///
    /// Returns `false` and leaves `dst` untouched when the view is shorter than `dst`.
    pub fn copy_to(&self, dst: &mut [u8]) -> bool {
        if self.len() < dst.len() {
            return false;
        }
        let mut filled = 0;
        for segment in self.segments() {
            if filled == dst.len() {
                break;
            }
            let take = segment.len().min(dst.len() - filled);
            dst[filled..filled + take].copy_from_slice(&segment[..take]);
            filled += take;
        }
        true
    }

    /// Owned copy of every byte.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        for segment in self.segments() {
            out.extend_from_slice(segment);
        }
        out
    }
}

impl<'a> IntoIterator for &'a ByteSequence {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl From<Bytes> for ByteSequence {
    fn from(bytes: Bytes) -> Self {
        if bytes.is_empty() {
            Self::empty()
        } else {
            Self { repr: Repr::Single(bytes) }
        }
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for ByteSequence {
    fn from(bytes: &'static [u8]) -> Self {
        Self::from(Bytes::from_static(bytes))
    }
}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.slice(0, DEBUG_PREVIEW).compact();
        f.debug_struct("ByteSequence")
            .field("len", &self.len())
            .field("segments", &self.segment_count())
            .field("head", &hex_preview(&head, DEBUG_PREVIEW))
            .finish()
    }
}

/// Iterator over the segments of a [`ByteSequence`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    single: Option<&'a Bytes>,
    chain: std::slice::Iter<'a, Segment>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a Bytes;

    fn next(&mut self) -> Option<&'a Bytes> {
        self.single.take().or_else(|| self.chain.next().map(Segment::bytes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.single.is_some()) + self.chain.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Segments<'_> {}

/// Byte iterator across segment boundaries.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    segments: Segments<'a>,
    current: std::slice::Iter<'a, u8>,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            if let Some(&b) = self.current.next() {
                return Some(b);
            }
            self.current = self.segments.next()?.iter();
        }
    }
}
