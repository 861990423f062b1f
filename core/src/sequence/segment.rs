use bytes::Bytes;

/// One contiguous piece of a multi-segment view.
#[derive(Debug, Clone)]
pub struct Segment {
    pub(crate) bytes: Bytes,
    pub(crate) running_index: usize,
}

impl Segment {
    /// Storage handle for this segment.
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Logical offset of the first byte of this segment.
    #[inline]
    pub fn running_index(&self) -> usize {
        self.running_index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Logical offset one past the last byte of this segment.
    #[inline]
    pub fn end(&self) -> usize {
        self.running_index + self.bytes.len()
    }
}
