//! octets/slicing.rs
//!
//! Zero-copy head / body / tail decomposition.
//!
//! Clamping rules:
//! - `get_head(n)` with `n > len` gives `(whole, empty)`.
//! - `get_tail(n)` with `n > len` gives `(empty, whole)`.
//! - Composite slicers apply the rules above step by step, so the returned lengths can be
//!   shorter than requested. Nothing signals that; check `len()` when it matters.

use crate::octets::types::Octets;

impl Octets {
    /// Split after the first `head_len` bytes: `(head, rest)`.
    pub fn get_head(&self, head_len: usize) -> (Octets, Octets) {
        (
            Self::from_sequence(self.sequence.slice(0, head_len)),
            Self::from_sequence(self.sequence.slice_from(head_len)),
        )
    }

    /// Split before the last `tail_len` bytes: `(rest, tail)`.
    pub fn get_tail(&self, tail_len: usize) -> (Octets, Octets) {
        let rest_len = self.len().saturating_sub(tail_len);
        self.get_head(rest_len)
    }

    /// `(head, body, tail)` where `body` is the `body_len` bytes after the head.
    pub fn get_head_and_body(&self, head_len: usize, body_len: usize) -> (Octets, Octets, Octets) {
        let (head, rest) = self.get_head(head_len);
        let (body, tail) = rest.get_head(body_len);
        (head, body, tail)
    }

    /// `(head, body, tail)` where `tail` is the last `tail_len` bytes after the head.
    pub fn get_head_and_tail(&self, head_len: usize, tail_len: usize) -> (Octets, Octets, Octets) {
        let (head, rest) = self.get_head(head_len);
        let (body, tail) = rest.get_tail(tail_len);
        (head, body, tail)
    }

    /// Older three-way split, kept for existing callers. Same result as
    /// [`get_head_and_body`](Self::get_head_and_body).
    #[deprecated(note = "use get_head_and_body or get_head_and_tail")]
    pub fn get_head_body_tail(&self, head_len: usize, body_len: usize) -> (Octets, Octets, Octets) {
        let body_start = head_len.saturating_add(body_len);
        (
            Self::from_sequence(self.sequence.slice(0, head_len)),
            Self::from_sequence(self.sequence.slice(head_len, body_len)),
            Self::from_sequence(self.sequence.slice_from(body_start)),
        )
    }
}
