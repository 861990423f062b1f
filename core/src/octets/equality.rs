//! octets/equality.rs
//!
//! Content equality and hashing.
//!
//! Design notes:
//! - Two buffers compare equal when their logical bytes match, however each one is segmented.
//!   The comparison walks both segment lists in lock step without allocating.
//! - The hash is CRC-32 over the little-endian u64 length followed by every byte. It is computed
//!   on first use and cached; concurrent first calls may all compute it, and all store the same value.

use std::hash::{Hash, Hasher};

use crc32fast::Hasher as Crc32;

use crate::octets::types::Octets;

impl Octets {
    /// Content hash, cached after the first call.
    pub fn content_hash(&self) -> u32 {
        *self.hash.get_or_init(|| {
            let mut crc = Crc32::new();
            crc.update(&(self.len() as u64).to_le_bytes());
            for segment in self.segments() {
                crc.update(segment);
            }
            crc.finalize()
        })
    }
}

impl PartialEq for Octets {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut left = self.segments().map(|s| &s[..]);
        let mut right = other.segments().map(|s| &s[..]);
        let mut a: &[u8] = &[];
        let mut b: &[u8] = &[];

        loop {
            if a.is_empty() {
                a = match left.next() {
                    Some(next) => next,
                    None => return b.is_empty() && right.next().is_none(),
                };
            }
            if b.is_empty() {
                b = match right.next() {
                    Some(next) => next,
                    None => return false,
                };
            }
            let n = a.len().min(b.len());
            if a[..n] != b[..n] {
                return false;
            }
            a = &a[n..];
            b = &b[n..];
        }
    }
}

impl Eq for Octets {}

impl Hash for Octets {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.content_hash());
    }
}
