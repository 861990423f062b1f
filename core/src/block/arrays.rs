//! block/arrays.rs
//! Arrays of scalars laid out from the start of the block.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::debug;

use crate::block::types::Block;
use crate::endian::{decode_slice_into, encode_slice_into, EndianValue};
use crate::types::{MemoryError, Result};

impl<const N: usize> Block<N> {
    /// Fill `dst` with little-endian values from the front of the block.
    pub fn get_array_le<T: EndianValue>(&self, dst: &mut [T]) -> Result<()> {
        self.get_array::<T, LittleEndian>(dst)
    }

    /// Fill `dst` with big-endian values from the front of the block.
    pub fn get_array_be<T: EndianValue>(&self, dst: &mut [T]) -> Result<()> {
        self.get_array::<T, BigEndian>(dst)
    }

    /// Store `src` little-endian at the front of the block. Bytes past the array keep their value.
    pub fn set_array_le<T: EndianValue>(&mut self, src: &[T]) -> Result<()> {
        self.set_array::<T, LittleEndian>(src)
    }

    /// Store `src` big-endian at the front of the block. Bytes past the array keep their value.
    pub fn set_array_be<T: EndianValue>(&mut self, src: &[T]) -> Result<()> {
        self.set_array::<T, BigEndian>(src)
    }

    fn get_array<T: EndianValue, B: ByteOrder>(&self, dst: &mut [T]) -> Result<()> {
        let requested = Self::checked_array_len::<T>("Destination", dst.len())?;
        decode_slice_into::<T, B>(&self.bytes[..requested], dst);
        Ok(())
    }

    fn set_array<T: EndianValue, B: ByteOrder>(&mut self, src: &[T]) -> Result<()> {
        let requested = Self::checked_array_len::<T>("Source", src.len())?;
        encode_slice_into::<T, B>(src, &mut self.bytes[..requested]);
        Ok(())
    }

    fn checked_array_len<T: EndianValue>(what: &'static str, count: usize) -> Result<usize> {
        let requested = count.saturating_mul(T::WIDTH);
        if requested > N {
            debug!(what, count, width = T::WIDTH, block = N, "array does not fit block");
            return Err(MemoryError::ArrayTooLarge { what, requested, capacity: N });
        }
        Ok(requested)
    }
}
