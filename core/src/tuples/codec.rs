//! tuples/codec.rs
//!
//! Stateless span codecs.
//!
//! Design notes:
//! - `Codec<T, B>` is a zero-sized marker; all behaviour comes from `T: EndianValue`, the same
//!   impl the block accessors use, so a block view and a standalone codec always agree byte for byte.
//! - Codecs read and write exactly `T::WIDTH` bytes at the front of the window; anything past
//!   that is left untouched.

use std::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use uuid::Uuid;

use crate::endian::{try_decode, try_encode, EndianValue};
use crate::strings;
use crate::tuples::types::{
    PairOfInt16, PairOfInt32, PairOfInt64, QuadOfInt16, QuadOfInt32, QuadOfInt64,
};
use crate::types::Result;

/// A field codec over a caller-supplied byte window.
pub trait SpanCodec {
    type Value;

    fn read(src: &[u8]) -> Result<Self::Value>;
    fn write(dst: &mut [u8], value: &Self::Value) -> Result<()>;
}

/// Fixed-width codec for `T` in byte order `B`.
pub struct Codec<T, B>(PhantomData<fn() -> (T, B)>);

impl<T: EndianValue, B: ByteOrder> Codec<T, B> {
    /// Bytes read or written per value.
    pub const LEN: usize = T::WIDTH;
}

impl<T: EndianValue, B: ByteOrder> SpanCodec for Codec<T, B> {
    type Value = T;

    #[inline]
    fn read(src: &[u8]) -> Result<T> {
        try_decode::<T, B>(src)
    }

    #[inline]
    fn write(dst: &mut [u8], value: &T) -> Result<()> {
        try_encode::<T, B>(dst, *value)
    }
}

/// Packed string codec; the whole window is the field.
pub struct PackedStringCodec;

impl SpanCodec for PackedStringCodec {
    type Value = Option<String>;

    #[inline]
    fn read(src: &[u8]) -> Result<Option<String>> {
        strings::read(src)
    }

    #[inline]
    fn write(dst: &mut [u8], value: &Option<String>) -> Result<()> {
        strings::write(dst, value.as_deref())
    }
}

pub type CodecPairOfInt16Le = Codec<PairOfInt16, LittleEndian>;
pub type CodecPairOfInt16Be = Codec<PairOfInt16, BigEndian>;
pub type CodecPairOfInt32Le = Codec<PairOfInt32, LittleEndian>;
pub type CodecPairOfInt32Be = Codec<PairOfInt32, BigEndian>;
pub type CodecPairOfInt64Le = Codec<PairOfInt64, LittleEndian>;
pub type CodecPairOfInt64Be = Codec<PairOfInt64, BigEndian>;
pub type CodecQuadOfInt16Le = Codec<QuadOfInt16, LittleEndian>;
pub type CodecQuadOfInt16Be = Codec<QuadOfInt16, BigEndian>;
pub type CodecQuadOfInt32Le = Codec<QuadOfInt32, LittleEndian>;
pub type CodecQuadOfInt32Be = Codec<QuadOfInt32, BigEndian>;
pub type CodecQuadOfInt64Le = Codec<QuadOfInt64, LittleEndian>;
pub type CodecQuadOfInt64Be = Codec<QuadOfInt64, BigEndian>;

pub type CodecSingleLe = Codec<f32, LittleEndian>;
pub type CodecSingleBe = Codec<f32, BigEndian>;
pub type CodecDoubleLe = Codec<f64, LittleEndian>;
pub type CodecDoubleBe = Codec<f64, BigEndian>;
pub type CodecInt128Le = Codec<i128, LittleEndian>;
pub type CodecInt128Be = Codec<i128, BigEndian>;
pub type CodecUInt128Le = Codec<u128, LittleEndian>;
pub type CodecUInt128Be = Codec<u128, BigEndian>;
pub type CodecUuidLe = Codec<Uuid, LittleEndian>;
pub type CodecUuidBe = Codec<Uuid, BigEndian>;
