//! endian/types.rs
//! The `EndianValue` trait and its scalar implementations.

use byteorder::ByteOrder;
use uuid::Uuid;

/// A fixed-width value with an explicit byte-order encoding.
///
/// `decode`/`encode` operate on the first `WIDTH` bytes of the slice and panic when the
/// slice is shorter, the same way slice indexing does. Checked variants live in
/// [`try_decode`](crate::endian::try_decode) and [`try_encode`](crate::endian::try_encode).
pub trait EndianValue: Copy {
    /// Encoded size in bytes.
    const WIDTH: usize;

    fn decode<B: ByteOrder>(src: &[u8]) -> Self;
    fn encode<B: ByteOrder>(self, dst: &mut [u8]);
}

macro_rules! impl_endian_value {
    ($($ty:ty => $width:expr, $read:ident, $write:ident;)*) => {$(
        impl EndianValue for $ty {
            const WIDTH: usize = $width;

            #[inline(always)]
            fn decode<B: ByteOrder>(src: &[u8]) -> Self {
                B::$read(src)
            }

            #[inline(always)]
            fn encode<B: ByteOrder>(self, dst: &mut [u8]) {
                B::$write(dst, self)
            }
        }
    )*};
}

impl_endian_value! {
    i16  => 2,  read_i16,  write_i16;
    u16  => 2,  read_u16,  write_u16;
    i32  => 4,  read_i32,  write_i32;
    u32  => 4,  read_u32,  write_u32;
    i64  => 8,  read_i64,  write_i64;
    u64  => 8,  read_u64,  write_u64;
    i128 => 16, read_i128, write_i128;
    u128 => 16, read_u128, write_u128;
    f32  => 4,  read_f32,  write_f32;
    f64  => 8,  read_f64,  write_f64;
}

// Single bytes have no order; the impls let array accessors work on byte vectors too.
impl EndianValue for u8 {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn decode<B: ByteOrder>(src: &[u8]) -> Self {
        src[0]
    }

    #[inline(always)]
    fn encode<B: ByteOrder>(self, dst: &mut [u8]) {
        dst[0] = self;
    }
}

impl EndianValue for i8 {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn decode<B: ByteOrder>(src: &[u8]) -> Self {
        src[0] as i8
    }

    #[inline(always)]
    fn encode<B: ByteOrder>(self, dst: &mut [u8]) {
        dst[0] = self as u8;
    }
}

/// UUID layout:
///
/// ```text
/// [ time_low (4) ][ time_mid (2) ][ time_hi_and_version (2) ][ clock_seq + node (8) ]
/// ```
///
/// The first three fields follow the requested byte order, the last 8 bytes are copied as-is.
/// Little-endian therefore matches `Uuid::from_bytes_le` and big-endian matches the RFC 4122
/// layout of `Uuid::from_bytes`.
impl EndianValue for Uuid {
    const WIDTH: usize = 16;

    #[inline]
    fn decode<B: ByteOrder>(src: &[u8]) -> Self {
        let d1 = B::read_u32(&src[0..4]);
        let d2 = B::read_u16(&src[4..6]);
        let d3 = B::read_u16(&src[6..8]);
        let mut d4 = [0u8; 8];
        d4.copy_from_slice(&src[8..16]);
        Uuid::from_fields(d1, d2, d3, &d4)
    }

    #[inline]
    fn encode<B: ByteOrder>(self, dst: &mut [u8]) {
        let (d1, d2, d3, d4) = self.as_fields();
        B::write_u32(&mut dst[0..4], d1);
        B::write_u16(&mut dst[4..6], d2);
        B::write_u16(&mut dst[6..8], d3);
        dst[8..16].copy_from_slice(d4);
    }
}
