//! block/views.rs
//! Size-specific typed views.
//!
//! Each view reads or writes the whole block through the matching `EndianValue` impl, the
//! same impl the standalone codecs use.

use byteorder::{BigEndian, LittleEndian};
use uuid::Uuid;

use crate::bits::Bits32;
use crate::block::types::Block;
use crate::endian::EndianValue;
use crate::tuples::{PairOfInt16, PairOfInt32, PairOfInt64, QuadOfInt16, QuadOfInt32, QuadOfInt64};

macro_rules! endian_views {
    ($n:literal { $($get_le:ident, $set_le:ident, $get_be:ident, $set_be:ident => $ty:ty;)* }) => {
        impl Block<$n> {$(
            #[inline]
            pub fn $get_le(&self) -> $ty {
                <$ty>::decode::<LittleEndian>(&self.bytes)
            }

            #[inline]
            pub fn $set_le(&mut self, value: $ty) {
                value.encode::<LittleEndian>(&mut self.bytes)
            }

            #[inline]
            pub fn $get_be(&self) -> $ty {
                <$ty>::decode::<BigEndian>(&self.bytes)
            }

            #[inline]
            pub fn $set_be(&mut self, value: $ty) {
                value.encode::<BigEndian>(&mut self.bytes)
            }
        )*}

        const _: () = {$(
            assert!(<$ty as EndianValue>::WIDTH == $n);
        )*};
    };
}

impl Block<1> {
    /// Any non-zero byte reads as `true`.
    #[inline]
    pub fn bool_value(&self) -> bool {
        self.bytes[0] != 0
    }

    /// Stores `1` for `true`, `0` for `false`.
    #[inline]
    pub fn set_bool_value(&mut self, value: bool) {
        self.bytes[0] = u8::from(value);
    }

    #[inline]
    pub fn i8_value(&self) -> i8 {
        self.bytes[0] as i8
    }

    #[inline]
    pub fn set_i8_value(&mut self, value: i8) {
        self.bytes[0] = value as u8;
    }

    #[inline]
    pub fn u8_value(&self) -> u8 {
        self.bytes[0]
    }

    #[inline]
    pub fn set_u8_value(&mut self, value: u8) {
        self.bytes[0] = value;
    }
}

endian_views!(2 {
    i16_le, set_i16_le, i16_be, set_i16_be => i16;
    u16_le, set_u16_le, u16_be, set_u16_be => u16;
});

endian_views!(4 {
    i32_le, set_i32_le, i32_be, set_i32_be => i32;
    u32_le, set_u32_le, u32_be, set_u32_be => u32;
    f32_le, set_f32_le, f32_be, set_f32_be => f32;
    pair_of_i16_le, set_pair_of_i16_le, pair_of_i16_be, set_pair_of_i16_be => PairOfInt16;
    bits32_le, set_bits32_le, bits32_be, set_bits32_be => Bits32;
});

endian_views!(8 {
    i64_le, set_i64_le, i64_be, set_i64_be => i64;
    u64_le, set_u64_le, u64_be, set_u64_be => u64;
    f64_le, set_f64_le, f64_be, set_f64_be => f64;
    pair_of_i32_le, set_pair_of_i32_le, pair_of_i32_be, set_pair_of_i32_be => PairOfInt32;
    quad_of_i16_le, set_quad_of_i16_le, quad_of_i16_be, set_quad_of_i16_be => QuadOfInt16;
});

endian_views!(16 {
    i128_le, set_i128_le, i128_be, set_i128_be => i128;
    u128_le, set_u128_le, u128_be, set_u128_be => u128;
    uuid_le, set_uuid_le, uuid_be, set_uuid_be => Uuid;
    pair_of_i64_le, set_pair_of_i64_le, pair_of_i64_be, set_pair_of_i64_be => PairOfInt64;
    quad_of_i32_le, set_quad_of_i32_le, quad_of_i32_be, set_quad_of_i32_be => QuadOfInt32;
});

endian_views!(32 {
    quad_of_i64_le, set_quad_of_i64_le, quad_of_i64_be, set_quad_of_i64_be => QuadOfInt64;
});
