//! tuples/types.rs
//! Pair and quad value types.

use std::fmt;

use byteorder::ByteOrder;

use crate::endian::EndianValue;

macro_rules! define_pair {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub a: $ty,
            pub b: $ty,
        }

        impl $name {
            #[inline]
            pub const fn new(a: $ty, b: $ty) -> Self {
                Self { a, b }
            }
        }

        impl From<($ty, $ty)> for $name {
            fn from((a, b): ($ty, $ty)) -> Self {
                Self { a, b }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({},{})", self.a, self.b)
            }
        }

        impl EndianValue for $name {
            const WIDTH: usize = 2 * <$ty as EndianValue>::WIDTH;

            #[inline]
            fn decode<B: ByteOrder>(src: &[u8]) -> Self {
                const W: usize = <$ty as EndianValue>::WIDTH;
                Self {
                    a: <$ty>::decode::<B>(&src[0..W]),
                    b: <$ty>::decode::<B>(&src[W..2 * W]),
                }
            }

            #[inline]
            fn encode<B: ByteOrder>(self, dst: &mut [u8]) {
                const W: usize = <$ty as EndianValue>::WIDTH;
                self.a.encode::<B>(&mut dst[0..W]);
                self.b.encode::<B>(&mut dst[W..2 * W]);
            }
        }
    };
}

macro_rules! define_quad {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub a: $ty,
            pub b: $ty,
            pub c: $ty,
            pub d: $ty,
        }

        impl $name {
            #[inline]
            pub const fn new(a: $ty, b: $ty, c: $ty, d: $ty) -> Self {
                Self { a, b, c, d }
            }
        }

        impl From<($ty, $ty, $ty, $ty)> for $name {
            fn from((a, b, c, d): ($ty, $ty, $ty, $ty)) -> Self {
                Self { a, b, c, d }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({},{},{},{})", self.a, self.b, self.c, self.d)
            }
        }

        impl EndianValue for $name {
            const WIDTH: usize = 4 * <$ty as EndianValue>::WIDTH;

            #[inline]
            fn decode<B: ByteOrder>(src: &[u8]) -> Self {
                const W: usize = <$ty as EndianValue>::WIDTH;
                Self {
                    a: <$ty>::decode::<B>(&src[0..W]),
                    b: <$ty>::decode::<B>(&src[W..2 * W]),
                    c: <$ty>::decode::<B>(&src[2 * W..3 * W]),
                    d: <$ty>::decode::<B>(&src[3 * W..4 * W]),
                }
            }

            #[inline]
            fn encode<B: ByteOrder>(self, dst: &mut [u8]) {
                const W: usize = <$ty as EndianValue>::WIDTH;
                self.a.encode::<B>(&mut dst[0..W]);
                self.b.encode::<B>(&mut dst[W..2 * W]);
                self.c.encode::<B>(&mut dst[2 * W..3 * W]);
                self.d.encode::<B>(&mut dst[3 * W..4 * W]);
            }
        }
    };
}

define_pair!(
    /// Two `i16` values, 4 bytes on the wire.
    PairOfInt16, i16
);
define_pair!(
    /// Two `i32` values, 8 bytes on the wire.
    PairOfInt32, i32
);
define_pair!(
    /// Two `i64` values, 16 bytes on the wire.
    PairOfInt64, i64
);
define_quad!(
    /// Four `i16` values, 8 bytes on the wire.
    QuadOfInt16, i16
);
define_quad!(
    /// Four `i32` values, 16 bytes on the wire.
    QuadOfInt32, i32
);
define_quad!(
    /// Four `i64` values, 32 bytes on the wire.
    QuadOfInt64, i64
);
