#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::mem::size_of;

    use blockmem_core::{
        block::{Block, BlockB001, BlockB002, BlockB004, BlockB008, BlockB016, BlockB032,
            BlockB064, BlockK001, BlockK008},
        constants::BLOCK_SIZES,
        sequence::{ByteSequence, SequenceBuilder},
        types::MemoryError,
        utils::to_hex_dashed,
    };
    use proptest::prelude::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }

    // ## 1️⃣ Layout

    #[test]
    fn block_size_matches_type_size() {
        assert_eq!(size_of::<BlockB001>(), 1);
        assert_eq!(size_of::<BlockB016>(), 16);
        assert_eq!(size_of::<BlockK008>(), 8192);
        assert_eq!(BlockB064::SIZE, 64);
        assert_eq!(BlockK001::new().block_size(), 1024);
        assert_eq!(BLOCK_SIZES.len(), 14);
    }

    #[test]
    fn new_and_default_are_zeroed() {
        assert!(BlockB032::new().is_empty());
        assert!(BlockB032::default().is_empty());
        assert_eq!(BlockB008::default().as_bytes(), &[0u8; 8]);
    }

    // ## 2️⃣ Views alias the same bytes

    #[test]
    fn views_share_storage() {
        let mut block = BlockB004::new();
        block.set_i32_le(0x0403_0201);
        assert_eq!(block.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(block.u32_be(), 0x0102_0304);
        assert_eq!(block.a().u16_le(), 0x0201);
        assert_eq!(block.b().u16_le(), 0x0403);

        let pair = block.pair_of_i16_le();
        assert_eq!((pair.a, pair.b), (0x0201, 0x0403));
    }

    #[test]
    fn single_byte_views() {
        let mut block = BlockB001::new();
        assert!(!block.bool_value());
        block.set_bool_value(true);
        assert_eq!(block.u8_value(), 1);
        block.set_i8_value(-1);
        assert_eq!(block.u8_value(), 0xFF);
        assert!(block.bool_value());
        block.set_u8_value(0x80);
        assert_eq!(block.i8_value(), i8::MIN);
    }

    #[test]
    fn integer_views_both_orders() {
        let mut b2 = BlockB002::new();
        b2.set_u16_be(0xABCD);
        assert_eq!(b2.as_bytes(), &[0xAB, 0xCD]);
        assert_eq!(b2.u16_le(), 0xCDAB);
        b2.set_i16_le(-2);
        assert_eq!(b2.as_bytes(), &[0xFE, 0xFF]);
        assert_eq!(b2.i16_be(), -257);

        let mut b8 = BlockB008::new();
        b8.set_u64_be(1);
        assert_eq!(b8.as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 1]);
        b8.set_i64_le(i64::MIN);
        assert_eq!(b8.as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 0x80]);

        let mut b16 = BlockB016::new();
        b16.set_u128_le(u128::MAX - 1);
        assert_eq!(b16.as_bytes()[0], 0xFE);
        assert_eq!(b16.i128_le(), -2);
        b16.set_i128_be(1);
        assert_eq!(b16.as_bytes()[15], 1);
    }

    #[test]
    fn float_views_are_bit_exact() {
        let mut b4 = BlockB004::new();
        let nan = f32::from_bits(0x7FC0_1234);
        b4.set_f32_le(nan);
        assert_eq!(b4.f32_le().to_bits(), 0x7FC0_1234);
        assert_eq!(b4.u32_le(), 0x7FC0_1234);

        b4.set_f32_be(-0.0);
        assert_eq!(b4.as_bytes(), &[0x80, 0, 0, 0]);
        assert!(b4.f32_be().is_sign_negative());

        let mut b8 = BlockB008::new();
        b8.set_f64_be(f64::NEG_INFINITY);
        assert_eq!(b8.u64_be(), f64::NEG_INFINITY.to_bits());
        b8.set_f64_le(1.5);
        assert_eq!(b8.f64_le(), 1.5);
    }

    #[test]
    fn writes_through_one_half_are_visible_in_the_whole() {
        let mut block = BlockB016::new();
        let mut half = block.b();
        half.set_u64_le(u64::MAX);
        block.set_b(half);
        assert_eq!(block.u128_le(), u128::MAX << 64);
        assert!(block.a().is_empty());

        let rebuilt = BlockB016::from_halves(block.a(), block.b());
        assert_eq!(rebuilt, block);
    }

    #[test]
    fn nested_halves_reach_single_bytes() {
        let mut block = BlockB008::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(block.b().a().b().u8_value(), 6);

        let mut quarter = block.a().a();
        quarter.set_u16_be(0xFFEE);
        let mut half = block.a();
        half.set_a(quarter);
        block.set_a(half);
        assert_eq!(block.as_bytes(), &[0xFF, 0xEE, 3, 4, 5, 6, 7, 8]);
    }

    // ## 3️⃣ Emptiness, equality, hashing

    #[test]
    fn is_empty_regardless_of_last_view() {
        let mut block = BlockB016::new();
        block.set_uuid_le(uuid::Uuid::from_u128(1));
        assert!(!block.is_empty());
        block.set_quad_of_i32_be(Default::default());
        assert!(block.is_empty());

        block.as_bytes_mut()[15] = 1;
        assert!(!block.is_empty());
        block.set_pair_of_i64_le(Default::default());
        assert!(block.is_empty());
    }

    #[test]
    fn equality_and_hash_cover_every_byte() {
        let a = BlockB032::from_bytes([7; 32]);
        let mut b = a;
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.as_bytes_mut()[31] = 8;
        assert_ne!(a, b);

        let small_a = BlockB004::from_bytes([1, 2, 3, 4]);
        let small_b = BlockB004::from_bytes([1, 2, 3, 5]);
        assert_ne!(small_a, small_b);
        assert_eq!(hash_of(&small_a), hash_of(&BlockB004::from_bytes([1, 2, 3, 4])));
    }

    // ## 4️⃣ Copy in / copy out

    #[test]
    fn try_read_requires_full_block() {
        let mut block = BlockB008::from_bytes([9; 8]);
        assert!(!block.try_read(&[1, 2, 3]));
        assert_eq!(block.as_bytes(), &[9; 8], "short read must not mutate");

        assert!(block.try_read(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
        assert_eq!(block.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn try_write_requires_full_target() {
        let block = BlockB004::from_bytes([1, 2, 3, 4]);
        let mut short = [0u8; 3];
        assert!(!block.try_write(&mut short));
        assert_eq!(short, [0; 3]);

        let mut long = [0xAAu8; 6];
        assert!(block.try_write(&mut long));
        assert_eq!(long, [1, 2, 3, 4, 0xAA, 0xAA]);
    }

    #[test]
    fn write_to_and_ranges() {
        let block = BlockB008::from_bytes([0, 1, 2, 3, 4, 5, 6, 7]);
        let mut out = [0u8; 8];
        block.write_to(&mut out);
        assert_eq!(out, *block.as_bytes());

        let mut part = [0u8; 3];
        block.write_range_to(2, 3, &mut part);
        assert_eq!(part, [2, 3, 4]);

        assert_eq!(block.to_byte_array(), (0..8).collect::<Vec<u8>>());
        assert_eq!(block.to_byte_array_range(6, 2), vec![6, 7]);
    }

    #[test]
    fn base64_is_standard_padded() {
        let block = BlockB004::from_bytes(*b"abcd");
        assert_eq!(block.to_base64(), "YWJjZA==");
        assert_eq!(block.to_base64_range(0, 3), "YWJj");
        assert_eq!(BlockB001::new().to_base64(), "AA==");
    }

    #[test]
    fn read_assembles_across_segments() {
        let source = SequenceBuilder::new()
            .append(vec![1u8, 2])
            .append(vec![3u8])
            .append(vec![4u8, 5, 6, 7, 8, 9])
            .build();
        assert_eq!(source.segment_count(), 3);

        let mut block = BlockB008::new();
        assert!(block.try_read_sequence(&source));
        assert_eq!(block.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn segmented_read_fails_without_mutation_when_short() {
        let source = SequenceBuilder::new().append(vec![1u8, 2]).append(vec![3u8]).build();
        let mut block = BlockB004::from_bytes([9; 4]);
        assert!(!block.try_read_sequence(&source));
        assert_eq!(block.as_bytes(), &[9; 4]);

        assert!(!block.try_read_sequence(&ByteSequence::empty()));
        assert!(block.try_read_sequence(&ByteSequence::from(vec![4u8, 3, 2, 1])));
        assert_eq!(block.u32_be(), 0x0403_0201);
    }

    #[test]
    fn hex_dashed_formatting() {
        assert_eq!(to_hex_dashed(&[]), "");
        assert_eq!(to_hex_dashed(&[0x0A]), "0A");
        assert_eq!(to_hex_dashed(&[0x00, 0x61, 0xFF]), "00-61-FF");
        assert_eq!(to_hex_dashed(&[0xAB; 64]).len(), 64 * 3 - 1);
    }

    // ## 5️⃣ Array accessors

    #[test]
    fn arrays_round_trip_and_leave_tail_untouched() {
        let mut block = BlockB016::from_bytes([0xEE; 16]);
        block.set_array_be(&[1i32, -1]).unwrap();
        assert_eq!(
            to_hex_dashed(block.as_bytes()),
            "00-00-00-01-FF-FF-FF-FF-EE-EE-EE-EE-EE-EE-EE-EE"
        );

        let mut out = [0i32; 2];
        block.get_array_be(&mut out).unwrap();
        assert_eq!(out, [1, -1]);

        let mut le = [0u16; 2];
        block.get_array_le(&mut le).unwrap();
        assert_eq!(le, [0, 0x0100]);
    }

    #[test]
    fn full_capacity_array() {
        let mut block = BlockB032::new();
        let values: Vec<u64> = (1..=4).collect();
        block.set_array_le(&values).unwrap();
        let mut out = [0u64; 4];
        block.get_array_le(&mut out).unwrap();
        assert_eq!(out.to_vec(), values);
    }

    #[test]
    fn oversized_arrays_are_rejected() {
        let mut block = BlockB008::from_bytes([3; 8]);
        let err = block.set_array_le(&[0u32; 3]).unwrap_err();
        assert_eq!(
            err,
            MemoryError::ArrayTooLarge { what: "Source", requested: 12, capacity: 8 }
        );
        assert!(err.to_string().starts_with("Source is too short"));
        assert_eq!(block.as_bytes(), &[3; 8], "nothing written on error");

        let mut dst = [0u16; 5];
        let err = block.get_array_be(&mut dst).unwrap_err();
        assert!(err.to_string().starts_with("Destination is too short"));
        assert_eq!(dst, [0; 5]);
    }

    // ## 6️⃣ Debug output

    #[test]
    fn debug_shows_size_and_bytes() {
        let block = BlockB004::from_bytes([0xDE, 0xAD, 0xBE, 0xEF]);
        let dbg = format!("{block:?}");
        assert!(dbg.contains("size: 4"));
        assert!(dbg.contains("deadbeef"));
    }

    proptest! {
        #[test]
        fn prop_try_read_write_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 64..100)) {
            let mut block = BlockB064::new();
            prop_assert!(block.try_read(&bytes));
            let mut out = vec![0u8; 64];
            prop_assert!(block.try_write(&mut out));
            prop_assert_eq!(&out[..], &bytes[..64]);
        }

        #[test]
        fn prop_segmented_read_matches_contiguous(
            bytes in proptest::collection::vec(any::<u8>(), 16..40),
            cuts in proptest::collection::vec(0usize..40, 0..6),
        ) {
            let mut points: Vec<usize> = cuts.into_iter().map(|c| c % bytes.len()).collect();
            points.sort_unstable();
            let mut builder = SequenceBuilder::new();
            let mut start = 0;
            for p in points {
                builder = builder.append(bytes[start..p.max(start)].to_vec());
                start = p.max(start);
            }
            let source = builder.append(bytes[start..].to_vec()).build();

            let mut segmented = BlockB016::new();
            let mut contiguous = BlockB016::new();
            prop_assert!(segmented.try_read_sequence(&source));
            prop_assert!(contiguous.try_read(&bytes));
            prop_assert_eq!(segmented, contiguous);
        }

        #[test]
        fn prop_equal_blocks_hash_equal(bytes in any::<[u8; 16]>()) {
            let a = BlockB016::from_bytes(bytes);
            let b = Block::<16>::from(bytes);
            prop_assert_eq!(a, b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}
