#[cfg(all(test, feature = "serde"))]
mod tests {
    use blockmem_core::{
        bits::Bits32,
        block::BlockB004,
        octets::Octets,
        tuples::PairOfInt32,
    };

    #[test]
    fn octets_roundtrip_through_json() {
        let original = Octets::copy_from2(b"ab", b"cd");
        let json = serde_json::to_string(&original).unwrap();
        let back: Octets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn block_roundtrip_through_json() {
        let block = BlockB004::from_bytes([1, 2, 3, 4]);
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, "[1,2,3,4]");
        let back: BlockB004 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);

        assert!(serde_json::from_str::<BlockB004>("[1,2,3]").is_err());
    }

    #[test]
    fn value_types_serialize_as_fields() {
        let json = serde_json::to_string(&PairOfInt32::new(-1, 2)).unwrap();
        assert_eq!(json, r#"{"a":-1,"b":2}"#);
        let bits: Bits32 = serde_json::from_str(r#"{"data":5}"#).unwrap();
        assert!(bits.get_bit(2).unwrap());
    }
}
