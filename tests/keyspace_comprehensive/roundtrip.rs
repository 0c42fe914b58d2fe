//! Pack/unpack round trips through the facade

use crate::common::*;
use proptest::prelude::*;
use strata_keyspace::{pack, unpack, Key, KeySpace, Subspace};

// ============================================================================
// Known Encodings
// ============================================================================

#[test]
fn test_reference_tuple_bytes() {
    init_tracing();
    let bytes = pack(&tuple![-5, "a", ()]).unwrap();
    assert_eq!(bytes, vec![0x13, 0xfa, 0x02, b'a', 0x00, 0x00]);
    assert_eq!(unpack(&bytes).unwrap(), tuple![-5, "a", ()]);
}

#[test]
fn test_empty_tuple_packs_to_empty_bytes() {
    assert!(pack(&tuple![]).unwrap().is_empty());
    assert_eq!(unpack(&[]).unwrap(), tuple![]);
}

#[test]
fn test_nested_null_roundtrip() {
    let t = tuple![tuple![(), 1], ()];
    let bytes = pack(&t).unwrap();
    assert_eq!(
        bytes,
        vec![0x05, 0x00, 0xff, 0x15, 0x01, 0x00, 0x00]
    );
    assert_eq!(unpack(&bytes).unwrap(), t);
}

#[test]
fn test_integer_width_boundaries_roundtrip() {
    let values: Vec<i128> = vec![
        0,
        1,
        -1,
        255,
        -255,
        256,
        -256,
        i128::from(u32::MAX),
        -i128::from(u32::MAX),
        i128::from(i64::MAX),
        i128::from(i64::MIN),
        i128::from(u64::MAX),
        -i128::from(u64::MAX),
    ];
    for v in values {
        let t = tuple![Element::Int(v)];
        assert_eq!(unpack(&pack(&t).unwrap()).unwrap(), t, "value {}", v);
    }
}

#[test]
fn test_float_specials_roundtrip() {
    let t = tuple![
        0.0f64,
        -0.0f64,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        f32::MIN_POSITIVE,
        -0.0f32
    ];
    assert_eq!(unpack(&pack(&t).unwrap()).unwrap(), t);
}

#[test]
fn test_uuid_and_bool_roundtrip() {
    let id = Uuid::new_v4();
    let t = tuple![true, false, id];
    let decoded = unpack(&pack(&t).unwrap()).unwrap();
    assert_eq!(decoded[2].as_uuid(), Some(id));
    assert_eq!(decoded, t);
}

// ============================================================================
// Subspace Round Trips
// ============================================================================

#[test]
fn test_subspace_pack_unpack_roundtrip() {
    init_tracing();
    let orders = Subspace::root().sub("orders").unwrap().sub(7).unwrap();
    let t = tuple!["line", 3, b"\x00\xff".to_vec()];
    let key = orders.pack(&t).unwrap();
    assert_eq!(orders.unpack(&key).unwrap(), t);
}

#[test]
fn test_subspace_key_is_prefix_plus_packed_tuple() {
    let s = Subspace::from_bytes(b"\x01app\x00");
    let t = tuple![1, "x"];
    let key = s.pack(&t).unwrap();
    let expected: Key = Key::from(&b"\x01app\x00"[..]).join(pack(&t).unwrap());
    assert_eq!(key, expected);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_unpack_inverts_pack(t in arb_tuple()) {
        let bytes = pack(&t).unwrap();
        prop_assert_eq!(unpack(&bytes).unwrap(), t);
    }

    #[test]
    fn prop_subspace_unpack_inverts_pack(prefix in arb_tuple(), t in arb_tuple()) {
        let s = Subspace::from_tuple(&prefix).unwrap();
        let key = s.pack(&t).unwrap();
        prop_assert_eq!(s.unpack(&key).unwrap(), t);
    }

    #[test]
    fn prop_decodable_bytes_reencode_identically(
        bytes in proptest::collection::vec(
            prop_oneof![Just(0x00u8), Just(0x05u8), Just(0xffu8), 0x00u8..0x31],
            0..24,
        )
    ) {
        if let Ok(t) = unpack(&bytes) {
            prop_assert_eq!(pack(&t).unwrap(), bytes);
        }
    }
}
