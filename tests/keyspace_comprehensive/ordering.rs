//! Byte order of packed tuples matches their logical order

use crate::common::*;
use proptest::prelude::*;
use strata_keyspace::{pack, KeySpace, Subspace};

// ============================================================================
// Cross-Type Order
// ============================================================================

#[test]
fn test_type_order_of_packed_elements() {
    let ascending = vec![
        tuple![()],
        tuple![b"bytes".to_vec()],
        tuple!["string"],
        tuple![tuple![1]],
        tuple![-1],
        tuple![0],
        tuple![1],
        tuple![1.0f32],
        tuple![1.0f64],
        tuple![false],
        tuple![true],
        tuple![Uuid::nil()],
    ];
    let packed: Vec<Vec<u8>> = ascending.iter().map(|t| pack(t).unwrap()).collect();
    for pair in packed.windows(2) {
        assert!(pair[0] < pair[1], "{:02x?} !< {:02x?}", pair[0], pair[1]);
    }
    let mut sorted = ascending.clone();
    sorted.sort();
    assert_eq!(sorted, ascending);
}

#[test]
fn test_integers_sort_across_widths() {
    let ints: Vec<i128> = vec![
        -i128::from(u64::MAX),
        -65536,
        -65535,
        -256,
        -255,
        -1,
        0,
        1,
        255,
        256,
        65535,
        65536,
        i128::from(u64::MAX),
    ];
    let packed: Vec<Vec<u8>> = ints
        .iter()
        .map(|&i| pack(&tuple![Element::Int(i)]).unwrap())
        .collect();
    for pair in packed.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_prefix_tuple_sorts_first() {
    let short = pack(&tuple!["a"]).unwrap();
    let long = pack(&tuple!["a", ()]).unwrap();
    let string_ext = pack(&tuple!["a\0"]).unwrap();
    assert!(short < long);
    assert!(long < string_ext);
}

// ============================================================================
// Deterministic Corpus
// ============================================================================

#[test]
fn test_sorted_corpus_matches_sorted_keys() {
    init_tracing();
    let mut tuples = random_corpus(500);
    tuples.sort();
    tuples.dedup();

    let keys: Vec<Vec<u8>> = tuples.iter().map(|t| pack(t).unwrap()).collect();
    let mut sorted_keys = keys.clone();
    sorted_keys.sort();

    assert_eq!(keys, sorted_keys);
    // Distinct tuples never collide
    sorted_keys.dedup();
    assert_eq!(sorted_keys.len(), tuples.len());
}

#[test]
fn test_subspace_keys_sort_like_tuples() {
    let events = Subspace::root().sub("events").unwrap();
    let mut tuples = random_corpus(200);
    tuples.sort();

    let keys: Vec<_> = tuples.iter().map(|t| events.pack(t).unwrap()).collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_pack_preserves_order(a in arb_tuple(), b in arb_tuple()) {
        let (pa, pb) = (pack(&a).unwrap(), pack(&b).unwrap());
        prop_assert_eq!(a.cmp(&b), pa.cmp(&pb));
    }

    #[test]
    fn prop_pack_is_injective(a in arb_tuple(), b in arb_tuple()) {
        prop_assert_eq!(a == b, pack(&a).unwrap() == pack(&b).unwrap());
    }

    #[test]
    fn prop_int_order(a in arb_int(), b in arb_int()) {
        let pa = pack(&tuple![Element::Int(a)]).unwrap();
        let pb = pack(&tuple![Element::Int(b)]).unwrap();
        prop_assert_eq!(a.cmp(&b), pa.cmp(&pb));
    }
}
