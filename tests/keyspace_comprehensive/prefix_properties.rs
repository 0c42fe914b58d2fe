//! Prefix relationships between packed tuples

use crate::common::*;
use proptest::prelude::*;
use strata_keyspace::{pack, KeySpace, Subspace, Tuple};

#[test]
fn test_escaped_zero_does_not_break_prefix() {
    let base = tuple![b"\x00".to_vec()];
    let ext = base.clone().with("tail");
    let (pb, pe) = (pack(&base).unwrap(), pack(&ext).unwrap());
    assert_eq!(pb, vec![0x01, 0x00, 0xff, 0x00]);
    assert!(pe.starts_with(&pb));
    assert!(pe.len() > pb.len());
}

#[test]
fn test_tuple_range_covers_extensions_only() {
    let base = tuple!["user", 1];
    let range = base.range().unwrap();

    assert!(range.contains(pack(&base.clone().with(())).unwrap()));
    assert!(range.contains(pack(&base.clone().with(Uuid::from_bytes([0xff; 16]))).unwrap()));
    assert!(!range.contains(pack(&base).unwrap()));
    assert!(!range.contains(pack(&tuple!["user", 2]).unwrap()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_pack_of_prefix_is_byte_prefix(t in arb_tuple(), extra in arb_element()) {
        let ext: Tuple = t.clone().with(extra);
        let (pt, pe) = (pack(&t).unwrap(), pack(&ext).unwrap());
        prop_assert!(pe.len() > pt.len());
        prop_assert!(pe.starts_with(&pt));
    }

    #[test]
    fn prop_concat_packs_to_concatenation(a in arb_tuple(), b in arb_tuple()) {
        let mut joined = pack(&a).unwrap();
        joined.extend(pack(&b).unwrap());
        prop_assert_eq!(pack(&a.concat(&b)).unwrap(), joined);
    }

    #[test]
    fn prop_sub_tuple_matches_chained_sub(a in arb_element(), b in arb_element()) {
        let root = Subspace::root();
        let chained = root.sub(a.clone()).unwrap().sub(b.clone()).unwrap();
        let batch = root.sub_tuple(&tuple![a, b]).unwrap();
        prop_assert_eq!(chained, batch);
    }
}
