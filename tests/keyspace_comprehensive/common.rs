//! Shared strategies and helpers for the keyspace suite.

#![allow(dead_code)]

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Once;
pub use strata_keyspace::{tuple, Element, Tuple, Uuid};

/// Fixed seed for deterministic corpus generation.
pub const CORPUS_SEED: u64 = 0xDEADBEEF_CAFEBABE;

static INIT_TRACING: Once = Once::new();

/// Install a test-writer subscriber once per process.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Strategies
// ============================================================================

/// Integers across every encoding width, both signs.
pub fn arb_int() -> impl Strategy<Value = i128> {
    prop_oneof![
        (-1000i128..1000),
        any::<i64>().prop_map(i128::from),
        any::<u64>().prop_map(i128::from),
        any::<u64>().prop_map(|m| -i128::from(m)),
    ]
}

/// Byte strings biased towards the bytes the escaping cares about.
pub fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![Just(0x00u8), Just(0xffu8), Just(0x01u8), any::<u8>()],
        0..8,
    )
}

/// Scalar (non-nested) elements.
pub fn arb_scalar() -> impl Strategy<Value = Element> {
    prop_oneof![
        Just(Element::Null),
        arb_bytes().prop_map(Element::Bytes),
        "[a-c\\x00é]{0,5}".prop_map(Element::String),
        arb_int().prop_map(Element::Int),
        any::<f32>().prop_map(Element::Float),
        any::<f64>().prop_map(Element::Double),
        any::<bool>().prop_map(Element::Bool),
        any::<[u8; 16]>().prop_map(|b| Element::Uuid(Uuid::from_bytes(b))),
    ]
}

/// Elements including nested tuples up to a few levels deep.
pub fn arb_element() -> impl Strategy<Value = Element> {
    arb_scalar().prop_recursive(3, 16, 4, |inner| {
        proptest::collection::vec(inner, 0..4).prop_map(|v| Element::Tuple(Tuple::from(v)))
    })
}

/// Tuples of up to five elements.
pub fn arb_tuple() -> impl Strategy<Value = Tuple> {
    proptest::collection::vec(arb_element(), 0..5).prop_map(Tuple::from)
}

// ============================================================================
// Deterministic corpus
// ============================================================================

fn random_scalar(rng: &mut StdRng) -> Element {
    match rng.gen_range(0..6) {
        0 => Element::Null,
        1 => Element::Bytes((0..rng.gen_range(0..4)).map(|_| rng.gen_range(0..3u8)).collect()),
        2 => Element::String(
            (0..rng.gen_range(0..4))
                .map(|_| ['a', 'b', '\0'][rng.gen_range(0..3)])
                .collect(),
        ),
        3 => Element::Int(rng.gen_range(-70_000i128..70_000)),
        4 => Element::Bool(rng.gen()),
        _ => Element::Double(rng.gen_range(-2.0..2.0)),
    }
}

fn random_element(rng: &mut StdRng, depth: usize) -> Element {
    if depth < 2 && rng.gen_bool(0.2) {
        let len = rng.gen_range(0..3);
        Element::Tuple((0..len).map(|_| random_element(rng, depth + 1)).collect())
    } else {
        random_scalar(rng)
    }
}

/// A reproducible corpus of small tuples with many shared prefixes.
pub fn random_corpus(count: usize) -> Vec<Tuple> {
    let mut rng = StdRng::seed_from_u64(CORPUS_SEED);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..4);
            (0..len).map(|_| random_element(&mut rng, 0)).collect()
        })
        .collect()
}
