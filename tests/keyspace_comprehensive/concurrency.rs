//! Subspaces are immutable values shared freely across threads

use crate::common::*;
use std::sync::Arc;
use std::thread;
use strata_keyspace::{KeySpace, Subspace};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<Subspace>();
    assert_send_sync::<Tuple>();
    assert_send_sync::<Element>();
    assert_send_sync::<strata_keyspace::Error>();
}

#[test]
fn test_shared_subspace_across_threads() {
    init_tracing();
    let users = Arc::new(Subspace::root().sub("users").unwrap());

    let handles: Vec<_> = (0..8i64)
        .map(|id| {
            let users = Arc::clone(&users);
            thread::spawn(move || {
                let member = users.sub(id).unwrap();
                (0..100i64)
                    .map(|n| member.pack(&tuple![n]).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = Vec::new();
    for (id, handle) in handles.into_iter().enumerate() {
        let keys = handle.join().unwrap();
        for (n, key) in keys.iter().enumerate() {
            assert!(users.contains(key));
            assert_eq!(users.unpack(key).unwrap(), tuple![id as i64, n as i64]);
        }
        all.extend(keys);
    }

    let before = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), before);
}
