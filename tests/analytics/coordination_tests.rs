// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::prelude::{
    coordination_clusters, DataStore, Deadline, EngineConfig, InMemoryStore, ManifoldPoint, RecursiveCoupling,
};
use std::time::Duration;

const NOW: i64 = 99_000;

fn point(id: u128, fingerprint: &str, mass: f64) -> ManifoldPoint {
    let mut p = ManifoldPoint::new(
        id,
        fingerprint,
        None,
        NOW,
        vec![0.0; 4],
        vec![0.5, 0.5, 0.0, 0.0],
        1.0,
        0.5,
        0.5,
    );
    p.semantic_mass = Some(mass);
    p
}

fn coupling(p: u128, q: u128, magnitude: f64) -> RecursiveCoupling {
    RecursiveCoupling::new(p, q, None, magnitude, 0.0, magnitude, 0.0, 0, NOW)
}

#[test]
fn emits_nothing_below_min_cluster_size() {
    let mut store = InMemoryStore::new();
    for i in 0..2u128 {
        let p = i * 2 + 1;
        let q = i * 2 + 2;
        store.insert_point(point(p, "u1", 300.0));
        store.insert_point(point(q, "u2", 300.0));
        store.insert_coupling(coupling(p, q, 0.9));
    }

    let config = EngineConfig::default();
    let result = coordination_clusters(&store, NOW, &config, &Deadline::none()).unwrap();
    assert!(result.is_complete());
    assert!(result.into_inner().is_empty());
}

#[test]
fn same_source_pairs_are_excluded() {
    let mut store = InMemoryStore::new();
    for i in 0..3u128 {
        let p = i * 2 + 1;
        let q = i * 2 + 2;
        store.insert_point(point(p, "u1", 300.0));
        store.insert_point(point(q, "u1", 300.0));
        store.insert_coupling(coupling(p, q, 0.95));
    }

    let config = EngineConfig::default();
    let result = coordination_clusters(&store, NOW, &config, &Deadline::none()).unwrap();
    assert!(result.into_inner().is_empty());
}

#[test]
fn high_coupling_cross_source_cluster_clears_the_confidence_floor() {
    let mut store = InMemoryStore::new();
    for i in 0..3u128 {
        let p = i * 2 + 1;
        let q = i * 2 + 2;
        store.insert_point(point(p, "u1", 300.0));
        store.insert_point(point(q, "u2", 300.0));
        store.insert_coupling(coupling(p, q, 0.9));
    }

    let config = EngineConfig::default();
    let clusters = coordination_clusters(&store, NOW, &config, &Deadline::none()).unwrap().into_inner();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].cluster_size, 3);
    assert!(clusters[0].confidence > 0.5);
}

#[test]
fn expired_deadline_yields_incomplete_with_whatever_was_scored() {
    let mut store = InMemoryStore::new();
    store.insert_point(point(1, "u1", 300.0));
    store.insert_point(point(2, "u2", 300.0));
    store.insert_coupling(coupling(1, 2, 0.9));

    let config = EngineConfig::default();
    let expired = Deadline::at(std::time::Instant::now() - Duration::from_secs(1));
    let result = coordination_clusters(&store, NOW, &config, &expired).unwrap();
    assert!(!result.is_complete());
}
