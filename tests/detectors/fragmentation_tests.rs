// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::prelude::{
    attractor_splintering, coherence_dissolution, reference_decay, DataStore, EngineConfig, InMemoryStore,
    ManifoldPoint, RecursiveCoupling,
};

fn config() -> EngineConfig {
    EngineConfig {
        active_dim: 4,
        ..EngineConfig::default()
    }
}

#[test]
fn attractor_splintering_fires_when_the_trajectory_keeps_jumping_direction() {
    let mut store = InMemoryStore::new();
    let conv = Some("c1".to_string());
    let fields = [
        vec![0.0, 0.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0],
    ];
    for (i, field) in fields.iter().enumerate() {
        store.insert_point(ManifoldPoint::new(
            i as u128 + 1,
            "u1",
            conv.clone(),
            (i as i64) * 600,
            vec![0.0; 4],
            field.clone(),
            1.0,
            0.5,
            0.5,
        ));
    }

    let record = attractor_splintering(&store, 4, 2000, &config()).unwrap().unwrap();
    assert!(record.severity > 0.0);
    assert_eq!(record.geometric_signature.len(), 3);
}

#[test]
fn coherence_dissolution_fires_when_the_gradient_outruns_the_field() {
    let mut store = InMemoryStore::new();
    let p = ManifoldPoint::new(1, "u1", None, 100, vec![0.0; 4], vec![0.0, -1.0, -1.0, 0.0], 1.0, 0.5, 0.5);
    store.insert_point(p);

    let record = coherence_dissolution(&store, 1, 200, &config()).unwrap().unwrap();
    assert!(record.severity > 0.0);
    assert_eq!(record.geometric_signature.len(), 3);
}

#[test]
fn reference_decay_fires_on_a_sustained_coupling_decline_without_compensation() {
    let mut store = InMemoryStore::new();
    store.insert_point(ManifoldPoint::new(1, "u1", None, 0, vec![0.0; 4], vec![0.0; 4], 1.0, 0.5, 0.5));
    let magnitudes = [1.0, 0.8, 0.6, 0.4, 0.2];
    for (i, m) in magnitudes.iter().enumerate() {
        store.insert_coupling(RecursiveCoupling::new(1, 1, None, *m, *m, 0.0, 0.0, 0, (i as i64) * 600));
    }
    store.insert_wisdom(manifold_signatures::prelude::WisdomField::new(1, 0.2, 0.0, 0.0, 0.5, 0.0, 2400));

    let record = reference_decay(&store, 1, 3000, &config()).unwrap().unwrap();
    assert!(record.severity > 0.0);
    assert_eq!(record.geometric_signature.len(), 2);
}
