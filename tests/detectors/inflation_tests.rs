// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::prelude::{
    delusional_expansion, recurgent_parasitism, semantic_hypercoherence, DataStore, EngineConfig, InMemoryStore,
    ManifoldPoint, RecursiveCoupling, WisdomField,
};

fn config() -> EngineConfig {
    let mut c = EngineConfig {
        active_dim: 4,
        ..EngineConfig::default()
    };
    c.scalar_ops.autopoietic_alpha = 10.0;
    c
}

#[test]
fn delusional_expansion_fires_when_the_drive_runs_unchecked_by_wisdom_or_humility() {
    let mut store = InMemoryStore::new();
    store.insert_point(ManifoldPoint::new(1, "u1", None, 0, vec![0.0; 4], vec![2.0, 0.0, 0.0, 0.0], 1.0, 0.5, 0.5));
    store.insert_wisdom(WisdomField::new(1, 0.1, 0.0, 0.0, 0.05, 0.0, 0));

    let record = delusional_expansion(&store, 1, 100, &config()).unwrap().unwrap();
    assert!(record.severity > 0.0);
    assert_eq!(record.geometric_signature.len(), 4);
}

#[test]
fn semantic_hypercoherence_fires_when_saturated_and_sealed_off_from_coupling() {
    let mut store = InMemoryStore::new();
    store.insert_point(ManifoldPoint::new(1, "u1", None, 1000, vec![0.0; 4], vec![1.0, 0.0, 0.0, 0.0], 1.0, 0.5, 0.5));
    store.insert_coupling(RecursiveCoupling::new(1, 1, None, 0.02, 0.02, 0.0, 0.0, 0, 900));

    let record = semantic_hypercoherence(&store, 1, 1000, &EngineConfig {
        active_dim: 4,
        ..EngineConfig::default()
    })
    .unwrap()
    .unwrap();
    assert!(record.severity > 0.0);
}

#[test]
fn recurgent_parasitism_fires_when_local_mass_grows_while_the_rest_of_the_field_drains() {
    let mut store = InMemoryStore::new();
    let conv = Some("c1".to_string());

    let mut p1 = ManifoldPoint::new(1, "target", conv.clone(), 0, vec![0.0; 4], vec![0.0; 4], 1.0, 0.5, 0.5);
    p1.semantic_mass = Some(0.1);
    store.insert_point(p1);
    let mut p2 = ManifoldPoint::new(2, "target", conv.clone(), 1800, vec![0.0; 4], vec![0.0; 4], 1.0, 0.5, 0.5);
    p2.semantic_mass = Some(0.7);
    store.insert_point(p2);
    let mut p3 = ManifoldPoint::new(3, "target", conv.clone(), 3600, vec![0.0; 4], vec![0.0; 4], 1.0, 0.5, 0.5);
    p3.semantic_mass = Some(1.5);
    store.insert_point(p3);

    let mut o1 = ManifoldPoint::new(4, "other", conv.clone(), 100, vec![0.0; 4], vec![0.0; 4], 1.0, 0.5, 0.5);
    o1.semantic_mass = Some(1.0);
    store.insert_point(o1);
    let mut o2 = ManifoldPoint::new(5, "other", conv.clone(), 4000, vec![0.0; 4], vec![0.0; 4], 1.0, 0.5, 0.5);
    o2.semantic_mass = Some(0.5);
    store.insert_point(o2);
    let mut o3 = ManifoldPoint::new(6, "other", conv, 8000, vec![0.0; 4], vec![0.0; 4], 1.0, 0.5, 0.5);
    o3.semantic_mass = Some(-0.2);
    store.insert_point(o3);

    let record = recurgent_parasitism(&store, 3, 8100, &config()).unwrap().unwrap();
    assert!(record.severity > 0.0);
    assert_eq!(record.geometric_signature.len(), 2);
}
