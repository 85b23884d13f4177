// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::prelude::{
    attractor_dogmatism, belief_calcification, metric_crystallization, DataStore, EngineConfig, InMemoryStore,
    ManifoldPoint,
};

fn config() -> EngineConfig {
    EngineConfig {
        active_dim: 4,
        ..EngineConfig::default()
    }
}

#[test]
fn attractor_dogmatism_fires_on_locked_high_stability_high_coherence_point() {
    let mut store = InMemoryStore::new();
    let mut p = ManifoldPoint::new(1, "u1", None, 100, vec![0.0; 4], vec![0.8, 0.0, 0.0, 0.0], 1.0, 0.5, 0.9);
    p.coherence_magnitude = None;
    store.insert_point(p);

    let record = attractor_dogmatism(&store, 1, 200, &config()).unwrap().unwrap();
    assert!(record.severity > 0.0 && record.severity <= 1.0);
    assert_eq!(record.geometric_signature.len(), 4);
    assert!(!record.mathematical_evidence.is_empty());
}

#[test]
fn attractor_dogmatism_returns_none_for_an_unknown_point() {
    let store = InMemoryStore::new();
    let result = attractor_dogmatism(&store, 42, 200, &config()).unwrap();
    assert!(result.is_none());
}

#[test]
fn belief_calcification_fires_when_a_conversation_trajectory_has_stopped_moving() {
    let mut store = InMemoryStore::new();
    let field = vec![0.3, 0.3, 0.3, 0.3];
    let mut target = ManifoldPoint::new(1, "u1", Some("c1".to_string()), 3600, vec![0.0; 4], field.clone(), 1.0, 0.5, 0.5);
    target.semantic_mass = Some(0.4);
    store.insert_point(target);

    let mut other = ManifoldPoint::new(2, "u1", Some("c1".to_string()), 1800, vec![0.0; 4], field, 1.0, 0.5, 0.5);
    other.semantic_mass = Some(0.4);
    store.insert_point(other);

    let record = belief_calcification(&store, 1, 3700, &config()).unwrap().unwrap();
    assert!(record.severity > 0.0);
}

#[test]
fn metric_crystallization_fires_when_curvature_pressure_outpaces_frozen_evolution() {
    let mut store = InMemoryStore::new();
    let mut p = ManifoldPoint::new(1, "u1", None, 100, vec![0.0; 2], vec![0.1, 0.1], 1.0, 0.5, 0.5);
    p.semantic_mass = Some(0.05);
    p.ricci_curvature = Some(vec![0.5, 0.0, 0.0, 0.5]);
    store.insert_point(p);

    let small_config = EngineConfig {
        active_dim: 2,
        ..EngineConfig::default()
    };
    let record = metric_crystallization(&store, 1, 200, &small_config).unwrap().unwrap();
    assert!(record.severity > 0.0);
    assert_eq!(record.geometric_signature.len(), 2);
}
