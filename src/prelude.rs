// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

// Core types
pub use crate::types::{
    ClusterRecord, EscalationRecord, ManifoldPoint, PointId, RecursiveCoupling, SignatureRecord, SignatureType,
    Timestamp, WisdomField,
};

// Configuration
pub use crate::config::{
    ClusteringConfig, DetectorThresholds, EngineConfig, EvolutionConfig, NumericGuards, ScalarOpsConfig,
};

// Errors
pub use crate::errors::{DimensionMismatchError, KernelError, MissingInputError, SingularMatrixError, StoreError};

// Cooperative cancellation
pub use crate::completion::Completion;
pub use crate::deadline::Deadline;

// Store contract
pub use crate::store::{DataStore, InMemoryStore, Order};

// Geometry kernel
pub use crate::geometry::{
    build_metric_from_neighbors, christoffel, finite_diffs, geodesic_distance, mean_abs_ricci_diagonal,
    metric_inverse, ricci, scalar_curvature, FiniteDiffs,
};

// Coupling kernel
pub use crate::coupling_kernel::{coupling_magnitude, coupling_tensor, self_hetero_split};

// Scalar ops
pub use crate::scalar_ops::{autopoietic_potential, humility, semantic_mass};

// Detectors
pub use crate::detectors::{
    attractor_dogmatism, attractor_splintering, belief_calcification, coherence_dissolution, delusional_expansion,
    detect_all, detect_fragmentation, detect_inflation, detect_observer_coupling, detect_rigidity,
    metric_crystallization, observer_solipsism, paranoid_interpretation, recurgent_parasitism, reference_decay,
    semantic_hypercoherence, semantic_narcissism,
};

// Analytics
pub use crate::analytics::{coordination_clusters, escalation_trajectory};

// Evolution
pub use crate::evolution::{evolve_coherence_field, step_and_store};
