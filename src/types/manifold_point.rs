// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::types::{PointId, Timestamp};

/// A single high-dimensional semantic field observation.
///
/// Geometric fields (`metric_tensor`, `christoffel_symbols`, `ricci_curvature`,
/// `scalar_curvature`) are filled by the geometry kernel, either eagerly on
/// ingest or lazily on first detector call, and are never mutated by a
/// detector. Only the evolution integrator ever writes a new
/// `coherence_field` snapshot, and it does so into a fresh point, not in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifoldPoint {
    pub id: PointId,
    pub source_fingerprint: String,
    pub conversation_id: Option<String>,
    pub created_at: Timestamp,

    /// N-vector content geometry.
    pub semantic_field: Vec<f64>,
    /// N-vector organizational coherence.
    pub coherence_field: Vec<f64>,
    pub coherence_magnitude: Option<f64>,

    /// n x n symmetric metric, upper-triangle flattened.
    pub metric_tensor: Option<Vec<f64>>,
    pub metric_determinant: Option<f64>,
    /// n^3 flat, indexed (k, i, j) -> (k*n + i)*n + j.
    pub christoffel_symbols: Option<Vec<f64>>,
    /// n^2 flat, indexed (i, j) -> i*n + j.
    pub ricci_curvature: Option<Vec<f64>>,
    pub scalar_curvature: Option<f64>,

    /// Recursive depth D.
    pub recursive_depth: f64,
    /// Constraint density rho.
    pub constraint_density: f64,
    /// Attractor stability A.
    pub attractor_stability: f64,
    /// Semantic mass M, computed from D, det(g) and A when the metric is known.
    pub semantic_mass: Option<f64>,
}

impl ManifoldPoint {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PointId,
        source_fingerprint: impl Into<String>,
        conversation_id: Option<String>,
        created_at: Timestamp,
        semantic_field: Vec<f64>,
        coherence_field: Vec<f64>,
        recursive_depth: f64,
        constraint_density: f64,
        attractor_stability: f64,
    ) -> Self {
        Self {
            id,
            source_fingerprint: source_fingerprint.into(),
            conversation_id,
            created_at,
            semantic_field,
            coherence_field,
            coherence_magnitude: None,
            metric_tensor: None,
            metric_determinant: None,
            christoffel_symbols: None,
            ricci_curvature: None,
            scalar_curvature: None,
            recursive_depth,
            constraint_density,
            attractor_stability,
            semantic_mass: None,
        }
    }

    /// Euclidean norm of the coherence field over its first `dims` components,
    /// falling back to the cached `coherence_magnitude` when present.
    pub fn coherence_magnitude_or_compute(&self, dims: usize) -> f64 {
        self.coherence_magnitude
            .unwrap_or_else(|| crate::linalg::vector_norm(&self.coherence_field, dims))
    }
}
