// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::types::{PointId, Timestamp};

/// Pairwise relationship (p, q). Self-referential entries (`p == q`) are
/// permitted and are how the self-coupling signal is measured.
#[derive(Debug, Clone, PartialEq)]
pub struct RecursiveCoupling {
    pub p: PointId,
    pub q: PointId,
    /// n^3 flat, may be absent when the tensor was not materialized.
    pub coupling_tensor: Option<Vec<f64>>,
    pub coupling_magnitude: f64,
    pub self_coupling: f64,
    pub hetero_coupling: f64,
    pub evolution_rate: f64,
    pub latent_channels: usize,
    pub computed_at: Timestamp,
}

impl RecursiveCoupling {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: PointId,
        q: PointId,
        coupling_tensor: Option<Vec<f64>>,
        coupling_magnitude: f64,
        self_coupling: f64,
        hetero_coupling: f64,
        evolution_rate: f64,
        latent_channels: usize,
        computed_at: Timestamp,
    ) -> Self {
        Self {
            p,
            q,
            coupling_tensor,
            coupling_magnitude,
            self_coupling,
            hetero_coupling,
            evolution_rate,
            latent_channels,
            computed_at,
        }
    }

    pub fn is_self(&self) -> bool {
        self.p == self.q
    }
}
