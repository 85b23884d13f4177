// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

//! The field evolution integrator of 4.7: a single explicit Euler step over
//! a point's coherence field, combining a d'Alembertian-like connection
//! term, an attractor gradient, an autopoietic gradient, and a humility
//! damping term.

use crate::config::EngineConfig;
use crate::deadline::Deadline;
use crate::errors::{KernelError, MissingInputError};
use crate::geometry::{christoffel, metric_inverse};
use crate::linalg::{christoffel_index, square_index};
use crate::store::DataStore;
use crate::types::PointId;

/// One-sided finite difference of `field` over its leading `n` components;
/// forward everywhere a right neighbor exists, backward at the last one.
fn one_sided_diff(field: &[f64], n: usize, h: f64) -> Vec<f64> {
    let dims = n.min(field.len());
    let mut delta = vec![0.0; n];
    for l in 0..dims {
        delta[l] = if l + 1 < dims {
            (field[l + 1] - field[l]) / h
        } else if l > 0 {
            (field[l] - field[l - 1]) / h
        } else {
            0.0
        };
    }
    delta
}

/// Computes the new coherence field for `point_id`, truncated to the active
/// dimension and padded to the storage dimension with zeros. A missing
/// point or an empty coherence field is null-safe: both return a zero
/// vector rather than an error. A present point with no metric yet is not:
/// the connection term has no fallback, so that case reports
/// [`MissingInputError`].
pub fn evolve_coherence_field<S: DataStore>(
    store: &S,
    point_id: PointId,
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Vec<f64>, KernelError> {
    let n = config.active_dim;
    let capacity = config.storage_dim;

    let Some(point) = store.get_point(point_id)? else {
        return Ok(vec![0.0; capacity]);
    };
    if point.coherence_field.is_empty() {
        return Ok(vec![0.0; capacity]);
    }

    let Some(metric_upper) = point.metric_tensor.as_deref() else {
        return Err(MissingInputError("evolve_coherence_field: metric_tensor".to_string()).into());
    };
    let guards = config.guards;
    let (g_inv, _) = metric_inverse(metric_upper, n, guards.det_floor, guards.pivot_eps, guards.tikhonov_add)?;
    let gamma = match point.christoffel_symbols.as_deref() {
        Some(g) => g.to_vec(),
        None => christoffel(&g_inv, None, n, deadline)?,
    };

    let field = &point.coherence_field;
    let delta = one_sided_diff(field, n, config.evolution.finite_diff_h);

    let mut connection_scalar = 0.0;
    for j in 0..n {
        if deadline.is_expired() {
            return Err(KernelError::DeadlineExceeded { completed: 0 });
        }
        for k in 0..n {
            let mut inner = 0.0;
            for l in 0..n {
                inner += gamma[christoffel_index(l, j, k, n)] * delta[l];
            }
            connection_scalar += g_inv[square_index(j, k, n)] * (-inner);
        }
    }

    let c_thr = config.scalar_ops.coherence_threshold;
    let c_mag = point.coherence_magnitude_or_compute(n);
    let mass = point.semantic_mass.unwrap_or(0.0);
    let dt = config.evolution.dt;

    let mut next = vec![0.0; capacity];
    for i in 0..n {
        let c_i = field.get(i).copied().unwrap_or(0.0);

        let l_i = connection_scalar - mass * c_i;
        let a_i = -(c_mag - c_thr) * c_i / (c_mag + 1e-10);
        let p_i = if c_mag >= c_thr {
            2.0 * (c_mag - c_thr) * c_i / (c_mag + 1e-10)
        } else {
            0.0
        };
        let u_i = -0.1 * c_mag * c_i;

        next[i] = c_i + dt * (l_i + a_i + p_i + u_i);
    }

    Ok(next)
}

/// Evolves `point_id`'s coherence field and records the result via
/// [`DataStore::append_evolution_snapshot`].
pub fn step_and_store<S: DataStore>(
    store: &mut S,
    point_id: PointId,
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Vec<f64>, KernelError> {
    let next = evolve_coherence_field(store, point_id, config, deadline)?;
    store.append_evolution_snapshot(point_id, next.clone())?;
    Ok(next)
}
