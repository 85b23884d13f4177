// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::errors::SingularMatrixError;
use crate::geometry::symmetric::{compress_symmetric, expand_symmetric};
use crate::linalg::{det, inv};

/// Builds a metric from a two-neighbor finite-difference heuristic.
///
/// At each active component `k`, `grad[k]` estimates the local derivative
/// via a centered difference of the two neighboring fields. The metric is
/// then the outer product `grad[i] * grad[j]` plus `base` on the diagonal,
/// which is guaranteed positive-definite for `base > 0` (see the modeling
/// note on this heuristic: it is a design choice, not a law, and the
/// neighbor-pair interface is kept stable so it can be replaced).
///
/// Returns the metric upper-triangular flattened, matching the point's
/// persisted storage layout.
pub fn build_metric_from_neighbors(neighbor_low: &[f64], neighbor_high: &[f64], base: f64, n: usize) -> Vec<f64> {
    let dims = n.min(neighbor_low.len()).min(neighbor_high.len());
    let mut grad = vec![0.0; n];
    for k in 0..dims {
        grad[k] = (neighbor_high[k] - neighbor_low[k]) / 2.0;
    }

    let mut full = vec![0.0; n * n];
    for i in 0..n {
        for j in i..n {
            let mut val = grad[i] * grad[j];
            if i == j {
                val += base;
            }
            full[i * n + j] = val;
            full[j * n + i] = val;
        }
    }
    compress_symmetric(&full, n)
}

/// Inverts a symmetric metric stored upper-triangular flattened.
///
/// Expands to full storage, computes the determinant, and if
/// `|det| < det_floor` adds `tikhonov_add` to the diagonal before
/// inverting (Tikhonov-style regularization), per the component design.
/// Returns `(inverse, determinant_of_the_matrix_actually_inverted)`.
pub fn metric_inverse(
    g_upper: &[f64],
    n: usize,
    det_floor: f64,
    pivot_eps: f64,
    tikhonov_add: f64,
) -> Result<(Vec<f64>, f64), SingularMatrixError> {
    let mut full = expand_symmetric(g_upper, n);
    let mut determinant = det(&full, n, pivot_eps);

    if determinant.abs() < det_floor {
        for i in 0..n {
            full[i * n + i] += tikhonov_add;
        }
        determinant = det(&full, n, pivot_eps);
    }

    let inverse = inv(&full, n, pivot_eps)?;
    Ok((inverse, determinant))
}
