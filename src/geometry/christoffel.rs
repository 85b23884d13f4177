// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::deadline::Deadline;
use crate::errors::KernelError;
use crate::linalg::{christoffel_index, square_index};

/// Connection coefficients `Gamma^k_{ij} = 1/2 * g^{kl} (d_i g_{jl} + d_j g_{il} - d_l g_{ij})`.
///
/// `dg`, when present, holds `d_m g_{ab}` flattened the same way as the
/// returned tensor (`(m, a, b) -> (m*n+a)*n+b`). When absent, every
/// derivative term is treated as zero, which collapses the connection to
/// the flat-metric case used by [`crate::geometry::scalar_curvature`]'s
/// zero-curvature property test.
///
/// `O(n^4)`: inner loop over `l` inside the `(k, i, j)` triple. `deadline`
/// is checked once per outer `k` index, per the "check at each outer index"
/// cancellation rule; on expiry the call reports
/// [`KernelError::DeadlineExceeded`] with zero records completed (this
/// routine produces one tensor, not a record stream).
pub fn christoffel(g_inv: &[f64], dg: Option<&[f64]>, n: usize, deadline: &Deadline) -> Result<Vec<f64>, KernelError> {
    let mut gamma = vec![0.0; n * n * n];
    for k in 0..n {
        if deadline.is_expired() {
            return Err(KernelError::DeadlineExceeded { completed: 0 });
        }
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for l in 0..n {
                    let (d_i_g_jl, d_j_g_il, d_l_g_ij) = match dg {
                        Some(d) => (
                            d[christoffel_index(i, j, l, n)],
                            d[christoffel_index(j, i, l, n)],
                            d[christoffel_index(l, i, j, n)],
                        ),
                        None => (0.0, 0.0, 0.0),
                    };
                    sum += g_inv[square_index(k, l, n)] * (d_i_g_jl + d_j_g_il - d_l_g_ij);
                }
                gamma[christoffel_index(k, i, j, n)] = 0.5 * sum;
            }
        }
    }
    Ok(gamma)
}
