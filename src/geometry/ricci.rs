// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::deadline::Deadline;
use crate::errors::KernelError;
use crate::linalg::{christoffel_index, square_index};

/// `(m, k, i, j) -> ((m*n+k)*n+i)*n+j`, the flat index for `d_m Gamma^k_{ij}`.
/// Kept local: an `n^4` array at `n=100` is 10^8 doubles, so callers almost
/// never materialize it and pass `None` for `dgamma` below instead.
#[inline(always)]
fn christoffel_deriv_index(m: usize, k: usize, i: usize, j: usize, n: usize) -> usize {
    ((m * n + k) * n + i) * n + j
}

/// Ricci curvature `R_{ij} = d_k Gamma^k_{ij} - d_j Gamma^k_{ik} + Gamma^l_{ij} Gamma^k_{kl} - Gamma^l_{ik} Gamma^k_{jl}`.
///
/// `dgamma`, when absent, zeroes both derivative terms, per the component
/// design. `O(n^4)`; `deadline` is checked once per outer `i` index.
pub fn ricci(gamma: &[f64], dgamma: Option<&[f64]>, n: usize, deadline: &Deadline) -> Result<Vec<f64>, KernelError> {
    let mut out = vec![0.0; n * n];
    for i in 0..n {
        if deadline.is_expired() {
            return Err(KernelError::DeadlineExceeded { completed: 0 });
        }
        for j in 0..n {
            let mut deriv_term = 0.0;
            if let Some(dg) = dgamma {
                for k in 0..n {
                    deriv_term +=
                        dg[christoffel_deriv_index(k, k, i, j, n)] - dg[christoffel_deriv_index(j, k, i, k, n)];
                }
            }

            let mut quad_term = 0.0;
            for l in 0..n {
                for k in 0..n {
                    quad_term += gamma[christoffel_index(l, i, j, n)] * gamma[christoffel_index(k, k, l, n)]
                        - gamma[christoffel_index(l, i, k, n)] * gamma[christoffel_index(k, j, l, n)];
                }
            }

            out[square_index(i, j, n)] = deriv_term + quad_term;
        }
    }
    Ok(out)
}

/// Scalar curvature `R = sum_{ij} g^{ij} R_{ij}`.
pub fn scalar_curvature(ricci_ij: &[f64], g_inv: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            sum += g_inv[square_index(i, j, n)] * ricci_ij[square_index(i, j, n)];
        }
    }
    sum
}
