// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::errors::SingularMatrixError;
use crate::linalg::square_index;

/// Matrix inverse of the `n x n` row-major matrix `m` via Gauss-Jordan
/// elimination on the augmented `[M | I]` system.
///
/// Fails with [`SingularMatrixError`] if any pivot magnitude stays below
/// `pivot_eps`; callers may retry with a larger Tikhonov addition on the
/// diagonal (see [`crate::geometry::metric_inverse`]).
pub fn inv(m: &[f64], n: usize, pivot_eps: f64) -> Result<Vec<f64>, SingularMatrixError> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut aug = vec![0.0; n * 2 * n];
    let width = 2 * n;
    for i in 0..n {
        for j in 0..n {
            aug[i * width + j] = m[square_index(i, j, n)];
        }
        aug[i * width + n + i] = 1.0;
    }

    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_val = aug[pivot_row * width + col].abs();
        for row in (col + 1)..n {
            let val = aug[row * width + col].abs();
            if val > pivot_val {
                pivot_val = val;
                pivot_row = row;
            }
        }

        if pivot_val < pivot_eps {
            return Err(SingularMatrixError(format!(
                "pivot at column {col} has magnitude {pivot_val} below pivot_eps {pivot_eps}"
            )));
        }

        if pivot_row != col {
            for k in 0..width {
                aug.swap(col * width + k, pivot_row * width + k);
            }
        }

        let pivot = aug[col * width + col];
        for k in 0..width {
            aug[col * width + k] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[row * width + col];
            if factor == 0.0 {
                continue;
            }
            for k in 0..width {
                let sub = factor * aug[col * width + k];
                aug[row * width + k] -= sub;
            }
        }
    }

    let mut result = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            result[square_index(i, j, n)] = aug[i * width + n + j];
        }
    }
    Ok(result)
}
