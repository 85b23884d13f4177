// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::linalg::square_index;

/// Determinant of the `n x n` row-major matrix `m`, by Gaussian elimination
/// with partial pivoting.
///
/// If, after partial pivot selection, a pivot magnitude falls below
/// `pivot_eps`, the matrix is treated as singular and `0.0` is returned
/// rather than propagating an error: a zero determinant is itself a valid,
/// meaningful result for callers such as `semantic_mass`.
pub fn det(m: &[f64], n: usize, pivot_eps: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let mut a = m.to_vec();
    let mut sign = 1.0_f64;

    for col in 0..n {
        // Partial pivot: largest magnitude in this column at or below the diagonal.
        let mut pivot_row = col;
        let mut pivot_val = a[square_index(col, col, n)].abs();
        for row in (col + 1)..n {
            let val = a[square_index(row, col, n)].abs();
            if val > pivot_val {
                pivot_val = val;
                pivot_row = row;
            }
        }

        if pivot_val < pivot_eps {
            return 0.0;
        }

        if pivot_row != col {
            for k in 0..n {
                a.swap(square_index(col, k, n), square_index(pivot_row, k, n));
            }
            sign = -sign;
        }

        let pivot = a[square_index(col, col, n)];
        for row in (col + 1)..n {
            let factor = a[square_index(row, col, n)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                let sub = factor * a[square_index(col, k, n)];
                a[square_index(row, k, n)] -= sub;
            }
        }
    }

    let mut result = sign;
    for i in 0..n {
        result *= a[square_index(i, i, n)];
    }
    result
}
