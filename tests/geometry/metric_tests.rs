// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::geometry::symmetric::{compress_symmetric, expand_symmetric, upper_len};
use manifold_signatures::prelude::{build_metric_from_neighbors, metric_inverse};

#[test]
fn build_metric_is_positive_definite_on_diagonal_for_positive_base() {
    let low = vec![0.0, 0.0, 0.0];
    let high = vec![0.2, 0.4, 0.6];
    let upper = build_metric_from_neighbors(&low, &high, 1.0, 3);
    assert_eq!(upper.len(), upper_len(3));
    let full = expand_symmetric(&upper, 3);
    for i in 0..3 {
        assert!(full[i * 3 + i] > 0.0);
    }
}

#[test]
fn metric_inverse_regularizes_singular_input() {
    // All-zero gradient => outer product is exactly zero => base=0 metric is singular.
    let low = vec![0.0, 0.0];
    let high = vec![0.0, 0.0];
    let upper = build_metric_from_neighbors(&low, &high, 0.0, 2);
    let result = metric_inverse(&upper, 2, 1e-10, 1e-12, 1e-6);
    assert!(result.is_ok());
}

#[test]
fn metric_inverse_of_identity_is_identity() {
    let n = 3;
    let mut full = vec![0.0; n * n];
    for i in 0..n {
        full[i * n + i] = 1.0;
    }
    let upper = compress_symmetric(&full, n);
    let (inverse, determinant) = metric_inverse(&upper, n, 1e-10, 1e-12, 1e-6).unwrap();
    assert!((determinant - 1.0).abs() < 1e-9);
    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((inverse[i * n + j] - expected).abs() < 1e-9);
        }
    }
}
