// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::linalg::{det, square_index};

const EPS: f64 = 1e-12;

#[test]
fn det_of_identity_is_one() {
    let n = 4;
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[square_index(i, i, n)] = 1.0;
    }
    assert!((det(&m, n, EPS) - 1.0).abs() < 1e-9);
}

#[test]
fn det_with_zero_column_is_zero() {
    let m = vec![0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0, 4.0, 0.0];
    assert_eq!(det(&m, 3, EPS), 0.0);
}

#[test]
fn det_known_two_by_two() {
    let m = vec![2.0, 1.0, 1.0, 2.0];
    assert!((det(&m, 2, EPS) - 3.0).abs() < 1e-9);
}

#[test]
fn det_singular_two_by_two() {
    let m = vec![1.0, 2.0, 2.0, 4.0];
    assert_eq!(det(&m, 2, EPS), 0.0);
}

#[test]
fn det_of_empty_matrix_is_one() {
    let m: Vec<f64> = Vec::new();
    assert_eq!(det(&m, 0, EPS), 1.0);
}
