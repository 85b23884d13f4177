// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::linalg::{inv, square_index};

const EPS: f64 = 1e-12;

#[test]
fn inv_of_identity_is_identity() {
    let n = 3;
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[square_index(i, i, n)] = 1.0;
    }
    let inverse = inv(&m, n, EPS).unwrap();
    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((inverse[square_index(i, j, n)] - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn inv_known_two_by_two() {
    let m = vec![2.0, 1.0, 1.0, 2.0];
    let inverse = inv(&m, 2, EPS).unwrap();
    let expected = [2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0, 2.0 / 3.0];
    for (got, want) in inverse.iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-9);
    }
}

#[test]
fn inv_singular_matrix_fails() {
    let m = vec![1.0, 2.0, 2.0, 4.0];
    assert!(inv(&m, 2, EPS).is_err());
}

#[test]
fn inv_times_original_is_identity_for_well_conditioned_matrix() {
    let n = 3;
    let m = vec![4.0, 0.0, 1.0, 0.0, 3.0, 0.0, 1.0, 0.0, 2.0];
    let inverse = inv(&m, n, EPS).unwrap();

    let mut product = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            let mut acc = 0.0;
            for k in 0..n {
                acc += inverse[square_index(i, k, n)] * m[square_index(k, j, n)];
            }
            product[square_index(i, j, n)] = acc;
        }
    }
    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((product[square_index(i, j, n)] - expected).abs() < 1e-6);
        }
    }
}
