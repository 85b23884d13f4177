// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::linalg::vector_norm;

#[test]
fn norm_of_unit_vector_is_one() {
    let v = vec![1.0, 0.0, 0.0];
    assert!((vector_norm(&v, 3) - 1.0).abs() < 1e-12);
}

#[test]
fn norm_truncates_to_dims() {
    let v = vec![3.0, 4.0, 100.0];
    assert!((vector_norm(&v, 2) - 5.0).abs() < 1e-12);
}

#[test]
fn norm_clamps_dims_to_vector_len() {
    let v = vec![3.0, 4.0];
    assert!((vector_norm(&v, 100) - 5.0).abs() < 1e-12);
}
