// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::prelude::{christoffel, ricci, scalar_curvature, Deadline};
use std::time::Duration;

fn identity(n: usize) -> Vec<f64> {
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[i * n + i] = 1.0;
    }
    m
}

#[test]
fn scalar_curvature_of_a_flat_metric_is_exactly_zero() {
    let n = 4;
    let g_inv = identity(n);
    let gamma = christoffel(&g_inv, None, n, &Deadline::none()).unwrap();
    let ricci_ij = ricci(&gamma, None, n, &Deadline::none()).unwrap();
    assert!(ricci_ij.iter().all(|&x| x == 0.0));
    assert_eq!(scalar_curvature(&ricci_ij, &g_inv, n), 0.0);
}

#[test]
fn expired_deadline_reports_deadline_exceeded() {
    let n = 4;
    let gamma = vec![0.0; n * n * n];
    let expired = Deadline::at(std::time::Instant::now() - Duration::from_secs(1));
    let result = ricci(&gamma, None, n, &expired);
    assert!(result.is_err());
}
