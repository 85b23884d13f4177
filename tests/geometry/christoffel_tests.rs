// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::prelude::{christoffel, Deadline};
use std::time::Duration;

fn identity(n: usize) -> Vec<f64> {
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[i * n + i] = 1.0;
    }
    m
}

#[test]
fn flat_metric_with_no_derivative_tensor_yields_zero_connection() {
    let n = 4;
    let g_inv = identity(n);
    let gamma = christoffel(&g_inv, None, n, &Deadline::none()).unwrap();
    assert_eq!(gamma.len(), n * n * n);
    assert!(gamma.iter().all(|&x| x == 0.0));
}

#[test]
fn expired_deadline_reports_deadline_exceeded() {
    let n = 4;
    let g_inv = identity(n);
    let expired = Deadline::at(std::time::Instant::now() - Duration::from_secs(1));
    let result = christoffel(&g_inv, None, n, &expired);
    assert!(result.is_err());
}
