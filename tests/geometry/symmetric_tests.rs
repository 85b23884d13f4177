// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use manifold_signatures::geometry::symmetric::{compress_symmetric, expand_symmetric, upper_len};

#[test]
fn round_trips_through_compress_and_expand() {
    let n = 5;
    let mut full = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            let v = (i + j) as f64;
            full[i * n + j] = v;
        }
    }
    // Force symmetry before compressing, as a real metric would have.
    for i in 0..n {
        for j in 0..n {
            full[i * n + j] = full[i * n + j].max(full[j * n + i]);
        }
    }
    let upper = compress_symmetric(&full, n);
    assert_eq!(upper.len(), upper_len(n));
    let round_tripped = expand_symmetric(&upper, n);
    assert_eq!(round_tripped, full);
}

#[test]
fn upper_len_matches_known_values() {
    assert_eq!(upper_len(1), 1);
    assert_eq!(upper_len(2), 3);
    assert_eq!(upper_len(3), 6);
}
