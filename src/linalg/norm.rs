// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

/// Euclidean norm of `v` over its first `dims` components, used to truncate
/// a storage-dimension vector down to the active dimension.
pub fn vector_norm(v: &[f64], dims: usize) -> f64 {
    let take = dims.min(v.len());
    v[..take].iter().map(|x| x * x).sum::<f64>().sqrt()
}
