// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

//! The three scalar operators of 4.2: semantic mass, the autopoietic
//! potential, and the humility damping term. Each is a pure function of
//! its numeric inputs; none hold or read process-wide state.

/// `M = D * (1 / max(det_g, det_floor)) * A`. `D` may be negative; its sign
/// propagates through to `M`.
pub fn semantic_mass(d: f64, det_g: f64, a: f64, det_floor: f64) -> f64 {
    d * (1.0 / det_g.max(det_floor)) * a
}

/// `Phi(C) = alpha * max(0, C - C_thr)^beta`. Strictly zero at and below
/// `c_thr`; continuous there; strictly increasing in `c` above it when
/// `alpha, beta > 0`.
pub fn autopoietic_potential(c: f64, c_thr: f64, alpha: f64, beta: f64) -> f64 {
    let above = (c - c_thr).max(0.0);
    alpha * above.powf(beta)
}

/// `H(m) = m * exp(clamp(-k * (m - r_opt), -exp_clamp, +exp_clamp))`. The
/// exponent clamp prevents overflow for extreme `m`; it does not change the
/// monotonicity guarantee within the clamp's interior.
pub fn humility(m: f64, r_opt: f64, k: f64, exp_clamp: f64) -> f64 {
    let exponent = (-k * (m - r_opt)).clamp(-exp_clamp, exp_clamp);
    m * exponent.exp()
}
