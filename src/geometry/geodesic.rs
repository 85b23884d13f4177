// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::linalg::{christoffel_index, square_index};

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Integrates a linearized path between two truncated fields and accumulates
/// its length, per the Verlet-style integrator in the component design.
///
/// `christoffel_*` are the endpoints' connection coefficients, linearly
/// interpolated step by step; `metric_*` is each endpoint's full `n x n`
/// inverse-free metric. Either pair may be absent, in which case the
/// corresponding term (acceleration, or the metric-weighted step length)
/// falls back to its Euclidean equivalent. Step-length non-negativity is
/// guaranteed by taking the absolute value under the square root.
#[allow(clippy::too_many_arguments)]
pub fn geodesic_distance(
    field_a: &[f64],
    field_b: &[f64],
    christoffel_a: Option<&[f64]>,
    christoffel_b: Option<&[f64]>,
    metric_a: Option<&[f64]>,
    metric_b: Option<&[f64]>,
    n: usize,
    steps: usize,
) -> f64 {
    let dims = n.min(field_a.len()).min(field_b.len());
    if dims == 0 || steps == 0 {
        return 0.0;
    }

    let mut pos = field_a[..dims].to_vec();
    let dt = 1.0 / steps as f64;
    let mut vel: Vec<f64> = (0..dims).map(|i| (field_b[i] - field_a[i]) * dt).collect();

    let mut total_length = 0.0_f64;
    for step in 0..steps {
        let t = step as f64 / steps as f64;

        let mut acc = vec![0.0; dims];
        if let (Some(ga), Some(gb)) = (christoffel_a, christoffel_b) {
            for i in 0..dims {
                let mut a_i = 0.0;
                for j in 0..dims {
                    for k in 0..dims {
                        let gamma_ijk = lerp(ga[christoffel_index(i, j, k, n)], gb[christoffel_index(i, j, k, n)], t);
                        a_i -= gamma_ijk * vel[j] * vel[k];
                    }
                }
                acc[i] = a_i;
            }
        }

        let mut delta = vec![0.0; dims];
        let mut new_pos = vec![0.0; dims];
        let mut new_vel = vec![0.0; dims];
        for i in 0..dims {
            let half_vel = vel[i] + 0.5 * acc[i] * dt;
            new_pos[i] = pos[i] + half_vel * dt;
            delta[i] = new_pos[i] - pos[i];
            new_vel[i] = half_vel + 0.5 * acc[i] * dt;
        }

        let seg_len = match (metric_a, metric_b) {
            (Some(ma), Some(mb)) => {
                let mut quad = 0.0;
                for i in 0..dims {
                    for j in 0..dims {
                        let g_avg = 0.5 * (ma[square_index(i, j, n)] + mb[square_index(i, j, n)]);
                        quad += g_avg * delta[i] * delta[j];
                    }
                }
                quad.abs().sqrt()
            }
            _ => delta.iter().map(|d| d * d).sum::<f64>().sqrt(),
        };

        total_length += seg_len;
        pos = new_pos;
        vel = new_vel;
    }

    total_length
}
