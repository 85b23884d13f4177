// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::config::EngineConfig;
use crate::detectors::helpers::{clip01, l2_distance, mean};
use crate::errors::KernelError;
use crate::geometry::finite_diffs;
use crate::linalg::vector_norm;
use crate::scalar_ops::autopoietic_potential;
use crate::store::{DataStore, Order};
use crate::types::{PointId, SignatureRecord, SignatureType, Timestamp};

const TWO_HOURS: i64 = 2 * 3600;

/// Counts direction changes (successive pairwise distance over `0.3`) in a
/// 2h window and compares the resulting generation rate against the
/// autopoietic growth rate; a point spinning off attractors faster than it
/// can integrate them is splintering rather than deepening.
pub fn attractor_splintering<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let Some(point) = store.get_point(point_id)? else {
        return Ok(None);
    };
    let Some(conv_id) = point.conversation_id.clone() else {
        return Ok(None);
    };
    let n = config.active_dim;

    let mut trajectory = store.list_conversation_points(&conv_id, now - TWO_HOURS)?;
    trajectory.sort_by_key(|p| p.created_at);
    if trajectory.len() < 2 {
        return Ok(None);
    }

    let successive_distances: Vec<f64> = trajectory
        .windows(2)
        .map(|pair| l2_distance(&pair[0].coherence_field, &pair[1].coherence_field, n))
        .collect();

    let sample_count = successive_distances.len();
    if sample_count <= config.thresholds.splintering_min_samples {
        return Ok(None);
    }

    let unique_directions = successive_distances
        .iter()
        .filter(|&&d| d > config.thresholds.splintering_direction_change_distance)
        .count();
    let attractor_generation_rate = unique_directions as f64 * 3600.0 / TWO_HOURS as f64;

    let mean_distance = mean(&successive_distances);
    let direction_variance = mean(
        &successive_distances
            .iter()
            .map(|d| (d - mean_distance).powi(2))
            .collect::<Vec<f64>>(),
    );
    let c_mag = point.coherence_magnitude_or_compute(n);
    let phi = autopoietic_potential(c_mag, config.scalar_ops.coherence_threshold, 1.0, 2.0);
    let autopoietic_generation_rate = (phi * direction_variance / sample_count as f64).max(0.0);

    let ratio = attractor_generation_rate / autopoietic_generation_rate.max(1e-10);
    if ratio <= config.thresholds.splintering_ratio_min {
        return Ok(None);
    }

    let severity = clip01(ratio / 10.0);
    let evidence = format!(
        "unique_directions={unique_directions} attractor_rate={attractor_generation_rate:.4} autopoietic_rate={autopoietic_generation_rate:.6} ratio={ratio:.4}"
    );
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::AttractorSplintering,
        severity,
        vec![attractor_generation_rate, autopoietic_generation_rate, ratio],
        evidence,
        now,
    )))
}

/// The coherence field's gradient outruns the field itself: local structure
/// is dissolving faster than it is being replaced.
pub fn coherence_dissolution<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let Some(point) = store.get_point(point_id)? else {
        return Ok(None);
    };
    let n = config.active_dim;

    let c_norm = point.coherence_magnitude_or_compute(n);
    if c_norm <= config.thresholds.dissolution_c_norm_min {
        return Ok(None);
    }

    let fd = finite_diffs(&point.coherence_field, n, config.evolution.finite_diff_h);
    let grad_norm = vector_norm(&fd.first, n);
    let second_sum: f64 = fd.second.iter().sum();

    if !(grad_norm > config.thresholds.dissolution_grad_multiplier * c_norm && second_sum > 0.0) {
        return Ok(None);
    }

    let severity = clip01((grad_norm / c_norm) / 10.0);
    let evidence = format!("c_norm={c_norm:.4} grad_norm={grad_norm:.4} second_derivative_sum={second_sum:.4}");
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::CoherenceDissolution,
        severity,
        vec![c_norm, grad_norm, second_sum],
        evidence,
        now,
    )))
}

/// Coupling magnitude trending down over the last ten observations without
/// enough wisdom-driven compensation to arrest it.
pub fn reference_decay<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let mut couplings = store.list_couplings(Some(point_id), i64::MIN, Order::Descending, 10)?;
    if couplings.len() < 2 {
        return Ok(None);
    }
    couplings.reverse(); // chronological, oldest first

    let magnitudes: Vec<f64> = couplings.iter().map(|c| c.coupling_magnitude).collect();
    let mean_magnitude = mean(&magnitudes);
    let deviations: Vec<f64> = magnitudes.iter().map(|m| m - mean_magnitude).collect();
    let per_step_changes: Vec<f64> = deviations.windows(2).map(|w| w[1] - w[0]).collect();
    let decay_rate = mean(&per_step_changes);

    let wisdom = store.latest_wisdom(point_id)?;
    let Some(wisdom) = wisdom else {
        return Ok(None);
    };
    let compensatory_wisdom = wisdom.wisdom_value * wisdom.humility_factor;

    if !(decay_rate < config.thresholds.reference_decay_rate_max
        && compensatory_wisdom < config.thresholds.reference_decay_compensatory_max)
    {
        return Ok(None);
    }

    let severity = clip01(decay_rate.abs() * (1.0 - compensatory_wisdom) * 10.0);
    let evidence = format!("decay_rate={decay_rate:.6} compensatory_wisdom={compensatory_wisdom:.4}");
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::ReferenceDecay,
        severity,
        vec![decay_rate, compensatory_wisdom],
        evidence,
        now,
    )))
}
