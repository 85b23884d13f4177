// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::config::EngineConfig;
use crate::detectors::helpers::{clip01, l2_distance, mean};
use crate::errors::KernelError;
use crate::geometry::mean_abs_ricci_diagonal;
use crate::scalar_ops::autopoietic_potential;
use crate::store::DataStore;
use crate::types::{PointId, SignatureRecord, SignatureType, Timestamp};

const SIX_HOURS: i64 = 6 * 3600;

/// A > A_crit, C_mag > C_thr, and the constraining force dominates the
/// autopoietic potential by more than `tau`: the point has locked onto an
/// attractor it no longer updates from evidence.
pub fn attractor_dogmatism<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let Some(point) = store.get_point(point_id)? else {
        return Ok(None);
    };
    let n = config.active_dim;
    let c_thr = config.scalar_ops.coherence_threshold;
    let a_crit = config.thresholds.dogmatism_a_crit;
    let tau = config.thresholds.dogmatism_force_ratio_max;

    let a = point.attractor_stability;
    let c_mag = point.coherence_magnitude_or_compute(n);

    if !(a > a_crit && c_mag > config.thresholds.dogmatism_c_mag_min) {
        return Ok(None);
    }

    let force = (c_mag - c_thr).abs() * c_mag;
    let phi = autopoietic_potential(c_mag, c_thr, 2.0, 2.0);
    let force_ratio = force / phi.max(1e-10);

    if force_ratio <= tau {
        return Ok(None);
    }

    let severity = clip01(force_ratio / 10.0);
    let evidence = format!(
        "A={a:.4} C_mag={c_mag:.4} constraining_force={force:.6} Phi={phi:.6} force_ratio={force_ratio:.4}"
    );
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::AttractorDogmatism,
        severity,
        vec![a, c_mag, force, phi],
        evidence,
        now,
    )))
}

/// Near-zero coherence drift combined with a sustained high semantic mass:
/// the point's beliefs have stopped moving under new evidence.
pub fn belief_calcification<S: DataStore>(
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

    let trajectory = store.list_conversation_points(&conv_id, now - SIX_HOURS)?;
    let others: Vec<&crate::types::ManifoldPoint> = trajectory.iter().filter(|p| p.id != point_id).collect();
    if others.is_empty() {
        return Ok(None);
    }

    let distances: Vec<f64> = others
        .iter()
        .map(|p| l2_distance(&p.coherence_field, &point.coherence_field, n))
        .collect();
    let delta = mean(&distances);

    let masses: Vec<f64> = others.iter().filter_map(|p| p.semantic_mass).collect();
    if masses.is_empty() {
        return Ok(None);
    }
    let pi = mean(&masses);

    if !(delta < config.thresholds.calcification_delta_max && pi > config.thresholds.calcification_pi_min) {
        return Ok(None);
    }

    let severity = clip01((pi / (delta + 1e-10)) / 50.0);
    let evidence = format!("delta={delta:.6} pi={pi:.4} samples={}", others.len());
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::BeliefCalcification,
        severity,
        vec![delta, pi],
        evidence,
        now,
    )))
}

/// Near-frozen evolution rate paired with sustained curvature pressure: the
/// local metric has crystallized around the point instead of continuing to
/// adapt.
pub fn metric_crystallization<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let Some(point) = store.get_point(point_id)? else {
        return Ok(None);
    };
    let n = config.active_dim;

    let Some(mass) = point.semantic_mass else {
        return Ok(None);
    };
    let Some(ricci) = point.ricci_curvature.as_deref() else {
        return Ok(None);
    };

    let evolution_rate = 0.1 * mass.abs();
    let curvature_pressure = mean_abs_ricci_diagonal(ricci, n);

    if !(evolution_rate < config.thresholds.crystallization_evolution_rate_max
        && curvature_pressure > config.thresholds.crystallization_curvature_pressure_min)
    {
        return Ok(None);
    }

    let severity = clip01(curvature_pressure / (evolution_rate + 1e-10) / 100.0);
    let evidence = format!("evolution_rate={evolution_rate:.6} curvature_pressure={curvature_pressure:.6}");
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::MetricCrystallization,
        severity,
        vec![evolution_rate, curvature_pressure],
        evidence,
        now,
    )))
}
