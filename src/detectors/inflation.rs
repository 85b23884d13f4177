// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::config::EngineConfig;
use crate::detectors::helpers::{clip01, mean};
use crate::errors::KernelError;
use crate::scalar_ops::autopoietic_potential;
use crate::store::{DataStore, Order};
use crate::types::{PointId, SignatureRecord, SignatureType, Timestamp};
use std::collections::BTreeMap;

const FOUR_HOURS: i64 = 4 * 3600;
const SIX_HOURS: i64 = 6 * 3600;

/// The autopoietic drive runs far ahead of the constraining force holding
/// the point to its attractor, while neither humility nor wisdom steps in
/// to damp it.
pub fn delusional_expansion<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let Some(point) = store.get_point(point_id)? else {
        return Ok(None);
    };
    let Some(wisdom) = store.latest_wisdom(point_id)? else {
        return Ok(None);
    };
    let n = config.active_dim;
    let c_thr = config.scalar_ops.coherence_threshold;

    let c_mag = point.coherence_magnitude_or_compute(n);
    let constraining_force = (c_mag - c_thr).abs() * config.thresholds.delusional_force_multiplier;
    if constraining_force <= 0.0 {
        return Ok(None);
    }

    let phi = autopoietic_potential(c_mag, c_thr, config.scalar_ops.autopoietic_alpha, config.scalar_ops.autopoietic_beta);
    let h = wisdom.humility_factor;
    let w = wisdom.wisdom_value;

    if !(phi > config.thresholds.delusional_phi_multiplier * constraining_force
        && h < config.thresholds.delusional_humility_max
        && w < config.thresholds.delusional_wisdom_max)
    {
        return Ok(None);
    }

    let severity = clip01(phi / (constraining_force + 1e-10) * (1.0 - h) * (1.0 - w) / 20.0);
    let evidence = format!(
        "C_mag={c_mag:.4} Phi={phi:.6} constraining_force={constraining_force:.6} H={h:.4} W={w:.4}"
    );
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::DelusionalExpansion,
        severity,
        vec![phi, constraining_force, h, w],
        evidence,
        now,
    )))
}

/// Near-saturated coherence with almost no external coupling flowing
/// through it: the point has sealed itself off from outside influence.
pub fn semantic_hypercoherence<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let Some(point) = store.get_point(point_id)? else {
        return Ok(None);
    };
    let n = config.active_dim;
    let c_mag = point.coherence_magnitude_or_compute(n);
    if c_mag <= config.thresholds.hypercoherence_c_mag_min {
        return Ok(None);
    }

    let couplings = store.list_couplings(Some(point_id), now - FOUR_HOURS, Order::Ascending, usize::MAX)?;
    if couplings.is_empty() {
        return Ok(None);
    }

    let flux = mean(&couplings.iter().map(|c| c.coupling_magnitude).collect::<Vec<f64>>());
    if flux >= config.thresholds.hypercoherence_flux_max {
        return Ok(None);
    }

    let severity = clip01(c_mag * (1.0 - flux));
    let evidence = format!("C_mag={c_mag:.4} flux={flux:.6} samples={}", couplings.len());
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::SemanticHypercoherence,
        severity,
        vec![c_mag, flux],
        evidence,
        now,
    )))
}

/// Same-source semantic mass is growing while every other source in the
/// conversation is being drained: the point is feeding on the rest of the
/// field rather than coexisting with it.
pub fn recurgent_parasitism<S: DataStore>(
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

    let trajectory = store.list_conversation_points(&conv_id, now - SIX_HOURS)?;

    let same_source_masses: Vec<f64> = trajectory
        .iter()
        .filter(|p| p.source_fingerprint == point.source_fingerprint)
        .filter_map(|p| p.semantic_mass)
        .collect();
    if same_source_masses.len() <= 2 {
        return Ok(None);
    }
    let local_growth_rate = mean(
        &same_source_masses
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect::<Vec<f64>>(),
    );

    let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for p in trajectory.iter().filter(|p| p.source_fingerprint != point.source_fingerprint) {
        if let Some(mass) = p.semantic_mass {
            buckets.entry(p.created_at / 3600).or_default().push(mass);
        }
    }
    if buckets.len() <= 2 {
        return Ok(None);
    }
    let bucket_means: Vec<f64> = buckets.values().map(|v| mean(v)).collect();
    let ecological_drain_rate = mean(
        &bucket_means
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect::<Vec<f64>>(),
    );

    if !(local_growth_rate > config.thresholds.parasitism_growth_min
        && ecological_drain_rate < config.thresholds.parasitism_drain_max)
    {
        return Ok(None);
    }

    let severity = clip01(local_growth_rate * ecological_drain_rate.abs() * 5.0);
    let evidence = format!(
        "local_growth_rate={local_growth_rate:.4} ecological_drain_rate={ecological_drain_rate:.4}"
    );
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::RecurgentParasitism,
        severity,
        vec![local_growth_rate, ecological_drain_rate],
        evidence,
        now,
    )))
}
