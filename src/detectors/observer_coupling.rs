// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::config::EngineConfig;
use crate::detectors::helpers::{clip01, l2_distance, mean};
use crate::errors::KernelError;
use crate::linalg::vector_norm;
use crate::store::{DataStore, Order};
use crate::types::{PointId, SignatureRecord, SignatureType, Timestamp};

const TWELVE_HOURS: i64 = 12 * 3600;

fn small_window_norm(field: &[f64], w: usize) -> f64 {
    let start = 1.min(field.len());
    let slice = &field[start..];
    vector_norm(slice, w.min(slice.len()))
}

fn latest_coupling_magnitude<S: DataStore>(store: &S, point_id: PointId) -> Result<Option<f64>, KernelError> {
    let couplings = store.list_couplings(Some(point_id), i64::MIN, Order::Descending, 1)?;
    Ok(couplings.first().map(|c| c.coupling_magnitude))
}

/// Systematically reads neutral or positive neighbors as threats: a
/// negatively biased coherence reading paired with a high concentration of
/// low-coupling, high-mass points in its own recent history.
pub fn paranoid_interpretation<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let Some(point) = store.get_point(point_id)? else {
        return Ok(None);
    };

    let samples = store.list_user_points(&point.source_fingerprint, now - TWELVE_HOURS, 20)?;
    if samples.len() <= 3 {
        return Ok(None);
    }
    let sample_count = samples.len();

    let bias = mean(
        &samples
            .iter()
            .map(|p| (0.5 - small_window_norm(&p.coherence_field, config.small_window)).max(0.0))
            .collect::<Vec<f64>>(),
    );

    let mut threat_count = 0usize;
    for p in &samples {
        let Some(mass) = p.semantic_mass else {
            continue;
        };
        if mass <= config.thresholds.paranoid_mass_min {
            continue;
        }
        if let Some(magnitude) = latest_coupling_magnitude(store, p.id)? {
            if magnitude < config.thresholds.paranoid_magnitude_max {
                threat_count += 1;
            }
        }
    }
    let threat_conc = threat_count as f64 / sample_count as f64;

    if !(bias > config.thresholds.paranoid_bias_min && threat_conc > config.thresholds.paranoid_threat_conc_min) {
        return Ok(None);
    }

    let severity = clip01(bias * threat_conc * 2.0);
    let evidence = format!("bias={bias:.4} threat_conc={threat_conc:.4} samples={sample_count}");
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::ParanoidInterpretation,
        severity,
        vec![bias, threat_conc],
        evidence,
        now,
    )))
}

/// The point's coherence field drifts away from its own recent trajectory
/// faster than it drifts from an external baseline: its internal model has
/// come unmoored from the rest of the field.
pub fn observer_solipsism<S: DataStore>(
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
    if c_mag <= config.thresholds.solipsism_c_mag_min {
        return Ok(None);
    }

    let Some(baseline) = store.latest_cross_source_point(&point.source_fingerprint)? else {
        return Ok(None);
    };

    let samples = store.list_user_points(&point.source_fingerprint, i64::MIN, 10)?;
    if samples.len() <= 2 {
        return Ok(None);
    }

    let delta_self = mean(
        &samples
            .iter()
            .map(|p| l2_distance(&p.coherence_field, &point.coherence_field, n))
            .collect::<Vec<f64>>(),
    );
    let delta_cons = mean(
        &samples
            .iter()
            .map(|p| l2_distance(&p.coherence_field, &baseline.coherence_field, n))
            .collect::<Vec<f64>>(),
    );

    let ratio = delta_self / c_mag;
    if ratio <= config.thresholds.solipsism_ratio_min {
        return Ok(None);
    }

    let severity = clip01(ratio * delta_cons);
    let evidence = format!("delta_self={delta_self:.4} delta_cons={delta_cons:.4} ratio={ratio:.4}");
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::ObserverSolipsism,
        severity,
        vec![delta_self, delta_cons, ratio],
        evidence,
        now,
    )))
}

/// Nearly all of the point's relational strength is self-coupling rather
/// than coupling to the rest of the field: it attends almost exclusively
/// to itself.
pub fn semantic_narcissism<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
) -> Result<Option<SignatureRecord>, KernelError> {
    let Some(point) = store.get_point(point_id)? else {
        return Ok(None);
    };

    let couplings = store.list_couplings(Some(point_id), now - TWELVE_HOURS, Order::Ascending, usize::MAX)?;

    let mut total = 0.0;
    let mut self_strength = 0.0;
    let mut n_self = 0usize;
    let mut n_ext = 0usize;
    for c in &couplings {
        let Some(source_point) = store.get_point(c.p)? else {
            continue;
        };
        if source_point.source_fingerprint != point.source_fingerprint {
            continue;
        }
        total += c.coupling_magnitude;
        if c.is_self() {
            self_strength += c.coupling_magnitude;
            n_self += 1;
        } else {
            n_ext += 1;
        }
    }

    if !(total > 0.0 && n_self + n_ext > 3) {
        return Ok(None);
    }
    let external = total - self_strength;
    let self_ratio = self_strength / total;
    let external_ratio = external / total;

    if !(self_ratio > config.thresholds.narcissism_self_ratio_min
        && external_ratio < config.thresholds.narcissism_external_ratio_max)
    {
        return Ok(None);
    }

    let severity = clip01(self_ratio * (1.0 - external_ratio));
    let evidence = format!("T={total:.4} S={self_strength:.4} E={external:.4} n_self={n_self} n_ext={n_ext}");
    Ok(Some(SignatureRecord::new(
        point_id,
        SignatureType::SemanticNarcissism,
        severity,
        vec![self_ratio, external_ratio],
        evidence,
        now,
    )))
}
