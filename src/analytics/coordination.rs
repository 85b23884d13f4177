// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::completion::Completion;
use crate::config::EngineConfig;
use crate::deadline::Deadline;
use crate::detectors::helpers::{clip01, l2_distance, mean};
use crate::errors::KernelError;
use crate::store::{DataStore, Order};
use crate::types::{ClusterRecord, PointId, Timestamp};
use std::collections::BTreeMap;

struct Pair {
    bucket: i64,
    p: PointId,
    q: PointId,
    coupling: f64,
    geometric_coherence: f64,
    avg_pair_mass: f64,
}

/// Buckets cross-source, high-coupling pairs by the hour and scores each
/// bucket's coordination confidence, per 4.6. `deadline` is checked once per
/// coupling scanned; on expiry, whatever clusters had already been scored
/// from buckets seen so far are still built and returned as `Incomplete`.
pub fn coordination_clusters<S: DataStore>(
    store: &S,
    now: Timestamp,
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Completion<Vec<ClusterRecord>>, KernelError> {
    let window = config.clustering.window_seconds;
    let threshold = config.clustering.coupling_threshold;
    let n = config.active_dim;

    let couplings = store.list_couplings(None, now - window, Order::Ascending, usize::MAX)?;

    let mut pairs = Vec::new();
    let mut complete = true;
    for c in &couplings {
        if deadline.is_expired() {
            complete = false;
            break;
        }
        if c.coupling_magnitude < threshold {
            continue;
        }
        let Some(p) = store.get_point(c.p)? else {
            continue;
        };
        let Some(q) = store.get_point(c.q)? else {
            continue;
        };
        if p.source_fingerprint == q.source_fingerprint {
            continue;
        }
        if !(p.created_at >= now - window && p.created_at <= now) {
            continue;
        }
        if !(q.created_at >= now - window && q.created_at <= now) {
            continue;
        }

        let distance = l2_distance(&p.coherence_field, &q.coherence_field, n);
        let geometric_coherence = match (p.metric_determinant, q.metric_determinant) {
            (Some(dp), Some(dq)) if dp > 0.0 && dq > 0.0 => 1.0 - (distance / (dp * dq).sqrt()),
            _ => 1.0 - distance,
        };

        let masses: Vec<f64> = [p.semantic_mass, q.semantic_mass].into_iter().flatten().collect();
        let avg_pair_mass = mean(&masses);

        pairs.push(Pair {
            bucket: c.computed_at.div_euclid(3600),
            p: c.p,
            q: c.q,
            coupling: c.coupling_magnitude,
            geometric_coherence,
            avg_pair_mass,
        });
    }

    let mut buckets: BTreeMap<i64, Vec<Pair>> = BTreeMap::new();
    for pair in pairs {
        buckets.entry(pair.bucket).or_default().push(pair);
    }

    let mut records: Vec<ClusterRecord> = buckets
        .into_iter()
        .filter_map(|(bucket, members)| {
            let cluster_size = members.len();
            if cluster_size < config.clustering.min_cluster_size {
                return None;
            }
            let avg_coupling = mean(&members.iter().map(|p| p.coupling).collect::<Vec<f64>>());
            let avg_geom_coherence = mean(&members.iter().map(|p| p.geometric_coherence).collect::<Vec<f64>>());
            let avg_mass = mean(&members.iter().map(|p| p.avg_pair_mass).collect::<Vec<f64>>());
            let confidence = clip01(avg_coupling * avg_geom_coherence * (cluster_size as f64 / 10.0) * (avg_mass / 100.0));
            if confidence <= config.clustering.confidence_min {
                return None;
            }
            let member_ids = members.iter().map(|p| (p.p, p.q)).collect();
            Some(ClusterRecord::new(
                bucket,
                cluster_size,
                avg_coupling,
                avg_geom_coherence,
                avg_mass,
                confidence,
                member_ids,
            ))
        })
        .collect();

    records.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.avg_mass.partial_cmp(&a.avg_mass).unwrap_or(std::cmp::Ordering::Equal))
    });

    Ok(if complete {
        Completion::Complete(records)
    } else {
        Completion::Incomplete(records)
    })
}
