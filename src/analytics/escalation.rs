// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::completion::Completion;
use crate::config::EngineConfig;
use crate::deadline::Deadline;
use crate::detectors::helpers::{clip01, l2_distance};
use crate::errors::KernelError;
use crate::store::DataStore;
use crate::types::{EscalationRecord, PointId};

/// Walks `point_ids` in timestamp order and scores the velocity,
/// acceleration, trajectory, and urgency of the coherence field at each
/// non-initial step, per 4.6. `deadline` is checked once per step; on
/// expiry the records already scored are returned as `Incomplete`.
pub fn escalation_trajectory<S: DataStore>(
    store: &S,
    point_ids: &[PointId],
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Completion<Vec<EscalationRecord>>, KernelError> {
    let n = config.active_dim;

    let mut points = Vec::with_capacity(point_ids.len());
    for &id in point_ids {
        if let Some(p) = store.get_point(id)? {
            points.push(p);
        }
    }
    points.sort_by_key(|p| p.created_at);

    let mut records = Vec::new();
    let mut complete = true;
    for window in points.windows(2) {
        if deadline.is_expired() {
            complete = false;
            break;
        }
        let (prev, curr) = (&window[0], &window[1]);

        let dt = (curr.created_at - prev.created_at).max(1) as f64;
        let velocity = l2_distance(&curr.coherence_field, &prev.coherence_field, n) / dt;
        let scalar_curvature = curr.scalar_curvature.unwrap_or(0.0);
        let acceleration = scalar_curvature * velocity;
        let mass = curr.semantic_mass.unwrap_or(0.0);

        let trajectory = if acceleration > 0.2 && mass > 0.5 {
            acceleration * mass * 2.0
        } else {
            acceleration * 0.5
        };

        let low_humility = store
            .latest_wisdom(curr.id)?
            .map(|w| w.humility_factor < 0.3)
            .unwrap_or(false);
        let urgency = if acceleration > 0.3 && low_humility {
            clip01(acceleration * mass * 1.5)
        } else {
            0.3
        };

        records.push(EscalationRecord::new(curr.id, velocity, acceleration, trajectory, urgency));
    }

    Ok(if complete {
        Completion::Complete(records)
    } else {
        Completion::Incomplete(records)
    })
}
