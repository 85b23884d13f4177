// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::errors::StoreError;
use crate::store::{DataStore, Order};
use crate::types::{ManifoldPoint, PointId, RecursiveCoupling, SignatureRecord, Timestamp, WisdomField};
use std::collections::HashMap;

/// A plain in-memory `DataStore`, useful for tests and for embedding the
/// engine in a process that does not need durable storage. Not meant to
/// back a production deployment: every query is a linear scan.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    points: HashMap<PointId, ManifoldPoint>,
    couplings: Vec<RecursiveCoupling>,
    wisdom: HashMap<PointId, WisdomField>,
    pub signatures: Vec<SignatureRecord>,
    pub evolution_snapshots: Vec<(PointId, Vec<f64>)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_point(&mut self, point: ManifoldPoint) {
        self.points.insert(point.id, point);
    }

    pub fn insert_coupling(&mut self, coupling: RecursiveCoupling) {
        self.couplings.push(coupling);
    }

    pub fn insert_wisdom(&mut self, wisdom: WisdomField) {
        self.wisdom.insert(wisdom.point_id, wisdom);
    }
}

impl DataStore for InMemoryStore {
    fn get_point(&self, id: PointId) -> Result<Option<ManifoldPoint>, StoreError> {
        Ok(self.points.get(&id).cloned())
    }

    fn list_conversation_points(&self, conv_id: &str, since: Timestamp) -> Result<Vec<ManifoldPoint>, StoreError> {
        let mut points: Vec<ManifoldPoint> = self
            .points
            .values()
            .filter(|p| p.conversation_id.as_deref() == Some(conv_id) && p.created_at >= since)
            .cloned()
            .collect();
        points.sort_by_key(|p| p.created_at);
        Ok(points)
    }

    fn list_user_points(
        &self,
        fingerprint: &str,
        since: Timestamp,
        limit: usize,
    ) -> Result<Vec<ManifoldPoint>, StoreError> {
        let mut points: Vec<ManifoldPoint> = self
            .points
            .values()
            .filter(|p| p.source_fingerprint == fingerprint && p.created_at >= since)
            .cloned()
            .collect();
        points.sort_by_key(|p| std::cmp::Reverse(p.created_at));
        points.truncate(limit);
        Ok(points)
    }

    fn list_couplings(
        &self,
        point_id: Option<PointId>,
        since: Timestamp,
        order: Order,
        limit: usize,
    ) -> Result<Vec<RecursiveCoupling>, StoreError> {
        let mut couplings: Vec<RecursiveCoupling> = self
            .couplings
            .iter()
            .filter(|c| c.computed_at >= since)
            .filter(|c| point_id.map(|id| c.p == id || c.q == id).unwrap_or(true))
            .cloned()
            .collect();
        match order {
            Order::Ascending => couplings.sort_by_key(|c| c.computed_at),
            Order::Descending => couplings.sort_by_key(|c| std::cmp::Reverse(c.computed_at)),
        }
        couplings.truncate(limit);
        Ok(couplings)
    }

    fn latest_wisdom(&self, point_id: PointId) -> Result<Option<WisdomField>, StoreError> {
        Ok(self.wisdom.get(&point_id).copied())
    }

    fn latest_cross_source_point(&self, excluding_fingerprint: &str) -> Result<Option<ManifoldPoint>, StoreError> {
        let point = self
            .points
            .values()
            .filter(|p| p.source_fingerprint != excluding_fingerprint)
            .max_by_key(|p| p.created_at)
            .cloned();
        Ok(point)
    }

    fn append_signature(&mut self, record: SignatureRecord) -> Result<(), StoreError> {
        self.signatures.push(record);
        Ok(())
    }

    fn append_evolution_snapshot(&mut self, point_id: PointId, new_coherence_field: Vec<f64>) -> Result<(), StoreError> {
        self.evolution_snapshots.push((point_id, new_coherence_field));
        Ok(())
    }
}
