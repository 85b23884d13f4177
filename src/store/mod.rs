// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

//! The only external collaborator the core consumes: a queryable,
//! read-mostly store of points, couplings, and wisdom records. Durable
//! storage, ingestion, and schema management live outside this crate; the
//! core only ever calls through [`DataStore`].

mod memory;

pub use memory::InMemoryStore;

use crate::errors::StoreError;
use crate::types::{ManifoldPoint, PointId, RecursiveCoupling, SignatureRecord, Timestamp, WisdomField};

/// Ascending or descending timestamp ordering for a ranged query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// The data-store contract of 6. Every method is a bounded lookup or
/// windowed range scan; none may block indefinitely, and none mutate
/// anything other than the two append-only sinks at the bottom.
pub trait DataStore {
    fn get_point(&self, id: PointId) -> Result<Option<ManifoldPoint>, StoreError>;

    /// Points in `conv_id` created at or after `since`, ascending timestamp order.
    fn list_conversation_points(
        &self,
        conv_id: &str,
        since: Timestamp,
    ) -> Result<Vec<ManifoldPoint>, StoreError>;

    /// Points sourced from `fingerprint` created at or after `since`,
    /// descending timestamp order, capped at `limit`.
    fn list_user_points(
        &self,
        fingerprint: &str,
        since: Timestamp,
        limit: usize,
    ) -> Result<Vec<ManifoldPoint>, StoreError>;

    /// Couplings touching `point_id` (or all, when `None`) created at or
    /// after `since`, in the requested order, capped at `limit`.
    fn list_couplings(
        &self,
        point_id: Option<PointId>,
        since: Timestamp,
        order: Order,
        limit: usize,
    ) -> Result<Vec<RecursiveCoupling>, StoreError>;

    fn latest_wisdom(&self, point_id: PointId) -> Result<Option<WisdomField>, StoreError>;

    /// The most recently created point whose source fingerprint differs
    /// from `excluding_fingerprint`, used as a baseline by Observer Solipsism.
    fn latest_cross_source_point(&self, excluding_fingerprint: &str) -> Result<Option<ManifoldPoint>, StoreError>;

    fn append_signature(&mut self, record: SignatureRecord) -> Result<(), StoreError>;

    fn append_evolution_snapshot(&mut self, point_id: PointId, new_coherence_field: Vec<f64>) -> Result<(), StoreError>;
}
