// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

//! The twelve signature detectors of 4.5, grouped by category, plus the
//! combined entry point that runs all of them over one point and
//! concatenates whatever fires. Every detector is a pure function of a
//! [`DataStore`] snapshot, a point id, a reference clock, and an
//! [`EngineConfig`]; none mutate the store themselves. `detect_all` is the
//! only function in this module that does, via [`DataStore::append_signature`].

mod fragmentation;
pub(crate) mod helpers;
mod inflation;
mod observer_coupling;
mod rigidity;

pub use fragmentation::{attractor_splintering, coherence_dissolution, reference_decay};
pub use inflation::{delusional_expansion, recurgent_parasitism, semantic_hypercoherence};
pub use observer_coupling::{observer_solipsism, paranoid_interpretation, semantic_narcissism};
pub use rigidity::{attractor_dogmatism, belief_calcification, metric_crystallization};

use crate::completion::Completion;
use crate::config::EngineConfig;
use crate::deadline::Deadline;
use crate::errors::KernelError;
use crate::store::DataStore;
use crate::types::{PointId, SignatureRecord, Timestamp};

/// The Rigidity group: dogmatism, calcification, crystallization. `deadline`
/// is checked before each detector; once it has elapsed, the group stops
/// starting new detectors and reports `Completion::Incomplete` with
/// whatever already fired (5. Concurrency & Resource Model).
pub fn detect_rigidity<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Completion<Vec<SignatureRecord>>, KernelError> {
    let mut records = Vec::new();
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(attractor_dogmatism(store, point_id, now, config)?);
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(belief_calcification(store, point_id, now, config)?);
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(metric_crystallization(store, point_id, now, config)?);
    Ok(Completion::Complete(records))
}

/// The Fragmentation group: splintering, dissolution, reference decay.
pub fn detect_fragmentation<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Completion<Vec<SignatureRecord>>, KernelError> {
    let mut records = Vec::new();
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(attractor_splintering(store, point_id, now, config)?);
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(coherence_dissolution(store, point_id, now, config)?);
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(reference_decay(store, point_id, now, config)?);
    Ok(Completion::Complete(records))
}

/// The Inflation group: delusional expansion, hypercoherence, parasitism.
pub fn detect_inflation<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Completion<Vec<SignatureRecord>>, KernelError> {
    let mut records = Vec::new();
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(delusional_expansion(store, point_id, now, config)?);
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(semantic_hypercoherence(store, point_id, now, config)?);
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(recurgent_parasitism(store, point_id, now, config)?);
    Ok(Completion::Complete(records))
}

/// The Observer-Coupling group: paranoid interpretation, solipsism, narcissism.
pub fn detect_observer_coupling<S: DataStore>(
    store: &S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Completion<Vec<SignatureRecord>>, KernelError> {
    let mut records = Vec::new();
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(paranoid_interpretation(store, point_id, now, config)?);
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(observer_solipsism(store, point_id, now, config)?);
    if deadline.is_expired() {
        return Ok(Completion::Incomplete(records));
    }
    records.extend(semantic_narcissism(store, point_id, now, config)?);
    Ok(Completion::Complete(records))
}

/// Runs all twelve detectors over `point_id` in category order, appends
/// whatever fires to the store, and returns the same records. Stops
/// starting new groups once `deadline` has elapsed, returning
/// `Completion::Incomplete` with everything finalized so far.
pub fn detect_all<S: DataStore>(
    store: &mut S,
    point_id: PointId,
    now: Timestamp,
    config: &EngineConfig,
    deadline: &Deadline,
) -> Result<Completion<Vec<SignatureRecord>>, KernelError> {
    let mut records = Vec::new();
    let mut complete = true;

    let rigidity = detect_rigidity(store, point_id, now, config, deadline)?;
    complete &= rigidity.is_complete();
    records.extend(rigidity.into_inner());

    if complete {
        let fragmentation = detect_fragmentation(store, point_id, now, config, deadline)?;
        complete &= fragmentation.is_complete();
        records.extend(fragmentation.into_inner());
    }

    if complete {
        let inflation = detect_inflation(store, point_id, now, config, deadline)?;
        complete &= inflation.is_complete();
        records.extend(inflation.into_inner());
    }

    if complete {
        let observer_coupling = detect_observer_coupling(store, point_id, now, config, deadline)?;
        complete &= observer_coupling.is_complete();
        records.extend(observer_coupling.into_inner());
    }

    for record in &records {
        store.append_signature(record.clone())?;
    }

    Ok(if complete {
        Completion::Complete(records)
    } else {
        Completion::Incomplete(records)
    })
}
