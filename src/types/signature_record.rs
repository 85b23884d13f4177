// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

use crate::types::{PointId, Timestamp};
use std::fmt;

/// The twelve orthogonal detector kinds, grouped by the category named in
/// the component design: rigidity, fragmentation, inflation, observer-coupling.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum SignatureType {
    // Rigidity
    AttractorDogmatism,
    BeliefCalcification,
    MetricCrystallization,
    // Fragmentation
    AttractorSplintering,
    CoherenceDissolution,
    ReferenceDecay,
    // Inflation
    DelusionalExpansion,
    SemanticHypercoherence,
    RecurgentParasitism,
    // Observer-coupling
    ParanoidInterpretation,
    ObserverSolipsism,
    SemanticNarcissism,
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SignatureType::AttractorDogmatism => "ATTRACTOR_DOGMATISM",
            SignatureType::BeliefCalcification => "BELIEF_CALCIFICATION",
            SignatureType::MetricCrystallization => "METRIC_CRYSTALLIZATION",
            SignatureType::AttractorSplintering => "ATTRACTOR_SPLINTERING",
            SignatureType::CoherenceDissolution => "COHERENCE_DISSOLUTION",
            SignatureType::ReferenceDecay => "REFERENCE_DECAY",
            SignatureType::DelusionalExpansion => "DELUSIONAL_EXPANSION",
            SignatureType::SemanticHypercoherence => "SEMANTIC_HYPERCOHERENCE",
            SignatureType::RecurgentParasitism => "RECURGENT_PARASITISM",
            SignatureType::ParanoidInterpretation => "PARANOID_INTERPRETATION",
            SignatureType::ObserverSolipsism => "OBSERVER_SOLIPSISM",
            SignatureType::SemanticNarcissism => "SEMANTIC_NARCISSISM",
        };
        write!(f, "{name}")
    }
}

/// A single detector hit. `severity` is always clipped to `[0, 1]` before
/// construction; `geometric_signature` carries the kind-specific diagnostic
/// magnitudes named in the component design (e.g. `{A, C_mag, force, phi}`
/// for Attractor Dogmatism).
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureRecord {
    pub point_id: PointId,
    pub signature_type: SignatureType,
    pub severity: f64,
    pub geometric_signature: Vec<f64>,
    pub mathematical_evidence: String,
    pub computed_at: Timestamp,
}

impl SignatureRecord {
    pub fn new(
        point_id: PointId,
        signature_type: SignatureType,
        severity: f64,
        geometric_signature: Vec<f64>,
        mathematical_evidence: impl Into<String>,
        computed_at: Timestamp,
    ) -> Self {
        debug_assert!(severity.is_finite() && (0.0..=1.0).contains(&severity));
        Self {
            point_id,
            signature_type,
            severity,
            geometric_signature,
            mathematical_evidence: mathematical_evidence.into(),
            computed_at,
        }
    }
}
