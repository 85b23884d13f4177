// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Manifold Signatures Authors and Contributors. All Rights Reserved.

//! Process-wide constants are limited to the two dimensions every geometric
//! operator is defined over; every other threshold travels as a per-call
//! parameter with the default given here, per the "no global state" design
//! note.

/// Storage dimension N: length of every field vector at rest.
pub const STORAGE_DIM: usize = 2000;

/// Active dimension n: the leading slice every geometric operator reads.
pub const ACTIVE_DIM: usize = 100;

/// Small-window constant w used by a handful of detector reductions.
pub const SMALL_WINDOW: usize = 50;

/// Numerical guard rails shared by the linear algebra and geometry kernels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericGuards {
    pub det_floor: f64,
    pub pivot_eps: f64,
    pub tikhonov_add: f64,
    pub exp_clamp: f64,
    pub generic_eps: f64,
}

impl Default for NumericGuards {
    fn default() -> Self {
        Self {
            det_floor: 1e-10,
            pivot_eps: 1e-12,
            tikhonov_add: 1e-6,
            exp_clamp: 50.0,
            generic_eps: 1e-10,
        }
    }
}

/// Parameters for the scalar operators of 4.2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarOpsConfig {
    pub coherence_threshold: f64,
    pub autopoietic_alpha: f64,
    pub autopoietic_beta: f64,
    pub humility_r_opt: f64,
    pub humility_k: f64,
}

impl Default for ScalarOpsConfig {
    fn default() -> Self {
        Self {
            coherence_threshold: 0.7,
            autopoietic_alpha: 1.0,
            autopoietic_beta: 2.0,
            humility_r_opt: 0.5,
            humility_k: 2.0,
        }
    }
}

/// Parameters for the explicit evolution step of 4.7.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionConfig {
    pub dt: f64,
    pub finite_diff_h: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            finite_diff_h: 1e-6,
        }
    }
}

/// Gating thresholds for the twelve signature detectors of 4.5. Every
/// numeric constant a detector compares a computed quantity against lives
/// here rather than as a local `let` binding, so a caller can tune a single
/// detector without forking the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorThresholds {
    // Attractor Dogmatism
    pub dogmatism_a_crit: f64,
    pub dogmatism_c_mag_min: f64,
    pub dogmatism_force_ratio_max: f64,
    // Belief Calcification
    pub calcification_delta_max: f64,
    pub calcification_pi_min: f64,
    // Metric Crystallization
    pub crystallization_evolution_rate_max: f64,
    pub crystallization_curvature_pressure_min: f64,
    // Attractor Splintering
    pub splintering_direction_change_distance: f64,
    pub splintering_ratio_min: f64,
    pub splintering_min_samples: usize,
    // Coherence Dissolution
    pub dissolution_c_norm_min: f64,
    pub dissolution_grad_multiplier: f64,
    // Reference Decay
    pub reference_decay_rate_max: f64,
    pub reference_decay_compensatory_max: f64,
    // Delusional Expansion
    pub delusional_force_multiplier: f64,
    pub delusional_phi_multiplier: f64,
    pub delusional_humility_max: f64,
    pub delusional_wisdom_max: f64,
    // Semantic Hypercoherence
    pub hypercoherence_c_mag_min: f64,
    pub hypercoherence_flux_max: f64,
    // Recurgent Parasitism
    pub parasitism_growth_min: f64,
    pub parasitism_drain_max: f64,
    // Paranoid Interpretation
    pub paranoid_mass_min: f64,
    pub paranoid_magnitude_max: f64,
    pub paranoid_bias_min: f64,
    pub paranoid_threat_conc_min: f64,
    // Observer Solipsism
    pub solipsism_c_mag_min: f64,
    pub solipsism_ratio_min: f64,
    // Semantic Narcissism
    pub narcissism_self_ratio_min: f64,
    pub narcissism_external_ratio_max: f64,
}

impl Default for DetectorThresholds {
    fn default() -> Self {
        Self {
            dogmatism_a_crit: 0.8,
            dogmatism_c_mag_min: 0.7,
            dogmatism_force_ratio_max: 3.0,
            calcification_delta_max: 0.01,
            calcification_pi_min: 0.3,
            crystallization_evolution_rate_max: 0.01,
            crystallization_curvature_pressure_min: 0.1,
            splintering_direction_change_distance: 0.3,
            splintering_ratio_min: 2.0,
            splintering_min_samples: 2,
            dissolution_c_norm_min: 0.1,
            dissolution_grad_multiplier: 3.0,
            reference_decay_rate_max: -0.1,
            reference_decay_compensatory_max: 0.3,
            delusional_force_multiplier: 0.5,
            delusional_phi_multiplier: 5.0,
            delusional_humility_max: 0.1,
            delusional_wisdom_max: 0.2,
            hypercoherence_c_mag_min: 0.95,
            hypercoherence_flux_max: 0.1,
            parasitism_growth_min: 0.5,
            parasitism_drain_max: -0.2,
            paranoid_mass_min: 0.6,
            paranoid_magnitude_max: 0.3,
            paranoid_bias_min: 0.3,
            paranoid_threat_conc_min: 0.8,
            solipsism_c_mag_min: 0.1,
            solipsism_ratio_min: 0.5,
            narcissism_self_ratio_min: 0.8,
            narcissism_external_ratio_max: 0.2,
        }
    }
}

/// Parameters for `coordination_clusters`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusteringConfig {
    pub window_seconds: i64,
    pub coupling_threshold: f64,
    pub min_cluster_size: usize,
    pub confidence_min: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            window_seconds: 24 * 3600,
            coupling_threshold: 0.8,
            min_cluster_size: 3,
            confidence_min: 0.5,
        }
    }
}

/// Top-level configuration bag threaded through every public call. All
/// fields default to the values named in the component design; callers
/// override only what they need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub active_dim: usize,
    pub storage_dim: usize,
    pub small_window: usize,
    pub guards: NumericGuards,
    pub scalar_ops: ScalarOpsConfig,
    pub evolution: EvolutionConfig,
    pub clustering: ClusteringConfig,
    pub thresholds: DetectorThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            active_dim: ACTIVE_DIM,
            storage_dim: STORAGE_DIM,
            small_window: SMALL_WINDOW,
            guards: NumericGuards::default(),
            scalar_ops: ScalarOpsConfig::default(),
            evolution: EvolutionConfig::default(),
            clustering: ClusteringConfig::default(),
            thresholds: DetectorThresholds::default(),
        }
    }
}
