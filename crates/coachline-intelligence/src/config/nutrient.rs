// ABOUTME: Micronutrient risk configuration: sub-score weights and category thresholds
// ABOUTME: Configures the intake/symptom/risk-factor split and the notable-component cut-off
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Micronutrient Risk Configuration
//!
//! The final nutrient score is a fixed-weight combination of three sub-scores.
//! The default 40/40/20 split weighs diet and symptoms equally and treats risk
//! factors as a modifier.

use coachline_core::constants::nutrient_risk::{
    DEFAULT_HIGH_THRESHOLD, DEFAULT_INTAKE_WEIGHT, DEFAULT_LOW_THRESHOLD,
    DEFAULT_MODERATE_THRESHOLD, DEFAULT_NOTABLE_COMPONENT_THRESHOLD, DEFAULT_RISK_FACTOR_WEIGHT,
    DEFAULT_SYMPTOM_WEIGHT,
};
use serde::{Deserialize, Serialize};

/// Micronutrient risk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientRiskConfig {
    /// Sub-score weights for the final score
    pub weights: ComponentWeights,
    /// Final-score thresholds for risk categories
    pub thresholds: RiskThresholds,
    /// A sub-score above this percentage is a contributing factor: 60
    pub notable_component_threshold: f64,
}

/// Weights combining the three sub-scores; must sum to 1
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentWeights {
    /// Intake share: 0.4
    pub intake: f64,
    /// Symptom share: 0.4
    pub symptom: f64,
    /// Risk-factor share: 0.2
    pub risk_factor: f64,
}

impl ComponentWeights {
    /// Sum of the three shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.intake + self.symptom + self.risk_factor
    }
}

/// Risk category thresholds on the 0-100 final score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// `high` at or above: 75
    pub high: f64,
    /// `moderate` at or above: 50
    pub moderate: f64,
    /// `low` at or above: 25
    pub low: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            intake: DEFAULT_INTAKE_WEIGHT,
            symptom: DEFAULT_SYMPTOM_WEIGHT,
            risk_factor: DEFAULT_RISK_FACTOR_WEIGHT,
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            moderate: DEFAULT_MODERATE_THRESHOLD,
            low: DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl Default for NutrientRiskConfig {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            thresholds: RiskThresholds::default(),
            notable_component_threshold: DEFAULT_NOTABLE_COMPONENT_THRESHOLD,
        }
    }
}
