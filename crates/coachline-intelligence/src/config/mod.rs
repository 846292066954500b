// ABOUTME: Scoring configuration for symptom-burden, micronutrient risk and recommendations
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Scoring Configuration Module
//!
//! Provides type-safe configuration for the scoring engine. The engine's pure
//! functions always take a configuration argument; [`ScoringConfig::global`]
//! is the process-wide instance callers use when they have no per-request
//! override.
//!
//! # Module Structure
//!
//! - `symptom` - Burden thresholds for priority classification
//! - `nutrient` - Sub-score weights and risk category thresholds
//! - `hierarchy` - Fixed body-system precedence for recommendations

pub mod error;
pub mod hierarchy;
pub mod nutrient;
pub mod symptom;

pub use error::ConfigError;
pub use hierarchy::{HierarchyEntry, RecommendationHierarchy};
pub use nutrient::{ComponentWeights, NutrientRiskConfig, RiskThresholds};
pub use symptom::SymptomBurdenConfig;

use coachline_core::constants::{nutrient_risk::MAX_PERCENT, symptom_burden::MAX_BURDEN};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Tolerance when checking that weights sum to 1
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Main scoring configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Symptom-burden priority thresholds
    pub symptom_burden: SymptomBurdenConfig,
    /// Micronutrient risk weights and thresholds
    pub nutrient_risk: NutrientRiskConfig,
    /// Body-system precedence for recommendations
    pub hierarchy: RecommendationHierarchy,
}

impl ScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are out of order or outside their
    /// scale, weights are negative or don't sum to 1, or the hierarchy is
    /// empty or repeats a system.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let burden = &self.symptom_burden;
        if !(0.0..=MAX_BURDEN).contains(&burden.medium_threshold)
            || !(0.0..=MAX_BURDEN).contains(&burden.high_threshold)
        {
            return Err(ConfigError::InvalidRange(
                "burden thresholds must lie within 0-3",
            ));
        }
        if burden.medium_threshold >= burden.high_threshold {
            return Err(ConfigError::InvalidRange(
                "medium burden threshold must be < high burden threshold",
            ));
        }

        let thresholds = &self.nutrient_risk.thresholds;
        if !(thresholds.low > 0.0
            && thresholds.low < thresholds.moderate
            && thresholds.moderate < thresholds.high
            && thresholds.high <= MAX_PERCENT)
        {
            return Err(ConfigError::InvalidRange(
                "risk thresholds must satisfy 0 < low < moderate < high <= 100",
            ));
        }
        if !(0.0..=MAX_PERCENT).contains(&self.nutrient_risk.notable_component_threshold) {
            return Err(ConfigError::InvalidRange(
                "notable component threshold must lie within 0-100",
            ));
        }

        let weights = &self.nutrient_risk.weights;
        if [weights.intake, weights.symptom, weights.risk_factor]
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigError::InvalidWeights(
                "component weights must be finite and not negative",
            ));
        }
        if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "component weights must sum to 1.0",
            ));
        }

        self.hierarchy.validate()
    }

    /// Helper function to parse and apply an environment variable override
    ///
    /// An unset variable leaves `target` untouched; a value that is not
    /// valid unicode is an error rather than silently ignored.
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Symptom-burden overrides
        Self::apply_env_var(
            "COACHLINE_BURDEN_HIGH_THRESHOLD",
            &mut self.symptom_burden.high_threshold,
        )?;
        Self::apply_env_var(
            "COACHLINE_BURDEN_MEDIUM_THRESHOLD",
            &mut self.symptom_burden.medium_threshold,
        )?;

        // Risk category overrides
        Self::apply_env_var(
            "COACHLINE_RISK_HIGH_THRESHOLD",
            &mut self.nutrient_risk.thresholds.high,
        )?;
        Self::apply_env_var(
            "COACHLINE_RISK_MODERATE_THRESHOLD",
            &mut self.nutrient_risk.thresholds.moderate,
        )?;
        Self::apply_env_var(
            "COACHLINE_RISK_LOW_THRESHOLD",
            &mut self.nutrient_risk.thresholds.low,
        )?;

        // Component weight overrides
        Self::apply_env_var(
            "COACHLINE_INTAKE_WEIGHT",
            &mut self.nutrient_risk.weights.intake,
        )?;
        Self::apply_env_var(
            "COACHLINE_SYMPTOM_WEIGHT",
            &mut self.nutrient_risk.weights.symptom,
        )?;
        Self::apply_env_var(
            "COACHLINE_RISK_FACTOR_WEIGHT",
            &mut self.nutrient_risk.weights.risk_factor,
        )?;
        Self::apply_env_var(
            "COACHLINE_NOTABLE_COMPONENT_THRESHOLD",
            &mut self.nutrient_risk.notable_component_threshold,
        )?;

        Ok(self)
    }
}
