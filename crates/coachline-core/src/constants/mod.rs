// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Severity scales, classification thresholds and coded-answer lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Constants module
//!
//! Constants are grouped by the questionnaire concern they describe rather than
//! being kept in a single large file.

/// Coded answer lookup tables (frequency, portion, yes/no)
pub mod answer_scales;

/// Symptom-burden scale and default priority thresholds
pub mod symptom_burden {
    /// Highest severity a symptom question accepts
    pub const MAX_SEVERITY: u8 = 3;

    /// Upper bound of a section or overall burden
    pub const MAX_BURDEN: f64 = 3.0;

    /// Burden at or above which a section is classified `high`
    pub const DEFAULT_HIGH_THRESHOLD: f64 = 2.0;

    /// Burden at or above which a section is classified `medium`
    pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 1.0;

    /// Weight applied to a question whose catalogue record carries none
    pub const DEFAULT_SCORING_WEIGHT: f64 = 1.0;
}

/// Micronutrient risk scale and default classification thresholds
pub mod nutrient_risk {
    /// Upper bound of every nutrient percentage
    pub const MAX_PERCENT: f64 = 100.0;

    /// Final score at or above which a nutrient is `high` risk
    pub const DEFAULT_HIGH_THRESHOLD: f64 = 75.0;

    /// Final score at or above which a nutrient is `moderate` risk
    pub const DEFAULT_MODERATE_THRESHOLD: f64 = 50.0;

    /// Final score at or above which a nutrient is `low` risk
    pub const DEFAULT_LOW_THRESHOLD: f64 = 25.0;

    /// Share of the final score taken from dietary intake
    pub const DEFAULT_INTAKE_WEIGHT: f64 = 0.4;

    /// Share of the final score taken from reported symptoms
    pub const DEFAULT_SYMPTOM_WEIGHT: f64 = 0.4;

    /// Share of the final score taken from risk factors
    pub const DEFAULT_RISK_FACTOR_WEIGHT: f64 = 0.2;

    /// A component above this percentage is listed as a contributing factor
    pub const DEFAULT_NOTABLE_COMPONENT_THRESHOLD: f64 = 60.0;

    /// Contributing-factor label for the intake component
    pub const LOW_INTAKE_LABEL: &str = "Low dietary intake";

    /// Contributing-factor label for the symptom component
    pub const SYMPTOMS_LABEL: &str = "Reported symptoms";

    /// Contributing-factor label for the risk-factor component
    pub const RISK_FACTORS_LABEL: &str = "Risk factors present";
}
