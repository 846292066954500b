// ABOUTME: Computed score records for symptom-burden and micronutrient risk questionnaires
// ABOUTME: Pure derived data, suitable for direct persistence and rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a section's symptom burden
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    /// Burden below the medium threshold
    Low,
    /// Burden between the medium and high thresholds
    Medium,
    /// Burden at or above the high threshold
    High,
}

impl PriorityLevel {
    /// Lowercase label used in recommendation text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a nutrient's deficiency-risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Final score below the low threshold
    None,
    /// Final score between the low and moderate thresholds
    Low,
    /// Final score between the moderate and high thresholds
    Moderate,
    /// Final score at or above the high threshold
    High,
}

impl RiskCategory {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symptom-burden score for one body-system section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    /// Section name as it appears in the catalogue
    pub section: String,
    /// Weighted sum of severities
    pub total_score: f64,
    /// 3 x number of questions in the section
    pub max_possible_score: f64,
    /// Number of catalogue questions in the section
    pub question_count: usize,
    /// `total_score / question_count`, in [0, 3]
    pub symptom_burden: f64,
    /// Classification of `symptom_burden`
    pub priority: PriorityLevel,
}

/// The three independent micronutrient sub-scores, each in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// Deficiency risk implied by dietary intake
    pub intake: f64,
    /// Deficiency risk implied by reported symptoms
    pub symptom: f64,
    /// Deficiency risk implied by risk factors
    pub risk_factor: f64,
}

/// Deficiency-risk score for one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientScore {
    /// Nutrient code, e.g. `vitamin_d`
    pub nutrient: String,
    /// Intake sub-score percentage
    pub intake_score: f64,
    /// Symptom sub-score percentage
    pub symptom_score: f64,
    /// Risk-factor sub-score percentage
    pub risk_score: f64,
    /// Weighted combination of the three sub-scores
    pub final_score: f64,
    /// Classification of `final_score`
    pub category: RiskCategory,
    /// Labels of the sub-scores above the notable threshold, intake first
    pub contributing_factors: Vec<String>,
}

/// Observability counters returned with every scoring result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringDiagnostics {
    /// Answers parsed and used
    pub answers_scored: usize,
    /// Answers skipped because their value could not be parsed
    pub malformed_answers: usize,
    /// Answer keys that match no catalogue question
    pub unknown_questions: usize,
    /// Computed values that had to be clamped into their declared range
    pub clamped_values: usize,
}

impl ScoringDiagnostics {
    /// Fold another set of counters into this one
    pub fn merge(&mut self, other: Self) {
        self.answers_scored += other.answers_scored;
        self.malformed_answers += other.malformed_answers;
        self.unknown_questions += other.unknown_questions;
        self.clamped_values += other.clamped_values;
    }
}

/// Aggregated symptom-burden result for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Per-section scores in catalogue order
    pub sections: Vec<SectionScore>,
    /// Pooled burden across all sections, in [0, 3]
    pub overall_burden: f64,
    /// `high` sections, descending burden, ties in catalogue order
    pub primary_concerns: Vec<String>,
    /// Guidance strings in fixed hierarchy order
    pub recommendations: Vec<String>,
    /// Parse and clamp counters
    pub diagnostics: ScoringDiagnostics,
}

/// Aggregated micronutrient result for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientRiskSummary {
    /// Per-nutrient scores, ascending by nutrient code
    pub scores: Vec<NutrientScore>,
    /// `high` risk nutrients, descending final score, ties by code
    pub primary_concerns: Vec<String>,
    /// Parse and clamp counters
    pub diagnostics: ScoringDiagnostics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering_is_monotonic() {
        assert!(PriorityLevel::Low < PriorityLevel::Medium);
        assert!(PriorityLevel::Medium < PriorityLevel::High);
        assert!(RiskCategory::None < RiskCategory::Low);
        assert!(RiskCategory::Moderate < RiskCategory::High);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&RiskCategory::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let json = serde_json::to_string(&PriorityLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn test_diagnostics_merge() {
        let mut a = ScoringDiagnostics {
            answers_scored: 2,
            malformed_answers: 1,
            ..ScoringDiagnostics::default()
        };
        a.merge(ScoringDiagnostics {
            answers_scored: 3,
            clamped_values: 1,
            ..ScoringDiagnostics::default()
        });
        assert_eq!(a.answers_scored, 5);
        assert_eq!(a.malformed_answers, 1);
        assert_eq!(a.clamped_values, 1);
    }
}
