// ABOUTME: Question catalogue records with section, scoring category and weights
// ABOUTME: Immutable reference data created at seed time and never mutated by scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use crate::constants::symptom_burden::DEFAULT_SCORING_WEIGHT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which questionnaire a catalogue belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireKind {
    /// Nutritional assessment questionnaire scored by symptom burden
    Naq,
    /// Micronutrient deficiency-risk questionnaire
    Micronutrient,
}

impl QuestionnaireKind {
    /// Stable identifier used in storage keys and error messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Naq => "naq",
            Self::Micronutrient => "micronutrient",
        }
    }
}

impl fmt::Display for QuestionnaireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionnaireKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naq" => Ok(Self::Naq),
            "micronutrient" | "micronutrients" => Ok(Self::Micronutrient),
            other => Err(format!("unknown questionnaire '{other}'")),
        }
    }
}

/// Declared shape of a question's raw answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    /// Integer severity 0-3
    #[serde(rename = "scale_0_3")]
    Scale0To3,
    /// Yes/no, boolean-like
    #[serde(rename = "yes_no")]
    YesNo,
    /// Coded dietary frequency
    #[serde(rename = "frequency")]
    Frequency,
    /// Coded portion size
    #[serde(rename = "portion")]
    Portion,
    /// Free-form non-negative number bounded by the question's `max_value`
    #[serde(rename = "numeric")]
    Numeric,
}

/// Micronutrient sub-score a question feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskComponent {
    /// Dietary frequency/portion questions (inverted: low intake is risk)
    Intake,
    /// Symptom presence questions
    Symptom,
    /// Diagnosed conditions, medications and other risk factors
    RiskFactor,
}

impl RiskComponent {
    /// Interpret a scoring category as a micronutrient component
    #[must_use]
    pub fn from_category(category: &str) -> Option<Self> {
        match category.trim().to_ascii_lowercase().as_str() {
            "intake" | "diet" | "dietary" => Some(Self::Intake),
            "symptom" | "symptoms" => Some(Self::Symptom),
            "risk_factor" | "risk_factors" | "risk" => Some(Self::RiskFactor),
            _ => None,
        }
    }
}

fn default_scoring_weight() -> f64 {
    DEFAULT_SCORING_WEIGHT
}

/// A single catalogue question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within a questionnaire
    pub id: String,
    /// Body system or nutrient-dietary category the question belongs to
    pub section: String,
    /// Scoring category; prefixes the composite answer key
    pub scoring_category: String,
    /// Multiplier applied to the answer (default 1)
    #[serde(default = "default_scoring_weight")]
    pub scoring_weight: f64,
    /// Per-nutrient relevance coefficients (micronutrient questionnaire only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrient_relevance: Option<BTreeMap<String, f64>>,
    /// Declared answer type
    pub question_type: QuestionType,
    /// Display order within the questionnaire
    pub order: u32,
    /// Question wording shown to the respondent
    #[serde(default)]
    pub text: String,
    /// Upper bound for `numeric` answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

impl Question {
    /// Key under which symptom questionnaires submit this question's answer
    #[must_use]
    pub fn composite_key(&self) -> String {
        format!("{}_{}", self.scoring_category, self.id)
    }

    /// Relevance coefficient for a nutrient, if the question concerns it
    #[must_use]
    pub fn relevance_for(&self, nutrient: &str) -> Option<f64> {
        self.nutrient_relevance
            .as_ref()
            .and_then(|map| map.get(nutrient).copied())
    }
}
