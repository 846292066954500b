// ABOUTME: Raw questionnaire answers and their interpretation under a question's declared type
// ABOUTME: Maps severities, yes/no, frequency and portion codes onto bounded ordinal levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use super::questionnaire::{Question, QuestionType};
use crate::constants::answer_scales::{
    self, FREQUENCY_MAX, FREQUENCY_SCALE, NO_VALUES, PORTION_MAX, PORTION_SCALE, YES_VALUES,
};
use crate::constants::symptom_burden::MAX_SEVERITY;
use crate::errors::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Answers for one submission keyed by question key
///
/// Symptom questionnaires key by composite `category_questionId`, the
/// micronutrient questionnaire by plain question id.
pub type Answers = HashMap<String, AnswerValue>;

/// A raw answer value as submitted by the respondent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Boolean-like answer
    Bool(bool),
    /// Integer answer (severity, ordinal or count)
    Integer(i64),
    /// Floating point answer
    Float(f64),
    /// Coded choice or free text
    Text(String),
    /// Explicitly left blank
    Empty,
}

impl AnswerValue {
    /// Whether the respondent left the question blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Interpret this value under the question's declared type
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::MalformedAnswer` if the value cannot be read as
    /// the question's type or falls outside its scale.
    pub fn level_for(&self, question: &Question) -> Result<AnswerLevel, ScoringError> {
        let malformed = |reason: String| ScoringError::malformed_answer(&question.id, reason);

        match question.question_type {
            QuestionType::Scale0To3 => {
                let severity = self
                    .as_whole_number()
                    .ok_or_else(|| malformed(format!("expected integer severity, got {self:?}")))?;
                if !(0..=i64::from(MAX_SEVERITY)).contains(&severity) {
                    return Err(malformed(format!(
                        "severity {severity} outside 0-{MAX_SEVERITY}"
                    )));
                }
                Ok(AnswerLevel::new(severity as f64, f64::from(MAX_SEVERITY)))
            }
            QuestionType::YesNo => {
                let present = self
                    .as_yes_no()
                    .ok_or_else(|| malformed(format!("expected yes/no, got {self:?}")))?;
                Ok(AnswerLevel::new(if present { 1.0 } else { 0.0 }, 1.0))
            }
            QuestionType::Frequency => self
                .as_coded(FREQUENCY_SCALE, FREQUENCY_MAX)
                .map(|ordinal| AnswerLevel::new(f64::from(ordinal), f64::from(FREQUENCY_MAX)))
                .ok_or_else(|| malformed(format!("unknown frequency {self:?}"))),
            QuestionType::Portion => self
                .as_coded(PORTION_SCALE, PORTION_MAX)
                .map(|ordinal| AnswerLevel::new(f64::from(ordinal), f64::from(PORTION_MAX)))
                .ok_or_else(|| malformed(format!("unknown portion {self:?}"))),
            QuestionType::Numeric => {
                let max = question.max_value.unwrap_or(1.0);
                if !max.is_finite() || max <= 0.0 {
                    return Err(malformed(format!("question max_value {max} is not positive")));
                }
                let value = self
                    .as_number()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or_else(|| malformed(format!("expected non-negative number, got {self:?}")))?;
                Ok(AnswerLevel::new(value, max))
            }
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Bool(_) | Self::Empty => None,
        }
    }

    fn as_whole_number(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            Self::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    fn as_yes_no(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            Self::Integer(0) => Some(false),
            Self::Integer(1) => Some(true),
            Self::Text(text) => {
                let normalized = text.trim().to_ascii_lowercase();
                if YES_VALUES.contains(&normalized.as_str()) {
                    Some(true)
                } else if NO_VALUES.contains(&normalized.as_str()) {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn as_coded(&self, scale: &[(&str, u8)], max: u8) -> Option<u8> {
        match self {
            Self::Text(text) => answer_scales::lookup(scale, text),
            // UIs that submit the ordinal directly
            Self::Integer(v) => u8::try_from(*v).ok().filter(|ordinal| *ordinal <= max),
            _ => None,
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A parsed answer: a level on a bounded scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerLevel {
    /// Position on the scale
    pub value: f64,
    /// Top of the scale
    pub max: f64,
}

impl AnswerLevel {
    /// Create a level on a scale topping out at `max`
    #[must_use]
    pub const fn new(value: f64, max: f64) -> Self {
        Self { value, max }
    }

    /// Position on the scale as a fraction clamped to [0, 1]
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }
}

/// A single stored answer row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Composite key or plain question id
    pub question_key: String,
    /// Raw submitted value
    pub value: AnswerValue,
}

impl Answer {
    /// Collect answer rows into the keyed mapping the engine consumes
    ///
    /// A later row for the same key replaces an earlier one.
    pub fn collect(rows: impl IntoIterator<Item = Self>) -> Answers {
        rows.into_iter()
            .map(|row| (row.question_key, row.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(question_type: QuestionType) -> Question {
        Question {
            id: "q1".into(),
            section: "Test".into(),
            scoring_category: "test".into(),
            scoring_weight: 1.0,
            nutrient_relevance: None,
            question_type,
            order: 1,
            text: String::new(),
            max_value: Some(10.0),
        }
    }

    #[test]
    fn test_severity_parsing() {
        let q = question(QuestionType::Scale0To3);
        assert_eq!(AnswerValue::Integer(2).level_for(&q).unwrap().value, 2.0);
        assert_eq!(AnswerValue::from("3").level_for(&q).unwrap().value, 3.0);
        assert!(AnswerValue::Integer(4).level_for(&q).is_err());
        assert!(AnswerValue::Integer(-1).level_for(&q).is_err());
        assert!(AnswerValue::Bool(true).level_for(&q).is_err());
        assert!(AnswerValue::Float(1.5).level_for(&q).is_err());
    }

    #[test]
    fn test_yes_no_parsing() {
        let q = question(QuestionType::YesNo);
        assert!((AnswerValue::from("Yes").level_for(&q).unwrap().fraction() - 1.0).abs() < 1e-9);
        assert!(AnswerValue::Bool(false).level_for(&q).unwrap().fraction().abs() < 1e-9);
        assert!(AnswerValue::from("maybe").level_for(&q).is_err());
    }

    #[test]
    fn test_coded_parsing() {
        let freq = question(QuestionType::Frequency);
        assert_eq!(AnswerValue::from("daily").level_for(&freq).unwrap().fraction(), 1.0);
        assert_eq!(AnswerValue::from("never").level_for(&freq).unwrap().fraction(), 0.0);
        assert!(AnswerValue::Integer(9).level_for(&freq).is_err());

        let portion = question(QuestionType::Portion);
        let level = AnswerValue::from("small").level_for(&portion).unwrap();
        assert!((level.fraction() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_parsing_clamps_fraction() {
        let q = question(QuestionType::Numeric);
        let level = AnswerValue::Float(25.0).level_for(&q).unwrap();
        assert!((level.fraction() - 1.0).abs() < 1e-9);
        assert!(AnswerValue::Float(-2.0).level_for(&q).is_err());
    }

    #[test]
    fn test_null_deserializes_as_empty() {
        let answers: Answers =
            serde_json::from_str(r#"{"a": null, "b": 2, "c": "daily", "d": true}"#).unwrap();
        assert!(answers["a"].is_empty());
        assert_eq!(answers["b"], AnswerValue::Integer(2));
        assert_eq!(answers["d"], AnswerValue::Bool(true));
    }
}
