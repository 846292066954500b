// ABOUTME: Scoring-specific error types raised while reading catalogues and answers
// ABOUTME: Integrates with the main AppError system through a From conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! # Scoring Error Types
//!
//! - `MissingCatalogue` is non-fatal for the application: callers render a
//!   "not available" state.
//! - `MalformedAnswer` never escapes the engine. The offending answer is
//!   skipped, treated as unanswered and counted in the result diagnostics.
//! - `InvalidConfig` reports reference data that cannot be scored against.

use super::{AppError, ErrorCode};
use serde_json::json;
use thiserror::Error;

/// Errors specific to questionnaire scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// No questions exist for the requested questionnaire
    #[error("No questions found for questionnaire '{questionnaire}'")]
    MissingCatalogue {
        /// Questionnaire that was requested
        questionnaire: String,
    },

    /// An answer could not be parsed under its question's declared type
    #[error("Malformed answer for question '{question_id}': {reason}")]
    MalformedAnswer {
        /// Question the answer belongs to
        question_id: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Scoring configuration or reference data is unusable
    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),
}

impl ScoringError {
    /// Create a "missing catalogue" error
    #[must_use]
    pub fn missing_catalogue(questionnaire: impl Into<String>) -> Self {
        Self::MissingCatalogue {
            questionnaire: questionnaire.into(),
        }
    }

    /// Create a "malformed answer" error
    #[must_use]
    pub fn malformed_answer(question_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedAnswer {
            question_id: question_id.into(),
            reason: reason.into(),
        }
    }
}

impl From<ScoringError> for AppError {
    fn from(error: ScoringError) -> Self {
        match &error {
            ScoringError::MissingCatalogue { questionnaire } => {
                Self::new(ErrorCode::ResourceNotFound, error.to_string())
                    .with_resource_id(questionnaire.clone())
            }
            ScoringError::MalformedAnswer { question_id, .. } => {
                Self::new(ErrorCode::InvalidFormat, error.to_string())
                    .with_details(json!({ "question_id": question_id }))
            }
            ScoringError::InvalidConfig(_) => Self::new(ErrorCode::ConfigInvalid, error.to_string()),
        }
    }
}
