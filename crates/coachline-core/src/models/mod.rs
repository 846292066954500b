// ABOUTME: Questionnaire data models shared by the scoring engine and its callers
// ABOUTME: Re-exports catalogue, answer and score record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Data models
//!
//! All records here are plain data: they serialize directly to persistence
//! rows and to the payloads the coaching UI renders.

/// Raw answers and their typed interpretation
pub mod answer;
/// Question catalogue records
pub mod questionnaire;
/// Computed score records
pub mod scores;

pub use answer::{Answer, AnswerLevel, AnswerValue, Answers};
pub use questionnaire::{Question, QuestionType, QuestionnaireKind, RiskComponent};
pub use scores::{
    AggregateResult, ComponentScores, NutrientRiskSummary, NutrientScore, PriorityLevel,
    RiskCategory, ScoringDiagnostics, SectionScore,
};
