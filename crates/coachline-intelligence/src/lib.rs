// ABOUTME: Questionnaire scoring engine for symptom burden and micronutrient risk
// ABOUTME: Deterministic pure functions over a question catalogue and raw answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

#![deny(unsafe_code)]

//! # Coachline Intelligence
//!
//! Scoring engine turning a client's raw questionnaire answers into
//! prioritized body-system concerns and nutrient-deficiency risks.
//!
//! Every entry point is a pure function of `(catalogue, answers, config)`:
//! no I/O, no clock, no shared mutable state. Identical inputs always give
//! identical outputs, which makes the results safe to cache and re-derive.
//!
//! ## Modules
//!
//! - **catalogue**: Seed catalogues and the per-submission question index
//! - **config**: Thresholds, sub-score weights and the recommendation hierarchy
//! - **symptom_burden**: Section totals, burden and priority classification
//! - **nutrient_risk**: Intake, symptom and risk-factor sub-scores per nutrient
//! - **recommendations**: Hierarchy-ordered guidance for flagged systems
//! - **aggregator**: Overall burden, ranked concerns and end-to-end scoring
//! - **batch**: Parallel scoring of many submissions

/// Seed catalogues and catalogue indexing
pub mod catalogue;

/// Scoring configuration
pub mod config;

/// Symptom-burden scoring engine
pub mod symptom_burden;

/// Micronutrient risk scoring engine
pub mod nutrient_risk;

/// Recommendation generator
pub mod recommendations;

/// Result aggregation and end-to-end scoring
pub mod aggregator;

/// Parallel batch scoring
pub mod batch;

mod invariants;

pub use aggregator::{
    aggregate_symptom_results, nutrient_primary_concerns, primary_concerns,
    score_micronutrient_questionnaire, score_symptom_questionnaire, summarize_nutrient_risk,
};
pub use batch::{score_micronutrient_batch, score_symptom_batch};
pub use catalogue::{
    micronutrient_catalogue, naq_catalogue, seed_catalogue, seed_catalogue_version, CatalogueIndex,
};
pub use config::{ConfigError, RecommendationHierarchy, ScoringConfig};
pub use nutrient_risk::{
    classify_risk, compute_component_scores, compute_nutrient_score, compute_nutrient_scores,
    contributing_factors, NutrientScores,
};
pub use recommendations::{generate_recommendations, RecommendationGenerator};
pub use symptom_burden::{
    classify_priority, compute_overall_burden, compute_section_scores, SectionScores,
};
