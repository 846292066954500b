// ABOUTME: Result aggregation for both questionnaires: burden, ranked concerns, recommendations
// ABOUTME: Entry points scoring a full submission from catalogue and answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Result Aggregator
//!
//! Combines per-section or per-nutrient scores into the records callers
//! persist and render. Rankings are deterministic: sorts are stable and tie
//! breaks are explicit, so answer order never affects the result.

use crate::catalogue::CatalogueIndex;
use crate::config::ScoringConfig;
use crate::nutrient_risk::{compute_nutrient_scores, NutrientScores};
use crate::recommendations::RecommendationGenerator;
use crate::symptom_burden::{compute_section_scores, pooled_burden, SectionScores};
use coachline_core::errors::ScoringError;
use coachline_core::models::{
    AggregateResult, Answers, NutrientRiskSummary, NutrientScore, PriorityLevel, Question,
    QuestionnaireKind, RiskCategory, SectionScore,
};
use std::cmp::Ordering;
use tracing::debug;

/// Sections classified `high`, by descending burden, ties in catalogue order
#[must_use]
pub fn primary_concerns(sections: &[SectionScore]) -> Vec<String> {
    let mut high: Vec<&SectionScore> = sections
        .iter()
        .filter(|s| s.priority == PriorityLevel::High)
        .collect();
    // Stable sort keeps catalogue order among equal burdens
    high.sort_by(|a, b| {
        b.symptom_burden
            .partial_cmp(&a.symptom_burden)
            .unwrap_or(Ordering::Equal)
    });
    high.into_iter().map(|s| s.section.clone()).collect()
}

/// Nutrients in `high` risk, by descending final score, ties by nutrient code
#[must_use]
pub fn nutrient_primary_concerns(scores: &[NutrientScore]) -> Vec<String> {
    let mut high: Vec<&NutrientScore> = scores
        .iter()
        .filter(|s| s.category == RiskCategory::High)
        .collect();
    high.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.nutrient.cmp(&b.nutrient))
    });
    high.into_iter().map(|s| s.nutrient.clone()).collect()
}

/// Aggregate section scores into the symptom-burden result
#[must_use]
pub fn aggregate_symptom_results(
    section_scores: SectionScores,
    generator: &RecommendationGenerator,
) -> AggregateResult {
    let SectionScores {
        sections,
        mut diagnostics,
    } = section_scores;

    AggregateResult {
        overall_burden: pooled_burden(&sections, &mut diagnostics),
        primary_concerns: primary_concerns(&sections),
        recommendations: generator.generate_recommendations(&sections),
        sections,
        diagnostics,
    }
}

/// Aggregate nutrient scores into the micronutrient result
#[must_use]
pub fn summarize_nutrient_risk(nutrient_scores: NutrientScores) -> NutrientRiskSummary {
    NutrientRiskSummary {
        primary_concerns: nutrient_primary_concerns(&nutrient_scores.scores),
        scores: nutrient_scores.scores,
        diagnostics: nutrient_scores.diagnostics,
    }
}

/// Score a symptom-burden submission end to end
///
/// # Errors
///
/// Returns `ScoringError::InvalidConfig` if `config` fails validation, or
/// `ScoringError::MissingCatalogue` if `questions` is empty.
pub fn score_symptom_questionnaire(
    questions: &[Question],
    answers: &Answers,
    config: &ScoringConfig,
    generator: &RecommendationGenerator,
) -> Result<AggregateResult, ScoringError> {
    config.validate()?;
    let index = CatalogueIndex::build(QuestionnaireKind::Naq, questions)?;
    let result = aggregate_symptom_results(
        compute_section_scores(&index, answers, &config.symptom_burden),
        generator,
    );
    debug!(
        sections = result.sections.len(),
        overall_burden = result.overall_burden,
        primary_concerns = result.primary_concerns.len(),
        malformed = result.diagnostics.malformed_answers,
        "Scored symptom questionnaire"
    );
    Ok(result)
}

/// Score a micronutrient submission end to end
///
/// # Errors
///
/// Returns `ScoringError::InvalidConfig` if `config` fails validation, or
/// `ScoringError::MissingCatalogue` if `questions` is empty.
pub fn score_micronutrient_questionnaire(
    questions: &[Question],
    answers: &Answers,
    config: &ScoringConfig,
) -> Result<NutrientRiskSummary, ScoringError> {
    config.validate()?;
    let index = CatalogueIndex::build(QuestionnaireKind::Micronutrient, questions)?;
    let summary = summarize_nutrient_risk(compute_nutrient_scores(
        &index,
        answers,
        &config.nutrient_risk,
    ));
    debug!(
        nutrients = summary.scores.len(),
        primary_concerns = summary.primary_concerns.len(),
        malformed = summary.diagnostics.malformed_answers,
        "Scored micronutrient questionnaire"
    );
    Ok(summary)
}
