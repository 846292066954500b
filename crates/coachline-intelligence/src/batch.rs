// ABOUTME: Parallel scoring of many submissions against one catalogue
// ABOUTME: Builds the catalogue index once and fans submissions out with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Batch Scoring
//!
//! Each submission is scored independently, so the batch is a plain parallel
//! map. Output order matches input order.

use crate::aggregator::{aggregate_symptom_results, summarize_nutrient_risk};
use crate::catalogue::CatalogueIndex;
use crate::config::ScoringConfig;
use crate::nutrient_risk::compute_nutrient_scores;
use crate::recommendations::RecommendationGenerator;
use crate::symptom_burden::compute_section_scores;
use coachline_core::errors::ScoringError;
use coachline_core::models::{
    AggregateResult, Answers, NutrientRiskSummary, Question, QuestionnaireKind, ScoringDiagnostics,
};
use rayon::prelude::*;
use tracing::debug;

/// Score many symptom-burden submissions in parallel
///
/// # Errors
///
/// Returns `ScoringError::InvalidConfig` if `config` fails validation, or
/// `ScoringError::MissingCatalogue` if `questions` is empty.
pub fn score_symptom_batch(
    questions: &[Question],
    submissions: &[Answers],
    config: &ScoringConfig,
    generator: &RecommendationGenerator,
) -> Result<Vec<AggregateResult>, ScoringError> {
    config.validate()?;
    let index = CatalogueIndex::build(QuestionnaireKind::Naq, questions)?;

    let results: Vec<AggregateResult> = submissions
        .par_iter()
        .map(|answers| {
            aggregate_symptom_results(
                compute_section_scores(&index, answers, &config.symptom_burden),
                generator,
            )
        })
        .collect();

    log_batch_totals("naq", results.iter().map(|r| r.diagnostics));
    Ok(results)
}

/// Score many micronutrient submissions in parallel
///
/// # Errors
///
/// Returns `ScoringError::InvalidConfig` if `config` fails validation, or
/// `ScoringError::MissingCatalogue` if `questions` is empty.
pub fn score_micronutrient_batch(
    questions: &[Question],
    submissions: &[Answers],
    config: &ScoringConfig,
) -> Result<Vec<NutrientRiskSummary>, ScoringError> {
    config.validate()?;
    let index = CatalogueIndex::build(QuestionnaireKind::Micronutrient, questions)?;

    let results: Vec<NutrientRiskSummary> = submissions
        .par_iter()
        .map(|answers| {
            summarize_nutrient_risk(compute_nutrient_scores(
                &index,
                answers,
                &config.nutrient_risk,
            ))
        })
        .collect();

    log_batch_totals("micronutrient", results.iter().map(|r| r.diagnostics));
    Ok(results)
}

fn log_batch_totals(questionnaire: &str, diagnostics: impl Iterator<Item = ScoringDiagnostics>) {
    let mut submissions = 0_usize;
    let mut totals = ScoringDiagnostics::default();
    for item in diagnostics {
        submissions += 1;
        totals.merge(item);
    }
    debug!(
        questionnaire,
        submissions,
        answers_scored = totals.answers_scored,
        malformed = totals.malformed_answers,
        unknown = totals.unknown_questions,
        clamped = totals.clamped_values,
        "Scored batch"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::score_symptom_questionnaire;
    use crate::catalogue::{micronutrient_catalogue, naq_catalogue};
    use coachline_core::models::AnswerValue;

    #[test]
    fn test_batch_matches_sequential_scoring() {
        let questions = naq_catalogue();
        let config = ScoringConfig::default();
        let generator = RecommendationGenerator::from_config(&config);

        let submissions: Vec<Answers> = (0..8_i64)
            .map(|n| {
                questions
                    .iter()
                    .map(|q| {
                        let severity = (n + i64::from(q.order)) % 4;
                        (q.composite_key(), AnswerValue::Integer(severity))
                    })
                    .collect()
            })
            .collect();

        let batch = score_symptom_batch(&questions, &submissions, &config, &generator).unwrap();
        assert_eq!(batch.len(), submissions.len());
        for (answers, result) in submissions.iter().zip(&batch) {
            let sequential =
                score_symptom_questionnaire(&questions, answers, &config, &generator).unwrap();
            assert_eq!(&sequential, result);
        }
    }

    #[test]
    fn test_empty_batch() {
        let result = score_micronutrient_batch(
            &micronutrient_catalogue(),
            &[],
            &ScoringConfig::default(),
        )
        .unwrap();
        assert!(result.is_empty());
    }
}
