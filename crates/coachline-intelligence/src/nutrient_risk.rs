// ABOUTME: Risk-weighted micronutrient scoring from intake, symptom and risk-factor answers
// ABOUTME: Relevance-weighted sub-scores, fixed-weight final score and risk categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Micronutrient Risk Scoring Engine
//!
//! Every nutrient referenced by a relevance map receives three sub-scores on a
//! 0-100 deficiency-risk scale. Each question contributes to a nutrient in
//! proportion to its relevance coefficient for that nutrient.
//!
//! - **Intake** is inverted: "never eats relevant food" is full risk. Only
//!   answered intake questions count, since a skipped dietary question says
//!   nothing about the diet.
//! - **Symptom** averages presence over every relevant symptom question; an
//!   unanswered symptom is absent.
//! - **Risk factor** sums present factors scaled by their coefficient over
//!   the number of relevant factors, so coefficients below 1 (protective or
//!   weak factors) pull the score down and coefficients above 1 push it up.
//!
//! Scores are returned ascending by nutrient code. Callers wanting "worst
//! first" re-sort on `final_score`.

use crate::catalogue::{CatalogueIndex, ParsedAnswers};
use crate::config::{NutrientRiskConfig, RiskThresholds};
use crate::invariants::clamp_to_range;
use coachline_core::constants::nutrient_risk::{
    LOW_INTAKE_LABEL, MAX_PERCENT, RISK_FACTORS_LABEL, SYMPTOMS_LABEL,
};
use coachline_core::models::{
    Answers, ComponentScores, NutrientScore, RiskCategory, RiskComponent, ScoringDiagnostics,
};

/// Nutrient scores for one submission plus the counters gathered computing them
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientScores {
    /// One score per nutrient, ascending by nutrient code
    pub scores: Vec<NutrientScore>,
    /// Parse and clamp counters
    pub diagnostics: ScoringDiagnostics,
}

/// Running numerator/denominator for one sub-score
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    weighted: f64,
    basis: f64,
}

impl Accumulator {
    fn percent(self) -> f64 {
        if self.basis > 0.0 {
            MAX_PERCENT * self.weighted / self.basis
        } else {
            0.0
        }
    }
}

/// Classify a final score against the configured thresholds
///
/// Monotonic in `final_score`. NaN classifies as `none`.
#[must_use]
pub fn classify_risk(final_score: f64, thresholds: &RiskThresholds) -> RiskCategory {
    if final_score >= thresholds.high {
        RiskCategory::High
    } else if final_score >= thresholds.moderate {
        RiskCategory::Moderate
    } else if final_score >= thresholds.low {
        RiskCategory::Low
    } else {
        RiskCategory::None
    }
}

/// Labels of the sub-scores strictly above `threshold`, in intake, symptom, risk-factor order
#[must_use]
pub fn contributing_factors(components: &ComponentScores, threshold: f64) -> Vec<String> {
    [
        (components.intake, LOW_INTAKE_LABEL),
        (components.symptom, SYMPTOMS_LABEL),
        (components.risk_factor, RISK_FACTORS_LABEL),
    ]
    .into_iter()
    .filter(|(score, _)| *score > threshold)
    .map(|(_, label)| label.to_owned())
    .collect()
}

/// Combine three sub-scores into a nutrient score
///
/// `final = w_intake·intake + w_symptom·symptom + w_risk·risk_factor`,
/// clamped to [0, 100]. Sub-scores outside [0, 100] are clamped first.
#[must_use]
pub fn compute_nutrient_score(
    nutrient: &str,
    components: ComponentScores,
    config: &NutrientRiskConfig,
) -> NutrientScore {
    let mut diagnostics = ScoringDiagnostics::default();
    combine_components(nutrient, components, config, &mut diagnostics)
}

fn combine_components(
    nutrient: &str,
    components: ComponentScores,
    config: &NutrientRiskConfig,
    diagnostics: &mut ScoringDiagnostics,
) -> NutrientScore {
    let components = ComponentScores {
        intake: clamp_to_range(components.intake, 0.0, MAX_PERCENT, nutrient, diagnostics),
        symptom: clamp_to_range(components.symptom, 0.0, MAX_PERCENT, nutrient, diagnostics),
        risk_factor: clamp_to_range(
            components.risk_factor,
            0.0,
            MAX_PERCENT,
            nutrient,
            diagnostics,
        ),
    };

    let weights = &config.weights;
    let raw_final = weights.intake * components.intake
        + weights.symptom * components.symptom
        + weights.risk_factor * components.risk_factor;
    let final_score = clamp_to_range(raw_final, 0.0, MAX_PERCENT, nutrient, diagnostics);

    NutrientScore {
        nutrient: nutrient.to_owned(),
        intake_score: components.intake,
        symptom_score: components.symptom,
        risk_score: components.risk_factor,
        final_score,
        category: classify_risk(final_score, &config.thresholds),
        contributing_factors: contributing_factors(
            &components,
            config.notable_component_threshold,
        ),
    }
}

/// Compute the three raw sub-scores of one nutrient
///
/// Questions whose scoring category is not a micronutrient component, or
/// whose coefficient for the nutrient is missing or not positive, are ignored.
#[must_use]
pub fn compute_component_scores(
    index: &CatalogueIndex<'_>,
    parsed: &ParsedAnswers,
    nutrient: &str,
) -> ComponentScores {
    let mut intake = Accumulator::default();
    let mut symptom = Accumulator::default();
    let mut risk_factor = Accumulator::default();

    for (position, question) in index.questions().iter().enumerate() {
        let Some(relevance) = question
            .relevance_for(nutrient)
            .filter(|r| r.is_finite() && *r > 0.0)
        else {
            continue;
        };
        let Some(component) = RiskComponent::from_category(&question.scoring_category) else {
            continue;
        };
        let fraction = parsed.level(position).map(|level| level.fraction());

        match component {
            RiskComponent::Intake => {
                if let Some(fraction) = fraction {
                    intake.weighted += relevance * (1.0 - fraction);
                    intake.basis += relevance;
                }
            }
            RiskComponent::Symptom => {
                symptom.weighted += relevance * fraction.unwrap_or(0.0);
                symptom.basis += relevance;
            }
            RiskComponent::RiskFactor => {
                risk_factor.weighted += relevance * fraction.unwrap_or(0.0);
                risk_factor.basis += 1.0;
            }
        }
    }

    ComponentScores {
        intake: intake.percent(),
        symptom: symptom.percent(),
        risk_factor: risk_factor.percent(),
    }
}

/// Score every nutrient referenced by the catalogue
#[must_use]
pub fn compute_nutrient_scores(
    index: &CatalogueIndex<'_>,
    answers: &Answers,
    config: &NutrientRiskConfig,
) -> NutrientScores {
    let parsed = index.parse_answers(answers);
    let mut diagnostics = parsed.diagnostics;

    // BTreeSet iteration keeps the output ascending by nutrient code
    let scores = index
        .nutrients()
        .iter()
        .map(|nutrient| {
            let components = compute_component_scores(index, &parsed, nutrient);
            combine_components(nutrient, components, config, &mut diagnostics)
        })
        .collect();

    NutrientScores {
        scores,
        diagnostics,
    }
}
