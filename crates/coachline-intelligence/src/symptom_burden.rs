// ABOUTME: NAQ-style symptom-burden scoring of 0-3 severity answers per body-system section
// ABOUTME: Weighted section totals, per-question burden, pooled overall burden and priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Symptom-Burden Scoring Engine
//!
//! Missing answers count as 0: an unanswered symptom question means no
//! symptom was reported.
//!
//! Burden is scaled per question, not per maximum score: a section whose
//! questions are all answered `3` has burden 3.0 regardless of its size.
//! The overall burden pools every section (`Σ totals / Σ question counts`),
//! so large sections weigh more than small ones.

use crate::catalogue::{CatalogueIndex, ParsedAnswers};
use crate::config::SymptomBurdenConfig;
use crate::invariants::clamp_to_range;
use coachline_core::constants::symptom_burden::{MAX_BURDEN, MAX_SEVERITY};
use coachline_core::models::{
    Answers, PriorityLevel, QuestionType, ScoringDiagnostics, SectionScore,
};

/// Section scores for one submission plus the counters gathered computing them
#[derive(Debug, Clone, PartialEq)]
pub struct SectionScores {
    /// Per-section scores in catalogue order
    pub sections: Vec<SectionScore>,
    /// Parse and clamp counters
    pub diagnostics: ScoringDiagnostics,
}

/// Classify a burden against the configured thresholds
///
/// Monotonic in `burden`. NaN classifies as `low`.
#[must_use]
pub fn classify_priority(burden: f64, config: &SymptomBurdenConfig) -> PriorityLevel {
    if burden >= config.high_threshold {
        PriorityLevel::High
    } else if burden >= config.medium_threshold {
        PriorityLevel::Medium
    } else {
        PriorityLevel::Low
    }
}

/// Score every section of the catalogue against a submission's answers
#[must_use]
pub fn compute_section_scores(
    index: &CatalogueIndex<'_>,
    answers: &Answers,
    config: &SymptomBurdenConfig,
) -> SectionScores {
    let parsed = index.parse_answers(answers);
    compute_section_scores_parsed(index, &parsed, config)
}

/// Score every section from answers already parsed against `index`
#[must_use]
pub fn compute_section_scores_parsed(
    index: &CatalogueIndex<'_>,
    parsed: &ParsedAnswers,
    config: &SymptomBurdenConfig,
) -> SectionScores {
    let mut diagnostics = parsed.diagnostics;
    let max_severity = f64::from(MAX_SEVERITY);

    let sections = index
        .sections()
        .iter()
        .filter(|section| !section.question_positions.is_empty())
        .map(|section| {
            let question_count = section.question_positions.len();
            let total_score: f64 = section
                .question_positions
                .iter()
                .filter_map(|&position| {
                    let level = parsed.level(position)?;
                    let question = index.questions()[position];
                    let severity = if question.question_type == QuestionType::Scale0To3 {
                        level.value
                    } else {
                        level.fraction() * max_severity
                    };
                    Some(question.scoring_weight.max(0.0) * severity)
                })
                .sum();

            let raw_burden = total_score / question_count as f64;
            let symptom_burden = clamp_to_range(
                raw_burden,
                0.0,
                MAX_BURDEN,
                section.name,
                &mut diagnostics,
            );

            SectionScore {
                section: section.name.to_owned(),
                total_score,
                max_possible_score: max_severity * question_count as f64,
                question_count,
                symptom_burden,
                priority: classify_priority(symptom_burden, config),
            }
        })
        .collect();

    SectionScores {
        sections,
        diagnostics,
    }
}

/// Pooled burden across sections: `Σ total_score / Σ question_count`
///
/// Sections without questions are skipped. Returns 0 when nothing is
/// scorable and never returns NaN. The result is clamped to [0, 3] and a
/// clamp is logged.
#[must_use]
pub fn compute_overall_burden(sections: &[SectionScore]) -> f64 {
    pooled_burden(sections, &mut ScoringDiagnostics::default())
}

/// [`compute_overall_burden`], counting a clamp in `diagnostics`
pub(crate) fn pooled_burden(
    sections: &[SectionScore],
    diagnostics: &mut ScoringDiagnostics,
) -> f64 {
    let (total, count) = sections
        .iter()
        .filter(|s| s.question_count > 0 && s.total_score.is_finite())
        .fold((0.0_f64, 0_usize), |(total, count), s| {
            (total + s.total_score, count + s.question_count)
        });

    if count == 0 {
        return 0.0;
    }
    clamp_to_range(
        total / count as f64,
        0.0,
        MAX_BURDEN,
        "overall_burden",
        diagnostics,
    )
}
