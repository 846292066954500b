// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging plus catalogue and answer builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `coachline`

use coachline::models::{AnswerValue, Answers, Question, QuestionType};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A weight-1 severity question keyed `{category}_{id}`
pub fn severity_question(id: &str, section: &str, category: &str, order: u32) -> Question {
    Question {
        id: id.into(),
        section: section.into(),
        scoring_category: category.into(),
        scoring_weight: 1.0,
        nutrient_relevance: None,
        question_type: QuestionType::Scale0To3,
        order,
        text: String::new(),
        max_value: None,
    }
}

/// Two-section catalogue: Digestion (2 questions) and Energy (1 question)
pub fn digestion_energy_catalogue() -> Vec<Question> {
    vec![
        severity_question("q1", "Digestion", "digestion", 1),
        severity_question("q2", "Digestion", "digestion", 2),
        severity_question("q1", "Energy", "energy", 3),
    ]
}

/// Integer answers keyed as given
pub fn int_answers(pairs: &[(&str, i64)]) -> Answers {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), AnswerValue::Integer(*value)))
        .collect()
}

/// The same severity for every question in `catalogue`
pub fn uniform_answers(catalogue: &[Question], severity: i64) -> Answers {
    catalogue
        .iter()
        .map(|q| (q.composite_key(), AnswerValue::Integer(severity)))
        .collect()
}
