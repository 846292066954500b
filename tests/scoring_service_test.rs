// ABOUTME: Integration tests for the async scoring service
// ABOUTME: Covers compute-once persistence retry, missing catalogues and stored envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coachline::errors::ErrorCode;
use coachline::intelligence::catalogue::naq_catalogue;
use coachline::intelligence::ScoringConfig;
use coachline::models::{AggregateResult, AnswerValue, Answers, QuestionnaireKind};
use coachline::services::{
    InMemoryCatalogueSource, InMemoryScoreStore, PersistRetryPolicy, ScoreStore, ScoredSubmission,
    ScoringService,
};
use std::sync::Arc;
use uuid::Uuid;

mod common;

use common::{digestion_energy_catalogue, init_test_logging, int_answers, uniform_answers};

fn service_with(
    source: InMemoryCatalogueSource,
    store: &InMemoryScoreStore,
    max_attempts: u32,
) -> ScoringService {
    ScoringService::new(
        Arc::new(source),
        Arc::new(store.clone()),
        ScoringConfig::default(),
    )
    .with_retry_policy(PersistRetryPolicy::immediate(max_attempts))
}

#[tokio::test]
async fn test_score_naq_persists_result() {
    init_test_logging();
    let source = InMemoryCatalogueSource::empty();
    source.set_catalogue(QuestionnaireKind::Naq, digestion_energy_catalogue());
    let store = InMemoryScoreStore::new();
    let service = service_with(source, &store, 3);

    let submission_id = Uuid::new_v4();
    let answers = int_answers(&[("digestion_q1", 3), ("digestion_q2", 1), ("energy_q1", 0)]);
    let scored: ScoredSubmission<AggregateResult> =
        service.score_naq(submission_id, &answers).await.unwrap();

    assert_eq!(scored.submission_id, submission_id);
    assert_eq!(scored.questionnaire, QuestionnaireKind::Naq);
    assert_eq!(scored.result.primary_concerns, vec!["Digestion"]);

    let stored = store.get_symptom_result(submission_id).await.unwrap().unwrap();
    assert_eq!(stored, scored);
    assert_eq!(store.save_attempts(), 1);
}

#[tokio::test]
async fn test_persistence_is_retried_without_recomputing() {
    let store = InMemoryScoreStore::new();
    store.fail_next(2);
    let service = service_with(InMemoryCatalogueSource::seeded(), &store, 3);

    let catalogue = naq_catalogue();
    let submission_id = Uuid::new_v4();
    let scored = service
        .score_naq(submission_id, &uniform_answers(&catalogue, 2))
        .await
        .unwrap();

    assert_eq!(store.save_attempts(), 3);
    // The stored envelope is the one computed before the first attempt
    let stored = store.get_symptom_result(submission_id).await.unwrap().unwrap();
    assert_eq!(stored.id, scored.id);
    assert_eq!(stored.scored_at, scored.scored_at);
}

#[tokio::test]
async fn test_persistence_gives_up_after_max_attempts() {
    let store = InMemoryScoreStore::new();
    store.fail_next(5);
    let service = service_with(InMemoryCatalogueSource::seeded(), &store, 2);

    let submission_id = Uuid::new_v4();
    let mut answers = Answers::new();
    answers.insert("vegan_diet".into(), AnswerValue::Bool(true));
    let err = service
        .score_micronutrients(submission_id, &answers)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(err.context.submission_id, Some(submission_id));
    assert_eq!(store.save_attempts(), 2);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_missing_catalogue_is_not_found() {
    let store = InMemoryScoreStore::new();
    let service = service_with(InMemoryCatalogueSource::empty(), &store, 3);

    let err = service
        .score_naq(Uuid::new_v4(), &int_answers(&[("digestion_q1", 1)]))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(store.save_attempts(), 0);
}

#[tokio::test]
async fn test_micronutrient_result_is_stored() {
    let store = InMemoryScoreStore::new();
    let service = service_with(InMemoryCatalogueSource::seeded(), &store, 1);

    let submission_id = Uuid::new_v4();
    let mut answers = Answers::new();
    answers.insert("heavy_menstruation".into(), AnswerValue::from("yes"));
    answers.insert("red_meat_frequency".into(), AnswerValue::from("never"));
    let scored = service
        .score_micronutrients(submission_id, &answers)
        .await
        .unwrap();

    let stored = store.get_nutrient_result(submission_id).await.unwrap().unwrap();
    assert_eq!(stored, scored);
    let iron = scored
        .result
        .scores
        .iter()
        .find(|s| s.nutrient == "iron")
        .unwrap();
    assert!((iron.intake_score - 100.0).abs() < 1e-9);
    assert!(iron.risk_score > 0.0);
}

#[tokio::test]
async fn test_invalid_config_is_reported_without_saving() {
    let store = InMemoryScoreStore::new();
    let mut config = ScoringConfig::default();
    config.nutrient_risk.weights.intake = f64::NAN;
    let service = ScoringService::new(
        Arc::new(InMemoryCatalogueSource::seeded()),
        Arc::new(store.clone()),
        config,
    );

    let submission_id = Uuid::new_v4();
    let err = service
        .score_micronutrients(submission_id, &Answers::new())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert_eq!(err.context.submission_id, Some(submission_id));
    assert_eq!(store.save_attempts(), 0);
}
