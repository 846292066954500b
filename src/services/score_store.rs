// ABOUTME: Persistence boundary for computed questionnaire scores
// ABOUTME: Scored-submission envelope, async store trait and a DashMap-backed store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use crate::errors::{AppError, AppResult};
use crate::models::{AggregateResult, NutrientRiskSummary, QuestionnaireKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// A computed result ready for persistence
///
/// `id` identifies this scoring run; `submission_id` the answers it was
/// computed from. Persisting the same envelope twice is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSubmission<T> {
    /// Identifier of this scoring run
    pub id: Uuid,
    /// Identifier of the scored submission
    pub submission_id: Uuid,
    /// Questionnaire the answers belong to
    pub questionnaire: QuestionnaireKind,
    /// When the scores were computed
    pub scored_at: DateTime<Utc>,
    /// Computed result
    pub result: T,
}

impl<T> ScoredSubmission<T> {
    /// Wrap a freshly computed result
    #[must_use]
    pub fn new(submission_id: Uuid, questionnaire: QuestionnaireKind, result: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            submission_id,
            questionnaire,
            scored_at: Utc::now(),
            result,
        }
    }
}

/// Store for computed scores, keyed by submission
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Persist a symptom-burden result, replacing any earlier one for the submission
    async fn save_symptom_result(&self, record: &ScoredSubmission<AggregateResult>)
        -> AppResult<()>;

    /// Persist a micronutrient result, replacing any earlier one for the submission
    async fn save_nutrient_result(
        &self,
        record: &ScoredSubmission<NutrientRiskSummary>,
    ) -> AppResult<()>;

    /// Fetch the stored symptom-burden result of a submission
    async fn get_symptom_result(
        &self,
        submission_id: Uuid,
    ) -> AppResult<Option<ScoredSubmission<AggregateResult>>>;

    /// Fetch the stored micronutrient result of a submission
    async fn get_nutrient_result(
        &self,
        submission_id: Uuid,
    ) -> AppResult<Option<ScoredSubmission<NutrientRiskSummary>>>;
}

/// In-process score store
///
/// `fail_next` makes the next saves fail with a storage error, for
/// exercising the service's retry path.
#[derive(Clone, Default)]
pub struct InMemoryScoreStore {
    symptom_results: Arc<DashMap<Uuid, ScoredSubmission<AggregateResult>>>,
    nutrient_results: Arc<DashMap<Uuid, ScoredSubmission<NutrientRiskSummary>>>,
    failures_remaining: Arc<AtomicU32>,
    save_attempts: Arc<AtomicU32>,
}

impl InMemoryScoreStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `count` save calls
    pub fn fail_next(&self, count: u32) {
        self.failures_remaining.store(count, Ordering::SeqCst);
    }

    /// Number of save calls received, successful or not
    #[must_use]
    pub fn save_attempts(&self) -> u32 {
        self.save_attempts.load(Ordering::SeqCst)
    }

    /// Number of stored results across both questionnaires
    #[must_use]
    pub fn len(&self) -> usize {
        self.symptom_results.len() + self.nutrient_results.len()
    }

    /// Whether nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_injected_failure(&self, submission_id: Uuid) -> AppResult<()> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);
        let injected = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if injected {
            return Err(AppError::storage("Score store temporarily unavailable")
                .with_submission_id(submission_id));
        }
        Ok(())
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn save_symptom_result(
        &self,
        record: &ScoredSubmission<AggregateResult>,
    ) -> AppResult<()> {
        self.check_injected_failure(record.submission_id)?;
        self.symptom_results
            .insert(record.submission_id, record.clone());
        Ok(())
    }

    async fn save_nutrient_result(
        &self,
        record: &ScoredSubmission<NutrientRiskSummary>,
    ) -> AppResult<()> {
        self.check_injected_failure(record.submission_id)?;
        self.nutrient_results
            .insert(record.submission_id, record.clone());
        Ok(())
    }

    async fn get_symptom_result(
        &self,
        submission_id: Uuid,
    ) -> AppResult<Option<ScoredSubmission<AggregateResult>>> {
        Ok(self
            .symptom_results
            .get(&submission_id)
            .map(|entry| entry.value().clone()))
    }

    async fn get_nutrient_result(
        &self,
        submission_id: Uuid,
    ) -> AppResult<Option<ScoredSubmission<NutrientRiskSummary>>> {
        Ok(self
            .nutrient_results
            .get(&submission_id)
            .map(|entry| entry.value().clone()))
    }
}
