// ABOUTME: Scoring orchestration: fetch catalogue, compute once, persist with retry
// ABOUTME: Exponential backoff on persistence failures without recomputing scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use super::catalogue_source::{CatalogueSource, InMemoryCatalogueSource};
use super::score_store::{InMemoryScoreStore, ScoreStore, ScoredSubmission};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    score_micronutrient_questionnaire, score_symptom_questionnaire, RecommendationGenerator,
    ScoringConfig,
};
use crate::models::{AggregateResult, Answers, NutrientRiskSummary, QuestionnaireKind};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Retry behavior for persisting computed scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistRetryPolicy {
    /// Total save attempts, including the first (minimum 1)
    pub max_attempts: u32,
    /// Delay before the second attempt in milliseconds
    pub initial_backoff_ms: u64,
    /// Upper bound on any single delay in milliseconds
    pub max_backoff_ms: u64,
}

impl Default for PersistRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 100,
            max_backoff_ms: 2_000,
        }
    }
}

impl PersistRetryPolicy {
    /// Policy that never waits between attempts
    #[must_use]
    pub const fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff_ms: 0,
            max_backoff_ms: 0,
        }
    }

    /// Delay after failed attempt number `attempt` (1-based): doubles each time, capped
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2_u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(
            self.initial_backoff_ms
                .saturating_mul(factor)
                .min(self.max_backoff_ms),
        )
    }
}

/// Scores submissions against fetched catalogues and persists the results
#[derive(Clone)]
pub struct ScoringService {
    catalogues: Arc<dyn CatalogueSource>,
    store: Arc<dyn ScoreStore>,
    config: ScoringConfig,
    generator: RecommendationGenerator,
    retry: PersistRetryPolicy,
}

impl ScoringService {
    /// Create a service over the given source and store
    #[must_use]
    pub fn new(
        catalogues: Arc<dyn CatalogueSource>,
        store: Arc<dyn ScoreStore>,
        config: ScoringConfig,
    ) -> Self {
        let generator = RecommendationGenerator::from_config(&config);
        Self {
            catalogues,
            store,
            config,
            generator,
            retry: PersistRetryPolicy::default(),
        }
    }

    /// Service over the seed catalogues and an in-memory store, using the global config
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCatalogueSource::seeded()),
            Arc::new(InMemoryScoreStore::new()),
            ScoringConfig::global().clone(),
        )
    }

    /// Replace the persistence retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, retry: PersistRetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Configuration scores are computed with
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a symptom-burden submission and persist the result
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue cannot be fetched or is empty, the
    /// scoring configuration is invalid, or every persistence attempt fails.
    pub async fn score_naq(
        &self,
        submission_id: Uuid,
        answers: &Answers,
    ) -> AppResult<ScoredSubmission<AggregateResult>> {
        let questions = self
            .catalogues
            .fetch_catalogue(QuestionnaireKind::Naq)
            .await
            .map_err(|e| e.with_submission_id(submission_id))?;

        let result =
            score_symptom_questionnaire(&questions, answers, &self.config, &self.generator)
                .map_err(|e| AppError::from(e).with_submission_id(submission_id))?;
        let record = ScoredSubmission::new(submission_id, QuestionnaireKind::Naq, result);

        self.persist_with_retry(submission_id, || self.store.save_symptom_result(&record))
            .await?;

        info!(
            submission_id = %submission_id,
            overall_burden = record.result.overall_burden,
            primary_concerns = record.result.primary_concerns.len(),
            "Scored and stored symptom-burden submission"
        );
        Ok(record)
    }

    /// Score a micronutrient submission and persist the result
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue cannot be fetched or is empty, the
    /// scoring configuration is invalid, or every persistence attempt fails.
    pub async fn score_micronutrients(
        &self,
        submission_id: Uuid,
        answers: &Answers,
    ) -> AppResult<ScoredSubmission<NutrientRiskSummary>> {
        let questions = self
            .catalogues
            .fetch_catalogue(QuestionnaireKind::Micronutrient)
            .await
            .map_err(|e| e.with_submission_id(submission_id))?;

        let result = score_micronutrient_questionnaire(&questions, answers, &self.config)
            .map_err(|e| AppError::from(e).with_submission_id(submission_id))?;
        let record = ScoredSubmission::new(submission_id, QuestionnaireKind::Micronutrient, result);

        self.persist_with_retry(submission_id, || self.store.save_nutrient_result(&record))
            .await?;

        info!(
            submission_id = %submission_id,
            nutrients = record.result.scores.len(),
            primary_concerns = record.result.primary_concerns.len(),
            "Scored and stored micronutrient submission"
        );
        Ok(record)
    }

    /// Run `save` until it succeeds or the retry policy is exhausted
    async fn persist_with_retry<F, Fut>(&self, submission_id: Uuid, mut save: F) -> AppResult<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AppResult<()>>,
    {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match save().await {
                Ok(()) => return Ok(()),
                Err(e) if attempt >= max_attempts => {
                    error!(
                        submission_id = %submission_id,
                        attempts = attempt,
                        error = %e,
                        "Giving up persisting scores"
                    );
                    return Err(e.with_submission_id(submission_id));
                }
                Err(e) => {
                    let delay = self.retry.backoff_for(attempt);
                    warn!(
                        submission_id = %submission_id,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Persisting scores failed, retrying"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
