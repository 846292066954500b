// ABOUTME: Question catalogue sources consumed by the scoring service
// ABOUTME: Async trait with in-memory seed and JSON-file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::catalogue::seed_catalogue;
use crate::models::{Question, QuestionnaireKind};
use async_trait::async_trait;
use dashmap::DashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// Source of question catalogues
///
/// An empty catalogue is a valid answer; the scoring service reports it as
/// a missing catalogue.
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Fetch the ordered question list for a questionnaire
    async fn fetch_catalogue(&self, kind: QuestionnaireKind) -> AppResult<Vec<Question>>;
}

/// In-memory catalogue source, seeded with the bundled catalogues
#[derive(Clone)]
pub struct InMemoryCatalogueSource {
    catalogues: Arc<DashMap<QuestionnaireKind, Vec<Question>>>,
}

impl InMemoryCatalogueSource {
    /// Source with no catalogues
    #[must_use]
    pub fn empty() -> Self {
        Self {
            catalogues: Arc::new(DashMap::new()),
        }
    }

    /// Source holding both seed catalogues
    #[must_use]
    pub fn seeded() -> Self {
        let source = Self::empty();
        for kind in [QuestionnaireKind::Naq, QuestionnaireKind::Micronutrient] {
            source.set_catalogue(kind, seed_catalogue(kind));
        }
        source
    }

    /// Replace the catalogue for `kind`
    pub fn set_catalogue(&self, kind: QuestionnaireKind, questions: Vec<Question>) {
        self.catalogues.insert(kind, questions);
    }
}

impl Default for InMemoryCatalogueSource {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl CatalogueSource for InMemoryCatalogueSource {
    async fn fetch_catalogue(&self, kind: QuestionnaireKind) -> AppResult<Vec<Question>> {
        Ok(self
            .catalogues
            .get(&kind)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}

/// Catalogue source reading a JSON array of questions from disk
///
/// Every questionnaire kind reads the same file.
#[derive(Debug, Clone)]
pub struct FileCatalogueSource {
    path: PathBuf,
}

impl FileCatalogueSource {
    /// Source backed by the JSON file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogueSource for FileCatalogueSource {
    async fn fetch_catalogue(&self, kind: QuestionnaireKind) -> AppResult<Vec<Question>> {
        let contents = fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::new(
                ErrorCode::ResourceUnavailable,
                format!("Cannot read catalogue file {}", self.path.display()),
            )
            .with_resource_id(kind.as_str())
            .with_source(e)
        })?;
        let questions: Vec<Question> = serde_json::from_str(&contents)?;
        debug!(
            questionnaire = %kind,
            questions = questions.len(),
            path = %self.path.display(),
            "Loaded catalogue file"
        );
        Ok(questions)
    }
}
