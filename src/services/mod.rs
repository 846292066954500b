// ABOUTME: Service layer around the pure scoring engine
// ABOUTME: Catalogue fetching, compute-once scoring and retried result persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Scoring service layer
//!
//! The engine is synchronous and pure; everything that may suspend or fail
//! transiently lives here. Scoring a submission is two separable steps:
//! compute (once) and persist (retried). A persistence failure never causes
//! the scores to be recomputed.

/// Question catalogue sources
pub mod catalogue_source;

/// Scored result persistence
pub mod score_store;

/// Scoring orchestration with persistence retry
pub mod scoring;

pub use catalogue_source::{CatalogueSource, FileCatalogueSource, InMemoryCatalogueSource};
pub use score_store::{InMemoryScoreStore, ScoreStore, ScoredSubmission};
pub use scoring::{PersistRetryPolicy, ScoringService};
