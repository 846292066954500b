// ABOUTME: Main library entry point for the Coachline questionnaire scoring platform
// ABOUTME: Wires the scoring engine to catalogue sources, result stores and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

#![deny(unsafe_code)]

//! # Coachline
//!
//! Health-questionnaire scoring for nutrition and wellness coaching. A client
//! answers a symptom-burden questionnaire (NAQ style) or a micronutrient
//! deficiency-risk questionnaire; Coachline turns the raw answers into
//! prioritized concerns a practitioner can act on.
//!
//! ## Architecture
//!
//! - **`coachline-core`**: Records and error types (re-exported as `models`, `errors`, `constants`)
//! - **`coachline-intelligence`**: The pure scoring engine (re-exported as `intelligence`)
//! - **services**: Async boundary that fetches catalogues, scores once and persists with retry
//! - **logging**: Structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coachline::errors::AppResult;
//! use coachline::models::{AnswerValue, Answers};
//! use coachline::services::ScoringService;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let service = ScoringService::in_memory();
//!
//!     let mut answers = Answers::new();
//!     answers.insert("digestion_q1".into(), AnswerValue::Integer(3));
//!
//!     let scored = service.score_naq(Uuid::new_v4(), &answers).await?;
//!     println!("overall burden: {:.2}", scored.result.overall_burden);
//!     Ok(())
//! }
//! ```

pub use coachline_core::{constants, errors, models};
pub use coachline_intelligence as intelligence;

/// Structured logging configuration
pub mod logging;

/// Catalogue fetching, scoring orchestration and result persistence
pub mod services;
