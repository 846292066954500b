// ABOUTME: Core records and error types for the Coachline questionnaire scoring platform
// ABOUTME: Foundation crate with questions, answers, score records, constants and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

#![deny(unsafe_code)]

//! # Coachline Core
//!
//! Foundation crate providing the plain data records exchanged between the
//! scoring engine and the surrounding coaching application. This crate is
//! designed to change infrequently, enabling incremental compilation benefits
//! in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `ScoringError`
//! - **constants**: Scoring scales and answer lookup tables
//! - **models**: Question catalogue records, raw answers and computed score records

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring scales, default thresholds and answer lookup tables
pub mod constants;

/// Questionnaire and score records
pub mod models;
