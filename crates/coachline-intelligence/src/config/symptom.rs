// ABOUTME: Symptom-burden configuration for NAQ-style priority classification
// ABOUTME: Holds the burden thresholds separating low, medium and high priority sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use coachline_core::constants::symptom_burden::{
    DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Burden thresholds for priority classification
///
/// Classification is monotonic: `burden >= high_threshold` is `high`,
/// `burden >= medium_threshold` is `medium`, anything lower is `low`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomBurdenConfig {
    /// Burden at or above which a section is `high` priority: 2.0
    pub high_threshold: f64,
    /// Burden at or above which a section is `medium` priority: 1.0
    pub medium_threshold: f64,
}

impl Default for SymptomBurdenConfig {
    fn default() -> Self {
        Self {
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            medium_threshold: DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}
