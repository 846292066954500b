// ABOUTME: Range guards for computed scores fed by reference-data weights
// ABOUTME: Clamps out-of-range values into their declared range and logs the violation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use coachline_core::models::ScoringDiagnostics;
use tracing::warn;

/// Clamp `value` into `[min, max]`, counting and logging any correction
///
/// An out-of-range value here means the catalogue carries bad weights; it is
/// a configuration problem, not a reason to fail the submission. NaN maps to
/// `min`.
pub(crate) fn clamp_to_range(
    value: f64,
    min: f64,
    max: f64,
    label: &str,
    diagnostics: &mut ScoringDiagnostics,
) -> f64 {
    if value.is_nan() {
        warn!(score = label, "Computed score is NaN, clamping to {min}");
        diagnostics.clamped_values += 1;
        return min;
    }
    if value < min || value > max {
        warn!(
            score = label,
            value, min, max, "Computed score outside declared range, clamping"
        );
        diagnostics.clamped_values += 1;
        return value.clamp(min, max);
    }
    value
}
