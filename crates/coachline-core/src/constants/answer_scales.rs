// ABOUTME: Fixed lookup tables mapping coded questionnaire choices to ordinals
// ABOUTME: Covers dietary frequency, portion size and yes/no answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

/// Highest ordinal on the frequency scale (`daily`)
pub const FREQUENCY_MAX: u8 = 4;

/// Highest ordinal on the portion scale (`large`)
pub const PORTION_MAX: u8 = 3;

/// Dietary frequency choices, least to most frequent
pub const FREQUENCY_SCALE: &[(&str, u8)] = &[
    ("never", 0),
    ("rarely", 1),
    ("monthly", 1),
    ("sometimes", 2),
    ("weekly", 2),
    ("often", 3),
    ("several_times_week", 3),
    ("daily", 4),
];

/// Portion size choices, smallest to largest
pub const PORTION_SCALE: &[(&str, u8)] = &[("none", 0), ("small", 1), ("medium", 2), ("large", 3)];

/// Spellings accepted as an affirmative answer
pub const YES_VALUES: &[&str] = &["yes", "y", "true", "1"];

/// Spellings accepted as a negative answer
pub const NO_VALUES: &[&str] = &["no", "n", "false", "0"];

/// Look up a coded choice in one of the scales above
///
/// Matching ignores ASCII case, surrounding whitespace, and treats spaces and
/// hyphens like underscores so `"Several times week"` resolves.
#[must_use]
pub fn lookup(scale: &[(&str, u8)], raw: &str) -> Option<u8> {
    let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
    scale
        .iter()
        .find(|(label, _)| *label == normalized)
        .map(|(_, ordinal)| *ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalizes_spelling() {
        assert_eq!(lookup(FREQUENCY_SCALE, " Daily "), Some(4));
        assert_eq!(lookup(FREQUENCY_SCALE, "several times-week"), Some(3));
        assert_eq!(lookup(PORTION_SCALE, "LARGE"), Some(3));
        assert_eq!(lookup(PORTION_SCALE, "huge"), None);
    }

    #[test]
    fn test_scale_maxima_match_tables() {
        let freq_max = FREQUENCY_SCALE.iter().map(|(_, v)| *v).max();
        let portion_max = PORTION_SCALE.iter().map(|(_, v)| *v).max();
        assert_eq!(freq_max, Some(FREQUENCY_MAX));
        assert_eq!(portion_max, Some(PORTION_MAX));
    }
}
