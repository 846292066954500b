// ABOUTME: Fixed clinical precedence of body systems used to order recommendations
// ABOUTME: Static "foundations of health" table, replaceable from a JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Recommendation Hierarchy
//!
//! Recommendations are always presented in the order of this table, never in
//! the order of computed burden. Foundations come first: digestion, then the
//! detoxification pathway, then blood sugar, fatty acids and minerals, and
//! only then the downstream glandular and immune systems.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One body system in the precedence table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyEntry {
    /// Body-system name, matched case-insensitively against section names
    pub system: String,
    /// Guidance emitted when the system is flagged
    pub guidance: String,
}

impl HierarchyEntry {
    fn new(system: &str, guidance: &str) -> Self {
        Self {
            system: system.to_owned(),
            guidance: guidance.to_owned(),
        }
    }

    /// Whether this entry names the given section
    #[must_use]
    pub fn matches(&self, section: &str) -> bool {
        normalize_system(&self.system) == normalize_system(section)
    }
}

/// Ordered precedence table injected into the recommendation generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationHierarchy {
    entries: Vec<HierarchyEntry>,
}

impl RecommendationHierarchy {
    /// Build a hierarchy from entries in precedence order
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidHierarchy` if the list is empty or names a
    /// system twice.
    pub fn new(entries: Vec<HierarchyEntry>) -> Result<Self, ConfigError> {
        let hierarchy = Self { entries };
        hierarchy.validate()?;
        Ok(hierarchy)
    }

    /// Load a hierarchy from a JSON array of `{system, guidance}` objects
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or the
    /// resulting hierarchy fails validation.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
        let entries: Vec<HierarchyEntry> = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
        Self::new(entries)
    }

    /// Entries in precedence order
    #[must_use]
    pub fn entries(&self) -> &[HierarchyEntry] {
        &self.entries
    }

    /// Precedence position of a system, if it is part of the hierarchy
    #[must_use]
    pub fn position(&self, system: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.matches(system))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::InvalidHierarchy(
                "hierarchy must name at least one system".into(),
            ));
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let key = normalize_system(&entry.system);
            if key.is_empty() {
                return Err(ConfigError::InvalidHierarchy(
                    "hierarchy entry has an empty system name".into(),
                ));
            }
            if !seen.insert(key) {
                return Err(ConfigError::InvalidHierarchy(format!(
                    "system '{}' listed more than once",
                    entry.system
                )));
            }
        }
        Ok(())
    }
}

impl Default for RecommendationHierarchy {
    fn default() -> Self {
        Self {
            entries: vec![
                HierarchyEntry::new(
                    "Digestion",
                    "Start with digestion: chew thoroughly, eat in a relaxed state and support stomach acid and enzyme output before adding targeted supplements.",
                ),
                HierarchyEntry::new(
                    "Liver and Gallbladder",
                    "Support detoxification and bile flow: bitter greens, beets and adequate healthy fats once digestion is addressed.",
                ),
                HierarchyEntry::new(
                    "Blood Sugar Regulation",
                    "Stabilise blood sugar: regular protein-anchored meals, fewer refined carbohydrates and no skipped breakfasts.",
                ),
                HierarchyEntry::new(
                    "Essential Fatty Acids",
                    "Rebalance fatty acids: oily fish two to three times a week and fewer industrial seed oils.",
                ),
                HierarchyEntry::new(
                    "Minerals",
                    "Replete structural minerals: mineral-rich whole foods, bone broth and review of calcium and magnesium status.",
                ),
                HierarchyEntry::new(
                    "Hydration",
                    "Improve hydration: roughly half of body weight (lb) in ounces of water daily with electrolytes as needed.",
                ),
                HierarchyEntry::new(
                    "Adrenal",
                    "Support the stress response: consistent sleep, caffeine reduction and stress-management practice.",
                ),
                HierarchyEntry::new(
                    "Thyroid",
                    "Support thyroid function: adequate iodine, selenium and zinc intake; consider referral for lab work.",
                ),
                HierarchyEntry::new(
                    "Immune",
                    "Support immune resilience: vitamin C and D rich foods, fermented foods and adequate rest.",
                ),
                HierarchyEntry::new(
                    "Energy",
                    "Address energy production: B-vitamin rich foods, iron status review and gradual activity build-up.",
                ),
            ],
        }
    }
}

fn normalize_system(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hierarchy_is_valid() {
        let hierarchy = RecommendationHierarchy::default();
        assert!(hierarchy.validate().is_ok());
        assert_eq!(hierarchy.position("digestion"), Some(0));
        assert_eq!(hierarchy.position("  Liver and Gallbladder "), Some(1));
        assert_eq!(hierarchy.position("Structural"), None);
    }

    #[test]
    fn test_duplicate_systems_rejected() {
        let result = RecommendationHierarchy::new(vec![
            HierarchyEntry::new("Digestion", "a"),
            HierarchyEntry::new("DIGESTION", "b"),
        ]);
        assert!(matches!(result, Err(ConfigError::InvalidHierarchy(_))));
    }

    #[test]
    fn test_empty_hierarchy_rejected() {
        assert!(RecommendationHierarchy::new(Vec::new()).is_err());
    }
}
