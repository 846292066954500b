// ABOUTME: Hierarchy-ordered recommendation generator for flagged body systems
// ABOUTME: Walks the fixed precedence table and emits guidance for medium and high sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Recommendation Generator
//!
//! Recommendations follow the injected [`RecommendationHierarchy`], not the
//! computed burden ranking, so a client always sees foundational systems
//! first. Sections classified `medium` or `high` are flagged; sections that
//! are not part of the hierarchy receive no recommendation.

use crate::config::{RecommendationHierarchy, ScoringConfig};
use coachline_core::models::{PriorityLevel, SectionScore};

/// Generates guidance strings in fixed hierarchy order
#[derive(Debug, Clone, Default)]
pub struct RecommendationGenerator {
    hierarchy: RecommendationHierarchy,
}

impl RecommendationGenerator {
    /// Create a generator over an explicit hierarchy
    #[must_use]
    pub const fn new(hierarchy: RecommendationHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Create a generator using the hierarchy of a scoring configuration
    #[must_use]
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.hierarchy.clone())
    }

    /// Hierarchy this generator walks
    #[must_use]
    pub const fn hierarchy(&self) -> &RecommendationHierarchy {
        &self.hierarchy
    }

    /// One recommendation per flagged system, in hierarchy order
    #[must_use]
    pub fn generate_recommendations(&self, sections: &[SectionScore]) -> Vec<String> {
        self.hierarchy
            .entries()
            .iter()
            .filter_map(|entry| {
                let section = sections
                    .iter()
                    .filter(|s| is_flagged(s.priority))
                    .find(|s| entry.matches(&s.section))?;
                Some(format!(
                    "{} ({} priority, burden {:.2}): {}",
                    entry.system, section.priority, section.symptom_burden, entry.guidance
                ))
            })
            .collect()
    }
}

/// Free-function form of [`RecommendationGenerator::generate_recommendations`]
#[must_use]
pub fn generate_recommendations(
    sections: &[SectionScore],
    hierarchy: &RecommendationHierarchy,
) -> Vec<String> {
    RecommendationGenerator::new(hierarchy.clone()).generate_recommendations(sections)
}

const fn is_flagged(priority: PriorityLevel) -> bool {
    matches!(priority, PriorityLevel::Medium | PriorityLevel::High)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HierarchyEntry;

    fn section(name: &str, burden: f64, priority: PriorityLevel) -> SectionScore {
        SectionScore {
            section: name.into(),
            total_score: burden,
            max_possible_score: 3.0,
            question_count: 1,
            symptom_burden: burden,
            priority,
        }
    }

    fn hierarchy() -> RecommendationHierarchy {
        RecommendationHierarchy::new(vec![
            HierarchyEntry {
                system: "Digestion".into(),
                guidance: "Fix digestion".into(),
            },
            HierarchyEntry {
                system: "Liver and Gallbladder".into(),
                guidance: "Support the liver".into(),
            },
            HierarchyEntry {
                system: "Adrenal".into(),
                guidance: "Rest more".into(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_hierarchy_order_overrides_burden_order() {
        let sections = vec![
            section("Adrenal", 3.0, PriorityLevel::High),
            section("Digestion", 1.2, PriorityLevel::Medium),
        ];
        let recs = generate_recommendations(&sections, &hierarchy());
        assert_eq!(recs.len(), 2);
        assert!(recs[0].starts_with("Digestion (medium priority, burden 1.20)"));
        assert!(recs[1].starts_with("Adrenal (high priority"));
        assert!(recs[1].ends_with("Rest more"));
    }

    #[test]
    fn test_low_and_unlisted_sections_skipped() {
        let sections = vec![
            section("Digestion", 0.5, PriorityLevel::Low),
            section("Structural", 3.0, PriorityLevel::High),
        ];
        assert!(generate_recommendations(&sections, &hierarchy()).is_empty());
    }

    #[test]
    fn test_matching_ignores_case() {
        let sections = vec![section("liver and gallbladder", 2.5, PriorityLevel::High)];
        let recs = RecommendationGenerator::new(hierarchy()).generate_recommendations(&sections);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].starts_with("Liver and Gallbladder"));
    }
}
