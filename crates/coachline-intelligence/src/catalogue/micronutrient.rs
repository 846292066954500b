// ABOUTME: Seed catalogue for the micronutrient deficiency-risk questionnaire
// ABOUTME: Intake, symptom and risk-factor questions with per-nutrient relevance coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use coachline_core::models::{Question, QuestionType};
use std::collections::BTreeMap;

/// Seed version of the micronutrient catalogue
pub const MICRONUTRIENT_CATALOGUE_VERSION: &str = "micronutrient-2025.1";

/// Nutrient codes scored by the seed catalogue
pub const NUTRIENT_CODES: &[&str] = &[
    "calcium",
    "folate",
    "iron",
    "magnesium",
    "omega_3",
    "vitamin_b12",
    "vitamin_d",
    "zinc",
];

struct SeedQuestion {
    id: &'static str,
    section: &'static str,
    category: &'static str,
    question_type: QuestionType,
    text: &'static str,
    relevance: &'static [(&'static str, f64)],
    max_value: Option<f64>,
}

const fn intake(
    id: &'static str,
    section: &'static str,
    question_type: QuestionType,
    text: &'static str,
    relevance: &'static [(&'static str, f64)],
) -> SeedQuestion {
    SeedQuestion {
        id,
        section,
        category: "intake",
        question_type,
        text,
        relevance,
        max_value: None,
    }
}

const fn symptom(
    id: &'static str,
    text: &'static str,
    relevance: &'static [(&'static str, f64)],
) -> SeedQuestion {
    SeedQuestion {
        id,
        section: "Symptoms",
        category: "symptom",
        question_type: QuestionType::YesNo,
        text,
        relevance,
        max_value: None,
    }
}

const fn risk_factor(
    id: &'static str,
    text: &'static str,
    relevance: &'static [(&'static str, f64)],
) -> SeedQuestion {
    SeedQuestion {
        id,
        section: "Health History",
        category: "risk_factor",
        question_type: QuestionType::YesNo,
        text,
        relevance,
        max_value: None,
    }
}

const SEED_QUESTIONS: &[SeedQuestion] = &[
    // Dietary intake
    intake(
        "red_meat_frequency",
        "Animal Protein",
        QuestionType::Frequency,
        "How often do you eat red meat?",
        &[("iron", 1.0), ("vitamin_b12", 0.8), ("zinc", 1.0)],
    ),
    intake(
        "eggs_poultry_frequency",
        "Animal Protein",
        QuestionType::Frequency,
        "How often do you eat eggs or poultry?",
        &[("vitamin_b12", 0.7), ("zinc", 0.5), ("vitamin_d", 0.3)],
    ),
    intake(
        "oily_fish_frequency",
        "Fish & Seafood",
        QuestionType::Frequency,
        "How often do you eat oily fish (salmon, sardines, mackerel)?",
        &[("omega_3", 1.0), ("vitamin_d", 0.8), ("vitamin_b12", 0.5)],
    ),
    intake(
        "dairy_frequency",
        "Dairy",
        QuestionType::Frequency,
        "How often do you eat dairy or fortified alternatives?",
        &[("calcium", 1.0), ("vitamin_b12", 0.4), ("vitamin_d", 0.3)],
    ),
    intake(
        "dairy_portion",
        "Dairy",
        QuestionType::Portion,
        "Typical dairy portion size",
        &[("calcium", 0.6)],
    ),
    intake(
        "leafy_greens_frequency",
        "Vegetables & Legumes",
        QuestionType::Frequency,
        "How often do you eat dark leafy greens?",
        &[("folate", 1.0), ("magnesium", 0.8), ("calcium", 0.4), ("iron", 0.3)],
    ),
    intake(
        "legumes_frequency",
        "Vegetables & Legumes",
        QuestionType::Frequency,
        "How often do you eat beans, lentils or chickpeas?",
        &[("folate", 0.8), ("iron", 0.5), ("magnesium", 0.6), ("zinc", 0.4)],
    ),
    intake(
        "nuts_seeds_frequency",
        "Nuts & Seeds",
        QuestionType::Frequency,
        "How often do you eat nuts or seeds?",
        &[("magnesium", 1.0), ("zinc", 0.6), ("omega_3", 0.4)],
    ),
    intake(
        "nuts_seeds_portion",
        "Nuts & Seeds",
        QuestionType::Portion,
        "Typical nuts or seeds portion size",
        &[("magnesium", 0.5)],
    ),
    intake(
        "sun_exposure_frequency",
        "Sun Exposure",
        QuestionType::Frequency,
        "How often do you spend 15+ minutes outdoors with skin exposed?",
        &[("vitamin_d", 1.0)],
    ),
    // Symptoms
    symptom(
        "fatigue",
        "Persistent fatigue or low energy",
        &[("iron", 1.0), ("vitamin_b12", 0.8), ("magnesium", 0.5), ("vitamin_d", 0.5)],
    ),
    symptom(
        "muscle_cramps",
        "Muscle cramps or twitches",
        &[("magnesium", 1.0), ("calcium", 0.7)],
    ),
    symptom(
        "pale_skin",
        "Pale skin or pale inner eyelids",
        &[("iron", 1.0), ("folate", 0.5)],
    ),
    symptom(
        "tingling_extremities",
        "Tingling or numbness in hands or feet",
        &[("vitamin_b12", 1.0), ("folate", 0.4)],
    ),
    symptom(
        "frequent_infections",
        "Frequent colds or slow wound healing",
        &[("zinc", 1.0), ("vitamin_d", 0.7)],
    ),
    symptom(
        "bone_pain",
        "Bone or lower back pain",
        &[("vitamin_d", 1.0), ("calcium", 0.8)],
    ),
    symptom(
        "dry_skin_eyes",
        "Dry skin or dry eyes",
        &[("omega_3", 1.0), ("zinc", 0.3)],
    ),
    symptom(
        "mouth_sores",
        "Mouth ulcers or a sore, smooth tongue",
        &[("vitamin_b12", 0.8), ("folate", 1.0), ("iron", 0.5)],
    ),
    // Risk factors
    risk_factor(
        "vegan_diet",
        "Follow a vegan or strict vegetarian diet",
        &[("vitamin_b12", 1.5), ("iron", 1.2), ("zinc", 1.2), ("omega_3", 1.0), ("calcium", 0.8)],
    ),
    risk_factor(
        "heavy_menstruation",
        "Heavy menstrual bleeding",
        &[("iron", 1.5)],
    ),
    risk_factor(
        "acid_reducing_medication",
        "Take acid-reducing medication (PPIs, H2 blockers)",
        &[("vitamin_b12", 1.3), ("magnesium", 1.2), ("iron", 0.8), ("calcium", 0.6)],
    ),
    risk_factor(
        "malabsorption_condition",
        "Diagnosed coeliac or inflammatory bowel disease",
        &[("iron", 1.3), ("folate", 1.0), ("vitamin_b12", 1.0), ("vitamin_d", 1.0), ("zinc", 1.0)],
    ),
    risk_factor(
        "high_alcohol_intake",
        "More than 14 alcoholic drinks per week",
        &[("folate", 1.3), ("magnesium", 1.0), ("zinc", 0.8)],
    ),
    risk_factor(
        "fortified_foods",
        "Regularly eat fortified cereals or plant milks",
        &[("vitamin_b12", 0.5), ("vitamin_d", 0.5), ("folate", 0.5), ("calcium", 0.5)],
    ),
    SeedQuestion {
        id: "age_over_65",
        section: "Health History",
        category: "risk_factor",
        question_type: QuestionType::Numeric,
        text: "Years over age 65 (0 if younger)",
        relevance: &[("vitamin_d", 1.2), ("vitamin_b12", 1.0), ("calcium", 0.8)],
        max_value: Some(20.0),
    },
];

/// Build the micronutrient seed catalogue
///
/// Answers are keyed by the plain question id.
#[must_use]
pub fn micronutrient_catalogue() -> Vec<Question> {
    SEED_QUESTIONS
        .iter()
        .zip(1_u32..)
        .map(|(seed, order)| Question {
            id: seed.id.to_owned(),
            section: seed.section.to_owned(),
            scoring_category: seed.category.to_owned(),
            scoring_weight: 1.0,
            nutrient_relevance: Some(
                seed.relevance
                    .iter()
                    .map(|(nutrient, coefficient)| ((*nutrient).to_owned(), *coefficient))
                    .collect::<BTreeMap<_, _>>(),
            ),
            question_type: seed.question_type,
            order,
            text: seed.text.to_owned(),
            max_value: seed.max_value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_every_nutrient_is_covered_by_each_component() {
        let catalogue = micronutrient_catalogue();
        for nutrient in NUTRIENT_CODES {
            for category in ["intake", "symptom", "risk_factor"] {
                assert!(
                    catalogue.iter().any(|q| q.scoring_category == category
                        && q.relevance_for(nutrient).is_some()),
                    "{nutrient} has no {category} question"
                );
            }
        }
    }

    #[test]
    fn test_nutrient_codes_match_relevance_maps() {
        let referenced: BTreeSet<String> = micronutrient_catalogue()
            .iter()
            .filter_map(|q| q.nutrient_relevance.as_ref())
            .flat_map(|map| map.keys().cloned())
            .collect();
        let declared: BTreeSet<String> = NUTRIENT_CODES.iter().map(|c| (*c).to_owned()).collect();
        assert_eq!(referenced, declared);
    }
}
