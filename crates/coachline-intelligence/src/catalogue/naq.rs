// ABOUTME: Seed catalogue for the nutritional assessment (symptom-burden) questionnaire
// ABOUTME: Body-system sections of 0-3 severity questions in display order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use coachline_core::models::{Question, QuestionType};

/// Seed version of the NAQ catalogue
pub const NAQ_CATALOGUE_VERSION: &str = "naq-2025.1";

/// (section, scoring category, question wording)
const NAQ_SECTIONS: &[(&str, &str, &[&str])] = &[
    (
        "Digestion",
        "digestion",
        &[
            "Belching or gas within one hour after eating",
            "Heartburn or acid reflux",
            "Bloated within one hour after eating",
            "Feel like skipping breakfast",
            "Undigested food in stool",
        ],
    ),
    (
        "Liver and Gallbladder",
        "liver_gallbladder",
        &[
            "Pain between shoulder blades",
            "Greasy or high-fat foods cause distress",
            "Light or clay-coloured stools",
            "Dry skin, itchy feet or skin peeling on feet",
            "Headache over eyes",
        ],
    ),
    (
        "Blood Sugar Regulation",
        "blood_sugar",
        &[
            "Awaken a few hours after falling asleep, hard to get back to sleep",
            "Crave sweets during the day",
            "Irritable if meals are missed",
            "Depend on coffee to keep going",
            "Get shaky if hungry",
        ],
    ),
    (
        "Essential Fatty Acids",
        "fatty_acids",
        &[
            "Flaky skin or dandruff",
            "Dry, brittle or unruly hair",
            "Joint stiffness in the morning",
            "Frequent skin rashes or eczema",
        ],
    ),
    (
        "Minerals",
        "minerals",
        &[
            "Muscle cramps at rest",
            "Calf, foot or toe cramps",
            "Frequent skeletal injuries or slow healing",
            "White spots on fingernails",
        ],
    ),
    (
        "Hydration",
        "hydration",
        &[
            "Drink less than six glasses of water a day",
            "Dark or strong-smelling urine",
            "Dry mouth, eyes or nose",
            "Headaches late in the day",
        ],
    ),
    (
        "Adrenal",
        "adrenal",
        &[
            "Cannot stay asleep",
            "Crave salty foods",
            "Afternoon fatigue",
            "Tired but wired in the evening",
            "Dizzy when standing up quickly",
        ],
    ),
    (
        "Thyroid",
        "thyroid",
        &[
            "Cold hands and feet",
            "Sluggish morning, hard to get going",
            "Gain weight easily",
            "Thinning of outer third of eyebrows",
        ],
    ),
    (
        "Immune",
        "immune",
        &[
            "Catch colds at the beginning of winter",
            "Infections last longer than a week",
            "Frequent sore throats",
            "Allergies or hay fever",
        ],
    ),
    (
        "Energy",
        "energy",
        &[
            "Wake up tired despite adequate sleep",
            "Exercise leaves you exhausted for days",
            "Difficulty concentrating in the afternoon",
        ],
    ),
];

/// Build the NAQ seed catalogue
///
/// Question ids are numbered per section (`q1`, `q2`, ...) so answers arrive
/// under composite keys such as `digestion_q1`.
#[must_use]
pub fn naq_catalogue() -> Vec<Question> {
    let mut order = 0_u32;
    NAQ_SECTIONS
        .iter()
        .flat_map(|(section, category, questions)| {
            questions.iter().enumerate().map(move |(index, text)| {
                (section, category, index + 1, *text)
            })
        })
        .map(|(section, category, number, text)| {
            order += 1;
            Question {
                id: format!("q{number}"),
                section: (*section).to_owned(),
                scoring_category: (*category).to_owned(),
                scoring_weight: 1.0,
                nutrient_relevance: None,
                question_type: QuestionType::Scale0To3,
                order,
                text: text.to_owned(),
                max_value: None,
            }
        })
        .collect()
}
