// ABOUTME: Question catalogue seed data and the typed index built once per computation
// ABOUTME: Resolves answer keys to questions and parses raw answers with diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Question Catalogue
//!
//! The catalogue arrives as an already-fetched list of [`Question`] records.
//! [`CatalogueIndex`] turns it into lookups keyed by composite key and plain
//! id so scoring never scans the list or falls back to loosely-typed field
//! access.

/// Micronutrient questionnaire seed data
pub mod micronutrient;
/// NAQ symptom questionnaire seed data
pub mod naq;

pub use micronutrient::{micronutrient_catalogue, MICRONUTRIENT_CATALOGUE_VERSION, NUTRIENT_CODES};
pub use naq::{naq_catalogue, NAQ_CATALOGUE_VERSION};

use coachline_core::errors::ScoringError;
use coachline_core::models::{
    AnswerLevel, AnswerValue, Answers, Question, QuestionnaireKind, ScoringDiagnostics,
};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Seed catalogue for a questionnaire
#[must_use]
pub fn seed_catalogue(kind: QuestionnaireKind) -> Vec<Question> {
    match kind {
        QuestionnaireKind::Naq => naq_catalogue(),
        QuestionnaireKind::Micronutrient => micronutrient_catalogue(),
    }
}

/// Version tag of a seed catalogue
#[must_use]
pub const fn seed_catalogue_version(kind: QuestionnaireKind) -> &'static str {
    match kind {
        QuestionnaireKind::Naq => NAQ_CATALOGUE_VERSION,
        QuestionnaireKind::Micronutrient => MICRONUTRIENT_CATALOGUE_VERSION,
    }
}

/// Questions of one section, in catalogue order
#[derive(Debug, Clone)]
pub struct CatalogueSection<'a> {
    /// Section name
    pub name: &'a str,
    /// Positions into [`CatalogueIndex::questions`]
    pub question_positions: Vec<usize>,
}

/// Answers parsed against an index, one slot per indexed question
#[derive(Debug, Clone)]
pub struct ParsedAnswers {
    levels: Vec<Option<AnswerLevel>>,
    /// Counters gathered while parsing
    pub diagnostics: ScoringDiagnostics,
}

impl ParsedAnswers {
    /// Parsed level of the question at `position`, `None` if unanswered or skipped
    #[must_use]
    pub fn level(&self, position: usize) -> Option<AnswerLevel> {
        self.levels.get(position).copied().flatten()
    }
}

/// Question an answer key resolves to
#[derive(Debug, Clone, Copy)]
struct KeyTarget {
    position: usize,
    composite: bool,
}

/// Strongly-typed view of a catalogue, built once per computation
#[derive(Debug, Clone)]
pub struct CatalogueIndex<'a> {
    kind: QuestionnaireKind,
    questions: Vec<&'a Question>,
    keys: HashMap<String, KeyTarget>,
    sections: Vec<CatalogueSection<'a>>,
    nutrients: BTreeSet<&'a str>,
}

impl<'a> CatalogueIndex<'a> {
    /// Index a catalogue
    ///
    /// Questions are ordered by their `order` field (stable for ties). A
    /// question repeating an earlier composite key is ignored with a warning.
    /// Every question answers to its composite key. Its plain id is accepted
    /// too, unless another question shares that id or uses it as a
    /// composite key, so one answer key never reaches two questions.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::MissingCatalogue` if `questions` is empty.
    pub fn build(kind: QuestionnaireKind, questions: &'a [Question]) -> Result<Self, ScoringError> {
        if questions.is_empty() {
            return Err(ScoringError::missing_catalogue(kind.as_str()));
        }

        let mut ordered: Vec<&'a Question> = questions.iter().collect();
        ordered.sort_by_key(|q| q.order);

        let mut index = Self {
            kind,
            questions: Vec::with_capacity(ordered.len()),
            keys: HashMap::with_capacity(ordered.len() * 2),
            sections: Vec::new(),
            nutrients: BTreeSet::new(),
        };
        // Plain id -> (occurrences, first position)
        let mut plain_ids: HashMap<&'a str, (usize, usize)> = HashMap::new();

        for question in ordered {
            let key = question.composite_key();
            if index.keys.contains_key(&key) {
                warn!(
                    questionnaire = %kind,
                    question_key = %key,
                    "Duplicate question in catalogue, keeping first record"
                );
                continue;
            }

            let position = index.questions.len();
            index.questions.push(question);
            index.keys.insert(
                key,
                KeyTarget {
                    position,
                    composite: true,
                },
            );
            plain_ids
                .entry(question.id.as_str())
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, position));

            match index.sections.iter_mut().find(|s| s.name == question.section) {
                Some(section) => section.question_positions.push(position),
                None => index.sections.push(CatalogueSection {
                    name: question.section.as_str(),
                    question_positions: vec![position],
                }),
            }

            if let Some(relevance) = &question.nutrient_relevance {
                index.nutrients.extend(relevance.keys().map(String::as_str));
            }
        }

        for (id, (count, position)) in plain_ids {
            if count > 1 || index.keys.contains_key(id) {
                debug!(
                    questionnaire = %kind,
                    question_id = id,
                    "Plain id is ambiguous, composite key required"
                );
                continue;
            }
            index.keys.insert(
                id.to_owned(),
                KeyTarget {
                    position,
                    composite: false,
                },
            );
        }

        Ok(index)
    }

    /// Indexed questions in catalogue order
    #[must_use]
    pub fn questions(&self) -> &[&'a Question] {
        &self.questions
    }

    /// Sections in order of first appearance
    #[must_use]
    pub fn sections(&self) -> &[CatalogueSection<'a>] {
        &self.sections
    }

    /// Every nutrient code referenced by a relevance map, ascending
    #[must_use]
    pub fn nutrients(&self) -> &BTreeSet<&'a str> {
        &self.nutrients
    }

    /// Resolve an answer key: composite key first, then an unambiguous plain id
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&'a Question> {
        self.keys
            .get(key)
            .map(|target| self.questions[target.position])
    }

    /// Parse every answer under its question's declared type
    ///
    /// Each answer key feeds at most one question. When a question is
    /// answered under both its composite key and its plain id, the composite
    /// key wins. Unanswered and blank questions yield `None`. Values that
    /// fail to parse are skipped as unanswered and counted, never aborting
    /// the computation. Keys that match no question are counted and
    /// otherwise ignored.
    #[must_use]
    pub fn parse_answers(&self, answers: &Answers) -> ParsedAnswers {
        let mut diagnostics = ScoringDiagnostics::default();
        let mut chosen: Vec<Option<(&AnswerValue, bool)>> = vec![None; self.questions.len()];

        for (key, value) in answers {
            let Some(target) = self.keys.get(key.as_str()) else {
                diagnostics.unknown_questions += 1;
                continue;
            };
            let slot = &mut chosen[target.position];
            let replace = match *slot {
                None => true,
                Some((_, composite)) => target.composite && !composite,
            };
            if replace {
                *slot = Some((value, target.composite));
            }
        }

        let levels = chosen
            .into_iter()
            .zip(&self.questions)
            .map(|(answer, question)| {
                let (value, _) = answer?;
                if value.is_empty() {
                    return None;
                }
                match value.level_for(question) {
                    Ok(level) => {
                        diagnostics.answers_scored += 1;
                        Some(level)
                    }
                    Err(e) => {
                        debug!(questionnaire = %self.kind, "Skipping answer: {e}");
                        diagnostics.malformed_answers += 1;
                        None
                    }
                }
            })
            .collect();

        ParsedAnswers {
            levels,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coachline_core::models::QuestionType;

    fn question(id: &str, section: &str, category: &str, order: u32) -> Question {
        Question {
            id: id.into(),
            section: section.into(),
            scoring_category: category.into(),
            scoring_weight: 1.0,
            nutrient_relevance: None,
            question_type: QuestionType::Scale0To3,
            order,
            text: String::new(),
            max_value: None,
        }
    }

    #[test]
    fn test_empty_catalogue_is_missing() {
        let result = CatalogueIndex::build(QuestionnaireKind::Naq, &[]);
        assert_eq!(
            result.err(),
            Some(ScoringError::missing_catalogue("naq"))
        );
    }

    #[test]
    fn test_sections_follow_catalogue_order() {
        let questions = vec![
            question("q1", "Energy", "energy", 3),
            question("q1", "Digestion", "digestion", 1),
            question("q2", "Digestion", "digestion", 2),
        ];
        let index = CatalogueIndex::build(QuestionnaireKind::Naq, &questions).unwrap();
        let names: Vec<&str> = index.sections().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Digestion", "Energy"]);
        assert_eq!(index.sections()[0].question_positions, vec![0, 1]);
    }

    #[test]
    fn test_ambiguous_plain_id_does_not_resolve() {
        let questions = vec![
            question("q1", "Digestion", "digestion", 1),
            question("q1", "Energy", "energy", 2),
            question("q2", "Energy", "energy", 3),
        ];
        let index = CatalogueIndex::build(QuestionnaireKind::Naq, &questions).unwrap();
        assert!(index.resolve("q1").is_none());
        assert_eq!(index.resolve("energy_q1").map(|q| q.section.as_str()), Some("Energy"));
        assert_eq!(index.resolve("q2").map(|q| q.section.as_str()), Some("Energy"));
    }

    #[test]
    fn test_parse_answers_counts_diagnostics() {
        let questions = vec![
            question("q1", "Digestion", "digestion", 1),
            question("q2", "Digestion", "digestion", 2),
            question("q3", "Digestion", "digestion", 3),
        ];
        let index = CatalogueIndex::build(QuestionnaireKind::Naq, &questions).unwrap();
        let answers: Answers = [
            ("digestion_q1".to_owned(), AnswerValue::Integer(2)),
            ("digestion_q2".to_owned(), AnswerValue::from("lots")),
            ("q3".to_owned(), AnswerValue::Empty),
            ("thyroid_q9".to_owned(), AnswerValue::Integer(3)),
        ]
        .into_iter()
        .collect();

        let parsed = index.parse_answers(&answers);
        assert_eq!(parsed.diagnostics.answers_scored, 1);
        assert_eq!(parsed.diagnostics.malformed_answers, 1);
        assert_eq!(parsed.diagnostics.unknown_questions, 1);
        assert!(parsed.level(1).is_none());
        assert!(parsed.level(2).is_none());
        assert!((parsed.level(0).unwrap().value - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicate_composite_key_keeps_first() {
        let mut second = question("q1", "Digestion", "digestion", 2);
        second.scoring_weight = 5.0;
        let questions = vec![question("q1", "Digestion", "digestion", 1), second];
        let index = CatalogueIndex::build(QuestionnaireKind::Naq, &questions).unwrap();
        assert_eq!(index.questions().len(), 1);
        assert!((index.questions()[0].scoring_weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_answer_key_scores_a_single_question() {
        // "digestion_q1" is both a plain id and another question's composite key
        let questions = vec![
            question("digestion_q1", "Energy", "energy", 1),
            question("q1", "Digestion", "digestion", 2),
        ];
        let index = CatalogueIndex::build(QuestionnaireKind::Naq, &questions).unwrap();
        assert_eq!(
            index.resolve("digestion_q1").map(|q| q.section.as_str()),
            Some("Digestion")
        );
        assert_eq!(
            index.resolve("energy_digestion_q1").map(|q| q.section.as_str()),
            Some("Energy")
        );

        let answers: Answers = [("digestion_q1".to_owned(), AnswerValue::Integer(3))]
            .into_iter()
            .collect();
        let parsed = index.parse_answers(&answers);
        assert_eq!(parsed.diagnostics.answers_scored, 1);
        assert!(parsed.level(0).is_none());
        assert!((parsed.level(1).unwrap().value - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_composite_key_wins_over_plain_id() {
        let questions = vec![question("q1", "Digestion", "digestion", 1)];
        let index = CatalogueIndex::build(QuestionnaireKind::Naq, &questions).unwrap();
        let answers: Answers = [
            ("q1".to_owned(), AnswerValue::Integer(1)),
            ("digestion_q1".to_owned(), AnswerValue::Integer(3)),
        ]
        .into_iter()
        .collect();

        let parsed = index.parse_answers(&answers);
        assert_eq!(parsed.diagnostics.answers_scored, 1);
        assert_eq!(parsed.diagnostics.unknown_questions, 0);
        assert!((parsed.level(0).unwrap().value - 3.0).abs() < f64::EPSILON);
    }
}
