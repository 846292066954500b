// ABOUTME: Criterion benchmarks for the questionnaire scoring engine
// ABOUTME: Measures single-submission scoring and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

//! Criterion benchmarks for symptom-burden and micronutrient scoring.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use coachline::intelligence::catalogue::{micronutrient_catalogue, naq_catalogue};
use coachline::intelligence::{
    score_micronutrient_questionnaire, score_symptom_batch, score_symptom_questionnaire,
    RecommendationGenerator, ScoringConfig,
};
use coachline::models::{AnswerValue, Answers, Question, QuestionType};

/// Deterministic spread of severities across the catalogue
fn naq_answers(catalogue: &[Question], seed: u32) -> Answers {
    catalogue
        .iter()
        .map(|q| {
            let severity = i64::from((q.order * 7 + seed) % 4);
            (q.composite_key(), AnswerValue::Integer(severity))
        })
        .collect()
}

fn micronutrient_answers(catalogue: &[Question]) -> Answers {
    catalogue
        .iter()
        .map(|q| {
            let value = match q.question_type {
                QuestionType::Frequency => AnswerValue::from("sometimes"),
                QuestionType::Portion => AnswerValue::from("small"),
                QuestionType::YesNo => AnswerValue::Bool(q.order % 2 == 0),
                QuestionType::Numeric => AnswerValue::Integer(5),
                QuestionType::Scale0To3 => AnswerValue::Integer(1),
            };
            (q.id.clone(), value)
        })
        .collect()
}

fn bench_symptom_burden(c: &mut Criterion) {
    let mut group = c.benchmark_group("symptom_burden");
    let catalogue = naq_catalogue();
    let answers = naq_answers(&catalogue, 0);
    let config = ScoringConfig::default();
    let generator = RecommendationGenerator::from_config(&config);

    group.throughput(Throughput::Elements(catalogue.len() as u64));
    group.bench_function("score_symptom_questionnaire", |b| {
        b.iter(|| {
            score_symptom_questionnaire(
                black_box(&catalogue),
                black_box(&answers),
                &config,
                &generator,
            )
        });
    });
    group.finish();
}

fn bench_micronutrient_risk(c: &mut Criterion) {
    let mut group = c.benchmark_group("micronutrient_risk");
    let catalogue = micronutrient_catalogue();
    let answers = micronutrient_answers(&catalogue);
    let config = ScoringConfig::default();

    group.throughput(Throughput::Elements(catalogue.len() as u64));
    group.bench_function("score_micronutrient_questionnaire", |b| {
        b.iter(|| {
            score_micronutrient_questionnaire(black_box(&catalogue), black_box(&answers), &config)
        });
    });
    group.finish();
}

fn bench_symptom_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("symptom_batch");
    let catalogue = naq_catalogue();
    let config = ScoringConfig::default();
    let generator = RecommendationGenerator::from_config(&config);

    for count in [10_u32, 100, 1_000] {
        let submissions: Vec<Answers> = (0..count).map(|seed| naq_answers(&catalogue, seed)).collect();
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(
            BenchmarkId::new("score_symptom_batch", count),
            &submissions,
            |b, submissions| {
                b.iter(|| {
                    score_symptom_batch(&catalogue, black_box(submissions), &config, &generator)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_symptom_burden,
    bench_micronutrient_risk,
    bench_symptom_batch
);
criterion_main!(benches);
