// ABOUTME: End-to-end tests for the coachline-cli binary
// ABOUTME: Runs the binary against temporary answer, catalogue and hierarchy files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coachline-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "cli failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

const CATALOGUE: &str = r#"[
  {"id": "q1", "section": "Digestion", "scoring_category": "digestion", "question_type": "scale_0_3", "order": 1},
  {"id": "q2", "section": "Digestion", "scoring_category": "digestion", "question_type": "scale_0_3", "order": 2},
  {"id": "q1", "section": "Energy", "scoring_category": "energy", "question_type": "scale_0_3", "order": 3}
]"#;

#[test]
fn test_naq_with_custom_catalogue() {
    let dir = TempDir::new().unwrap();
    let answers = write_file(
        &dir,
        "answers.json",
        r#"{"digestion_q1": 3, "digestion_q2": 1, "energy_q1": 0}"#,
    );
    let catalogue = write_file(&dir, "catalogue.json", CATALOGUE);

    let json = stdout_json(&run_cli(&[
        "naq",
        "--answers",
        &answers,
        "--catalogue",
        &catalogue,
    ]));

    let result = &json["result"];
    assert_eq!(result["primary_concerns"], serde_json::json!(["Digestion"]));
    assert_eq!(result["sections"][0]["priority"], "high");
    assert_eq!(result["sections"][1]["priority"], "low");
    let overall = result["overall_burden"].as_f64().unwrap();
    assert!((overall - 4.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_naq_with_custom_hierarchy_and_answer_rows() {
    let dir = TempDir::new().unwrap();
    let answers = write_file(
        &dir,
        "answers.json",
        r#"[{"question_key": "digestion_q1", "value": 3}, {"question_key": "energy_q1", "value": "2"}]"#,
    );
    let catalogue = write_file(&dir, "catalogue.json", CATALOGUE);
    let hierarchy = write_file(
        &dir,
        "hierarchy.json",
        r#"[{"system": "Energy", "guidance": "Sleep more"}, {"system": "Digestion", "guidance": "Chew well"}]"#,
    );

    let json = stdout_json(&run_cli(&[
        "naq",
        "--answers",
        &answers,
        "--catalogue",
        &catalogue,
        "--hierarchy",
        &hierarchy,
    ]));

    let recommendations = json["result"]["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert!(recommendations[0].as_str().unwrap().starts_with("Energy"));
    assert!(recommendations[1].as_str().unwrap().ends_with("Chew well"));
}

#[test]
fn test_nutrients_with_seed_catalogue() {
    let dir = TempDir::new().unwrap();
    let answers = write_file(
        &dir,
        "answers.json",
        r#"{"vegan_diet": "yes", "red_meat_frequency": "never", "fatigue": true}"#,
    );

    let json = stdout_json(&run_cli(&["nutrients", "--answers", &answers]));
    let scores = json["result"]["scores"].as_array().unwrap();
    assert!(scores.iter().any(|s| s["nutrient"] == "vitamin_b12"));
    assert_eq!(json["questionnaire"], "micronutrient");
}

#[test]
fn test_catalogue_export() {
    let json = stdout_json(&run_cli(&["catalogue", "naq"]));
    assert_eq!(json["questionnaire"], "naq");
    assert!(json["version"].as_str().unwrap().starts_with("naq-"));
    let questions = json["questions"].as_array().unwrap();
    assert!(!questions.is_empty());
    assert_eq!(questions[0]["question_type"], "scale_0_3");
}

#[test]
fn test_missing_answers_file_fails() {
    let output = run_cli(&["naq", "--answers", "/nonexistent/answers.json"]);
    assert!(!output.status.success());
}

#[test]
fn test_empty_catalogue_file_fails() {
    let dir = TempDir::new().unwrap();
    let answers = write_file(&dir, "answers.json", "{}");
    let catalogue = write_file(&dir, "catalogue.json", "[]");
    let output = run_cli(&["naq", "--answers", &answers, "--catalogue", &catalogue]);
    assert!(!output.status.success());
}
