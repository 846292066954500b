// ABOUTME: Answer file loading for the Coachline CLI
// ABOUTME: Accepts a key-to-value JSON object or an array of answer rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline

use anyhow::{bail, Result};
use coachline::models::{Answer, Answers};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Read an answers file
///
/// Either `{"digestion_q1": 3, ...}` or `[{"question_key": "digestion_q1", "value": 3}, ...]`.
pub async fn load_answers(path: &Path) -> Result<Answers> {
    let contents = fs::read_to_string(path).await?;
    match serde_json::from_str::<Value>(&contents)? {
        Value::Object(map) => Ok(serde_json::from_value(Value::Object(map))?),
        Value::Array(rows) => {
            let rows: Vec<Answer> = serde_json::from_value(Value::Array(rows))?;
            Ok(Answer::collect(rows))
        }
        other => bail!(
            "{}: expected an object or array of answers, found {}",
            path.display(),
            json_kind(&other)
        ),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
