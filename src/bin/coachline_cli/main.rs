// ABOUTME: Coachline CLI - score questionnaire answer files from the command line
// ABOUTME: Symptom-burden and micronutrient scoring plus seed catalogue export as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachline
//!
//! Usage:
//! ```bash
//! # Score a symptom-burden questionnaire against the seed catalogue
//! coachline-cli naq --answers answers.json
//!
//! # Score with a custom catalogue and recommendation hierarchy
//! coachline-cli naq --answers answers.json --catalogue naq.json --hierarchy hierarchy.json
//!
//! # Score a micronutrient questionnaire
//! coachline-cli nutrients --answers answers.json
//!
//! # Export a seed catalogue
//! coachline-cli catalogue micronutrient
//! ```

mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use coachline::intelligence::{
    seed_catalogue, seed_catalogue_version, RecommendationHierarchy, ScoringConfig,
};
use coachline::logging::LoggingConfig;
use coachline::models::QuestionnaireKind;
use coachline::services::{
    CatalogueSource, FileCatalogueSource, InMemoryCatalogueSource, InMemoryScoreStore,
    ScoringService,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "coachline-cli",
    about = "Coachline questionnaire scoring CLI",
    long_about = "Scores symptom-burden and micronutrient questionnaire answers and prints the result as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score a symptom-burden (NAQ) submission
    Naq {
        /// JSON answers file: an object of question key to value, or an array of answer rows
        #[arg(long)]
        answers: PathBuf,

        /// JSON question catalogue (defaults to the seed NAQ catalogue)
        #[arg(long)]
        catalogue: Option<PathBuf>,

        /// JSON recommendation hierarchy (defaults to the built-in order)
        #[arg(long)]
        hierarchy: Option<PathBuf>,

        /// Submission id to record (random if omitted)
        #[arg(long)]
        submission_id: Option<Uuid>,
    },

    /// Score a micronutrient deficiency-risk submission
    Nutrients {
        /// JSON answers file: an object of question key to value, or an array of answer rows
        #[arg(long)]
        answers: PathBuf,

        /// JSON question catalogue (defaults to the seed micronutrient catalogue)
        #[arg(long)]
        catalogue: Option<PathBuf>,

        /// Submission id to record (random if omitted)
        #[arg(long)]
        submission_id: Option<Uuid>,
    },

    /// Print a seed catalogue and its version as JSON
    Catalogue {
        /// Questionnaire: naq or micronutrient
        kind: QuestionnaireKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli(cli.verbose).init()?;

    let output = match cli.command {
        Command::Naq {
            answers,
            catalogue,
            hierarchy,
            submission_id,
        } => {
            let mut config = ScoringConfig::load()?;
            if let Some(path) = hierarchy {
                config.hierarchy = RecommendationHierarchy::from_json_file(&path)?;
            }
            let answers = input::load_answers(&answers).await?;
            let service = build_service(catalogue, config);
            let scored = service
                .score_naq(submission_id.unwrap_or_else(Uuid::new_v4), &answers)
                .await?;
            serde_json::to_string_pretty(&scored)?
        }
        Command::Nutrients {
            answers,
            catalogue,
            submission_id,
        } => {
            let config = ScoringConfig::load()?;
            let answers = input::load_answers(&answers).await?;
            let service = build_service(catalogue, config);
            let scored = service
                .score_micronutrients(submission_id.unwrap_or_else(Uuid::new_v4), &answers)
                .await?;
            serde_json::to_string_pretty(&scored)?
        }
        Command::Catalogue { kind } => serde_json::to_string_pretty(&json!({
            "questionnaire": kind,
            "version": seed_catalogue_version(kind),
            "questions": seed_catalogue(kind),
        }))?,
    };

    println!("{output}");
    Ok(())
}

fn build_service(catalogue: Option<PathBuf>, config: ScoringConfig) -> ScoringService {
    let source: Arc<dyn CatalogueSource> = match catalogue {
        Some(path) => {
            debug!(path = %path.display(), "Using catalogue file");
            Arc::new(FileCatalogueSource::new(path))
        }
        None => Arc::new(InMemoryCatalogueSource::seeded()),
    };
    ScoringService::new(source, Arc::new(InMemoryScoreStore::new()), config)
}
