// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Model-card rendering CLI
//!
//! Usage:
//!   mcard card.json --format html --output card.html
//!   mcard card.json --format text-brief

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use modelcard_render::{render_to_file, render_to_string, ModelCardDocument, RenderMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mcard")]
#[command(about = "Render a trained-model card JSON into HTML or text reports")]
#[command(version)]
struct Args {
    /// Path to the model card JSON file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Html,
    TextBrief,
    TextDetailed,
}

impl From<Format> for RenderMode {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => RenderMode::Html,
            Format::TextBrief => RenderMode::TextBrief,
            Format::TextDetailed => RenderMode::TextDetailed,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let doc = ModelCardDocument::from_json(&raw)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    tracing::info!(model = %doc.model_name(), format = ?args.format, "rendering model card");

    let mode = RenderMode::from(args.format);
    let generated_at = chrono::Utc::now();

    match args.output {
        Some(path) => {
            let written = render_to_file(&doc, mode, generated_at, &path)?;
            println!("Report saved to: {}", written.display());
        }
        None => {
            print!("{}", render_to_string(&doc, mode, generated_at));
        }
    }

    Ok(())
}
