// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Plain-text backends
//!
//! Two reports share this module:
//! - `render_detailed_text` walks the same section fragments as the HTML
//!   backend, so the detailed report always carries the same fields with the
//!   same formatting. Sections get `=`-rule banners; labelled values are
//!   column-aligned per block.
//! - `render_brief_text` is a console-friendly summary built directly from
//!   the document: identification, one dataset line, one headline-metrics
//!   line, and a quality summary.
//!
//! Neither report embeds a timestamp; output is fully deterministic.

use crate::document::{ModelCardDocument, ModelKind};
use crate::sections::{self, Block, CellValue, Row, Section};
use crate::value;

const BANNER_WIDTH: usize = 60;

/// How much of the session identifier the brief report keeps.
const BRIEF_SESSION_CHARS: usize = 30;

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Render the detailed plain-text report.
pub fn render_detailed_text(doc: &ModelCardDocument) -> String {
    let mut lines: Vec<String> = vec![
        format!("MODEL CARD: {}", doc.model_name()),
        "=".repeat(80),
        String::new(),
    ];
    for section in sections::build_sections(doc) {
        write_section(&mut lines, &section);
    }
    lines.join("\n")
}

fn write_section(lines: &mut Vec<String>, section: &Section) {
    lines.push(banner());
    lines.push(section.title.to_uppercase());
    lines.push(banner());
    for block in &section.blocks {
        write_block(lines, block);
    }
    lines.push(String::new());
}

fn write_block(lines: &mut Vec<String>, block: &Block) {
    match block {
        Block::KeyValues { heading, rows } | Block::MetricGrid { heading, cells: rows } => {
            match heading {
                Some(heading) => {
                    lines.push(format!("{heading}:"));
                    write_aligned(lines, rows, "  ");
                }
                None => write_aligned(lines, rows, ""),
            }
        }
        Block::Tags { heading, tags } => {
            lines.push(format!("{heading}:"));
            for (i, tag) in tags.iter().enumerate() {
                lines.push(format!("  {:2}. {tag}", i + 1));
            }
        }
        Block::Features(rows) => {
            for row in rows {
                lines.push(format!("Feature: {}", row.name));
                lines.push(format!("  Type:          {}", row.data_type));
                lines.push(format!("  Encoder:       {}", row.encoder));
                lines.push(format!("  Unique Values: {}", cell_text(&row.unique_values)));
                if !row.samples.is_empty() {
                    let mut sample_line = format!("  Sample Values: {}", row.samples.join(", "));
                    if row.more > 0 {
                        sample_line.push_str(&format!(" (+{} more)", row.more));
                    }
                    lines.push(sample_line);
                }
                if let Some(stats) = &row.stats {
                    lines.push("  Statistics:".to_string());
                    let width = stats.iter().map(|(l, _)| l.len() + 1).max().unwrap_or(0);
                    for (label, stat) in stats {
                        lines.push(format!("    {:<width$} {stat}", format!("{label}:")));
                    }
                }
                lines.push(String::new());
            }
            // Feature blocks already end on a blank line.
            lines.pop();
        }
        Block::Table { columns, rows } => {
            // One labelled record per row, first column as the record header.
            let labels = &columns[1..];
            let width = labels.iter().map(|l| l.len() + 1).max().unwrap_or(0);
            for row in rows {
                lines.push(format!("{}: {}", columns[0], cell_text(&row[0])));
                for (label, cell) in labels.iter().zip(&row[1..]) {
                    lines.push(format!("  {:<width$} {}", format!("{label}:"), cell_text(cell)));
                }
                lines.push(String::new());
            }
            lines.pop();
        }
        Block::Recommendations(recs) => {
            lines.push("Recommendations:".to_string());
            for (i, rec) in recs.iter().enumerate() {
                lines.push(format!("  {}. Issue: {}", i + 1, rec.issue));
                lines.push(format!("     Suggestion: {}", rec.suggestion));
            }
        }
        Block::Warnings(warnings) => {
            lines.push("Warnings:".to_string());
            for (i, warning) in warnings.iter().enumerate() {
                lines.push(format!("  {}. [{}] {}", i + 1, warning.severity, warning.kind));
                lines.push(format!("     {}", warning.message));
                if let Some(recommendation) = &warning.recommendation {
                    lines.push(format!("     Recommendation: {recommendation}"));
                }
                if let Some(details) = &warning.details {
                    lines.push(format!("     Details: {details}"));
                }
            }
        }
        Block::Note { heading, body } => {
            lines.push(format!("{heading}:"));
            lines.push(format!("  {body}"));
        }
    }
}

fn write_aligned(lines: &mut Vec<String>, rows: &[Row], indent: &str) {
    let width = rows.iter().map(|r| r.label.len() + 1).max().unwrap_or(0);
    for row in rows {
        lines.push(format!(
            "{indent}{:<width$} {}",
            format!("{}:", row.label),
            cell_text(&row.value)
        ));
    }
}

fn cell_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) | CellValue::Code(s) | CellValue::Json(s) => s.clone(),
        CellValue::Missing => value::NOT_AVAILABLE.to_string(),
        CellValue::Badge { label, .. } => label.clone(),
    }
}

/// Render the brief plain-text summary.
pub fn render_brief_text(doc: &ModelCardDocument) -> String {
    let mi = &doc.model_identification;
    let na = || value::NOT_AVAILABLE.to_string();

    let session: String = mi
        .session_id
        .clone()
        .unwrap_or_else(na)
        .chars()
        .take(BRIEF_SESSION_CHARS)
        .collect();

    let td = &doc.training_dataset;
    let dataset_line = format!(
        "Training: {} rows, {} features",
        value::format_count(td.train_rows.unwrap_or(0)),
        td.total_features.unwrap_or(0)
    );

    let lines = vec![
        format!("MODEL CARD: {}", doc.model_name()),
        banner(),
        String::new(),
        format!("Model: {}", mi.name.clone().unwrap_or_else(na)),
        format!("Type: {}", mi.model_type.clone().unwrap_or_else(na)),
        format!("Status: {}", mi.status.clone().unwrap_or_else(na)),
        format!("Session: {session}..."),
        String::new(),
        dataset_line,
        String::new(),
        brief_metrics(doc),
        String::new(),
        brief_quality(doc),
        String::new(),
    ];
    lines.join("\n")
}

fn brief_metrics(doc: &ModelCardDocument) -> String {
    let tm = &doc.training_metrics;
    if doc.model_kind() == ModelKind::SinglePredictor {
        if let Some(cm) = &tm.classification_metrics {
            return format!(
                "Accuracy: {}, F1: {}, AUC: {}",
                value::format_percentage(cm.accuracy),
                value::format_percentage(cm.f1),
                value::format_percentage(cm.auc)
            );
        }
    } else if let Some(best) = &tm.best_epoch {
        if let Some(val_loss) = best.validation_loss {
            return format!(
                "Best Val Loss: {}",
                value::format_float(val_loss, value::DEFAULT_PRECISION)
            );
        }
    }
    value::NOT_AVAILABLE.to_string()
}

fn brief_quality(doc: &ModelCardDocument) -> String {
    let mq = &doc.model_quality;
    let mut lines = Vec::new();
    if let Some(assessment) = &mq.assessment {
        lines.push(format!("Quality: {assessment}"));
    }
    if !mq.warnings.is_empty() {
        lines.push(format!("Warnings: {}", mq.warnings.len()));
    }
    if lines.is_empty() {
        value::NOT_AVAILABLE.to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_from(value: serde_json::Value) -> ModelCardDocument {
        serde_json::from_value(value).expect("document parses")
    }

    fn example_doc() -> ModelCardDocument {
        doc_from(json!({
            "model_identification": {
                "session_id": "sess-8f2c1a9d4e6b40bd95ce1f0a2b3c4d5e",
                "name": "alphafreight-mini",
                "model_type": "Single Predictor",
                "status": "done",
                "target_column": "on_time_delivery"
            },
            "training_dataset": {
                "train_rows": 431000,
                "total_features": 18
            },
            "training_metrics": {
                "best_epoch": {"epoch": 28, "validation_loss": 0.1334, "train_loss": 0.1212},
                "classification_metrics": {
                    "accuracy": 0.925, "precision": 0.912, "recall": 0.887,
                    "f1": 0.899, "auc": 0.967, "is_binary": true
                }
            },
            "model_quality": {
                "assessment": "Good",
                "warnings": [{
                    "type": "CLASS_IMBALANCE",
                    "severity": "MODERATE",
                    "message": "Class distribution is skewed"
                }]
            }
        }))
    }

    #[test]
    fn test_brief_headline_metrics_line() {
        let brief = render_brief_text(&example_doc());
        assert!(brief.contains("Accuracy: 92.50%, F1: 89.90%, AUC: 96.70%"));
    }

    #[test]
    fn test_brief_structure() {
        let brief = render_brief_text(&example_doc());
        assert!(brief.starts_with("MODEL CARD: alphafreight-mini\n"));
        assert!(brief.contains("Model: alphafreight-mini"));
        assert!(brief.contains("Type: Single Predictor"));
        assert!(brief.contains("Status: done"));
        assert!(brief.contains("Training: 431,000 rows, 18 features"));
        assert!(brief.contains("Quality: Good"));
        assert!(brief.contains("Warnings: 1"));
    }

    #[test]
    fn test_brief_session_truncated() {
        let brief = render_brief_text(&example_doc());
        assert!(brief.contains("Session: sess-8f2c1a9d4e6b40bd95ce1f0a2..."));
    }

    #[test]
    fn test_brief_val_loss_for_non_classifier() {
        let doc = doc_from(json!({
            "model_identification": {"model_type": "Embedding Space"},
            "training_metrics": {"best_epoch": {"validation_loss": 0.1334}}
        }));
        let brief = render_brief_text(&doc);
        assert!(brief.contains("Best Val Loss: 0.1334"));
    }

    #[test]
    fn test_brief_empty_document_uses_sentinels() {
        let brief = render_brief_text(&ModelCardDocument::default());
        assert!(brief.contains("Model: N/A"));
        assert!(brief.contains("Session: N/A..."));
        assert!(brief.contains("Training: 0 rows, 0 features"));
    }

    #[test]
    fn test_detailed_banners_and_order() {
        let detailed = render_detailed_text(&example_doc());
        let rule = "=".repeat(60);
        assert!(detailed.contains(&format!("{rule}\nMODEL IDENTIFICATION\n{rule}")));
        let ident = detailed.find("MODEL IDENTIFICATION").unwrap();
        let dataset = detailed.find("TRAINING DATASET").unwrap();
        let metrics = detailed.find("TRAINING METRICS").unwrap();
        let quality = detailed.find("MODEL QUALITY").unwrap();
        assert!(ident < dataset && dataset < metrics && metrics < quality);
    }

    #[test]
    fn test_detailed_sections_match_html_content() {
        let detailed = render_detailed_text(&example_doc());
        assert!(detailed.contains("Session ID:"));
        assert!(detailed.contains("Accuracy:"));
        assert!(detailed.contains("92.50%"));
        assert!(detailed.contains("[MODERATE] CLASS_IMBALANCE"));
    }

    #[test]
    fn test_detailed_empty_sections_omitted() {
        let detailed = render_detailed_text(&ModelCardDocument::default());
        assert!(!detailed.contains("FEATURE INVENTORY"));
        assert!(!detailed.contains("COLUMN STATISTICS"));
    }

    #[test]
    fn test_detailed_column_statistics_records() {
        let doc = doc_from(json!({
            "column_statistics": {
                "fleet_size": {"mutual_information_bits": 2.34, "marginal_loss": 0.012}
            }
        }));
        let detailed = render_detailed_text(&doc);
        assert!(detailed.contains("COLUMN STATISTICS"));
        assert!(detailed.contains("Column: fleet_size"));
        assert!(detailed.contains("Mutual Information (bits): 2.34"));
    }

    #[test]
    fn test_detailed_feature_records() {
        let doc = doc_from(json!({
            "feature_inventory": [{
                "name": "fleet_size",
                "type": "scalar",
                "encoder_type": "numeric",
                "unique_values": 431,
                "sample_values": [12, 48, 7, 230, 95, 61],
                "statistics": {"min": 1.0, "max": 4820.0, "mean": 86.4}
            }]
        }));
        let detailed = render_detailed_text(&doc);
        assert!(detailed.contains("Feature: fleet_size"));
        assert!(detailed.contains("Sample Values: 12, 48, 7, 230, 95 (+1 more)"));
        assert!(detailed.contains("Min:"));
        assert!(detailed.contains("Median:"));
    }

    #[test]
    fn test_detailed_deterministic() {
        let doc = example_doc();
        assert_eq!(render_detailed_text(&doc), render_detailed_text(&doc));
    }

    #[test]
    fn test_aligned_labels() {
        let doc = doc_from(json!({
            "technical_details": {"pytorch_version": "2.1.0", "device": "cuda"}
        }));
        let detailed = render_detailed_text(&doc);
        // Labels pad to the widest in the block, one space before the value.
        assert!(detailed.contains("PyTorch Version: 2.1.0"));
        assert!(detailed.contains("Device:          cuda"));
    }
}
