// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Section fragments shared by the HTML and text backends
//!
//! Each top-level card area has one builder `(document) -> Option<Section>`
//! that resolves field lookups, default substitution, and conditional blocks
//! into a small declarative fragment model. The HTML and detailed-text
//! emitters then walk the same fragments, so the two reports cannot drift on
//! which fields appear or how they are formatted.
//!
//! Builders return `None` when the section's governing data is empty and the
//! section must vanish from the output entirely (feature inventory and column
//! statistics); every other section always renders, substituting `N/A`.

use crate::document::{ModelCardDocument, ModelKind};
use crate::value;
use serde_json::Value;

/// A self-contained rendered piece of the card, one per top-level area.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    /// Whether the HTML disclosure starts expanded.
    pub open: bool,
    pub blocks: Vec<Block>,
}

/// One display value, with enough shape for the HTML backend to pick a
/// container; the text backend flattens everything to its label.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// Absent value; `N/A` in text, emphasized `N/A` in HTML.
    Missing,
    /// Identifier rendered in a monospace container.
    Code(String),
    /// Colored pill; the color is a presentation hint only.
    Badge { label: String, color: &'static str },
    /// Pre-formatted JSON payload.
    Json(String),
}

impl CellValue {
    /// Wrap an already-formatted string, mapping the sentinel to `Missing`.
    pub fn from_formatted(s: String) -> Self {
        if s == value::NOT_AVAILABLE {
            Self::Missing
        } else {
            Self::Text(s)
        }
    }

    fn code(value: Option<&str>) -> Self {
        match value {
            Some(v) => Self::Code(v.to_string()),
            None => Self::Missing,
        }
    }

    fn text(value: Option<&str>) -> Self {
        match value {
            Some(v) => Self::Text(v.to_string()),
            None => Self::Missing,
        }
    }
}

/// A labelled value inside a key/value or metric block.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: CellValue,
}

impl Row {
    pub fn new(label: &'static str, value: CellValue) -> Self {
        Self { label, value }
    }
}

/// One feature-inventory entry, precomputed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub name: String,
    pub data_type: String,
    pub encoder: String,
    pub unique_values: CellValue,
    /// Up to [`SAMPLE_VALUE_LIMIT`] formatted sample values.
    pub samples: Vec<String>,
    /// How many sample values were cut off.
    pub more: usize,
    /// Min/Max/Mean/Std/Median, when statistics are present.
    pub stats: Option<Vec<(&'static str, String)>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    pub issue: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarningView {
    pub severity: String,
    pub color: &'static str,
    pub kind: String,
    pub message: String,
    pub recommendation: Option<String>,
    /// Pretty-printed details payload, revealed only when present.
    pub details: Option<String>,
}

/// A block inside a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Label/value pairs; an info table in HTML, aligned lines in text.
    KeyValues {
        heading: Option<&'static str>,
        rows: Vec<Row>,
    },
    /// Headline numbers; a card grid in HTML, one line per metric in text.
    MetricGrid {
        heading: Option<&'static str>,
        cells: Vec<Row>,
    },
    /// Short string chips (feature names).
    Tags {
        heading: &'static str,
        tags: Vec<String>,
    },
    /// The feature-inventory table.
    Features(Vec<FeatureRow>),
    /// A plain data table; text mode renders one record per block with the
    /// first column as the record header.
    Table {
        columns: Vec<&'static str>,
        rows: Vec<Vec<CellValue>>,
    },
    Recommendations(Vec<RecommendationView>),
    Warnings(Vec<WarningView>),
    /// A highlighted free-text callout.
    Note {
        heading: &'static str,
        body: String,
    },
}

/// Feature inventory is truncated to this many records.
pub const FEATURE_LIMIT: usize = 50;

/// At most this many sample values render per feature.
pub const SAMPLE_VALUE_LIMIT: usize = 5;

/// Build all sections in their fixed report order, skipping the ones whose
/// governing data is empty.
pub fn build_sections(doc: &ModelCardDocument) -> Vec<Section> {
    [
        Some(identification(doc)),
        Some(training_dataset(doc)),
        feature_inventory(doc),
        Some(training_configuration(doc)),
        Some(training_metrics(doc)),
        Some(model_architecture(doc)),
        Some(model_quality(doc)),
        Some(technical_details(doc)),
        Some(provenance(doc)),
        column_statistics(doc),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn na() -> String {
    value::NOT_AVAILABLE.to_string()
}

pub fn identification(doc: &ModelCardDocument) -> Section {
    let mi = &doc.model_identification;
    let status_value = match mi.status.as_deref() {
        Some(status) => CellValue::Badge {
            label: status.to_string(),
            color: value::status_color(status),
        },
        None => CellValue::Missing,
    };
    let rows = vec![
        Row::new("Session ID", CellValue::code(mi.session_id.as_deref())),
        Row::new("Job ID", CellValue::code(mi.job_id.as_deref())),
        Row::new("Name", CellValue::text(mi.name.as_deref())),
        Row::new("Model Type", CellValue::from_formatted(mi.model_type_display())),
        Row::new("Status", status_value),
        Row::new("Target Column", CellValue::text(mi.target_column.as_deref())),
        Row::new("Target Type", CellValue::text(mi.target_column_type.as_deref())),
        Row::new("Compute Cluster", CellValue::text(mi.compute_cluster.as_deref())),
        Row::new("Training Date", CellValue::text(mi.training_date.as_deref())),
        Row::new("Framework", CellValue::text(mi.framework.as_deref())),
    ];
    Section {
        title: "Model Identification",
        open: true,
        blocks: vec![Block::KeyValues { heading: None, rows }],
    }
}

pub fn training_dataset(doc: &ModelCardDocument) -> Section {
    let td = &doc.training_dataset;
    let count = |v: Option<u64>| CellValue::Text(value::format_count(v.unwrap_or(0)));
    let cells = vec![
        Row::new("Training Rows", count(td.train_rows)),
        Row::new("Validation Rows", count(td.val_rows)),
        Row::new("Total Rows", count(td.total_rows)),
        Row::new("Total Features", CellValue::Text(td.total_features.unwrap_or(0).to_string())),
    ];
    let mut blocks = vec![
        Block::MetricGrid { heading: None, cells },
        Block::KeyValues {
            heading: None,
            rows: vec![Row::new("Target Column", CellValue::text(td.target_column.as_deref()))],
        },
    ];
    if !td.feature_names.is_empty() {
        blocks.push(Block::Tags {
            heading: "Feature Names",
            tags: td.feature_names.clone(),
        });
    }
    Section {
        title: "Training Dataset",
        open: true,
        blocks,
    }
}

pub fn feature_inventory(doc: &ModelCardDocument) -> Option<Section> {
    if doc.feature_inventory.is_empty() {
        return None;
    }
    let rows: Vec<FeatureRow> = doc
        .feature_inventory
        .iter()
        .take(FEATURE_LIMIT)
        .map(feature_row)
        .collect();
    Some(Section {
        title: "Feature Inventory",
        // The one section that starts collapsed: feature tables get long.
        open: false,
        blocks: vec![Block::Features(rows)],
    })
}

fn feature_row(feat: &crate::document::FeatureRecord) -> FeatureRow {
    let samples: Vec<String> = feat
        .sample_values
        .iter()
        .take(SAMPLE_VALUE_LIMIT)
        .map(|v| value::format_scalar(Some(v), value::DEFAULT_PRECISION))
        .collect();
    let more = feat.sample_values.len().saturating_sub(SAMPLE_VALUE_LIMIT);
    let stats = feat.statistics.as_ref().map(|s| {
        vec![
            ("Min", value::float_or_na(s.min, value::DEFAULT_PRECISION)),
            ("Max", value::float_or_na(s.max, value::DEFAULT_PRECISION)),
            ("Mean", value::float_or_na(s.mean, value::DEFAULT_PRECISION)),
            ("Std", value::float_or_na(s.std, value::DEFAULT_PRECISION)),
            ("Median", value::float_or_na(s.median, value::DEFAULT_PRECISION)),
        ]
    });
    FeatureRow {
        name: feat.name.clone().unwrap_or_else(na),
        data_type: feat.data_type.clone().unwrap_or_else(na),
        encoder: feat.encoder_type.clone().unwrap_or_else(na),
        unique_values: CellValue::from_formatted(value::display_or_na(feat.unique_values)),
        samples,
        more,
        stats,
    }
}

pub fn training_configuration(doc: &ModelCardDocument) -> Section {
    let tc = &doc.training_configuration;
    let rows = vec![
        Row::new("Total Epochs", CellValue::from_formatted(value::display_or_na(tc.epochs_total))),
        Row::new("Best Epoch", CellValue::from_formatted(value::display_or_na(tc.best_epoch))),
        Row::new("d_model", CellValue::from_formatted(value::display_or_na(tc.d_model))),
        Row::new("Batch Size", CellValue::from_formatted(value::display_or_na(tc.batch_size))),
        Row::new(
            "Learning Rate",
            CellValue::from_formatted(value::float_or_na(tc.learning_rate, value::DEFAULT_PRECISION)),
        ),
        Row::new("Optimizer", CellValue::text(tc.optimizer.as_deref())),
    ];
    let mut blocks = vec![Block::KeyValues { heading: None, rows }];
    if let Some(dropout) = &tc.dropout_schedule {
        blocks.push(Block::KeyValues {
            heading: Some("Dropout Schedule"),
            rows: vec![
                Row::new(
                    "Enabled",
                    CellValue::Text(if dropout.enabled { "True" } else { "False" }.to_string()),
                ),
                Row::new(
                    "Initial",
                    CellValue::from_formatted(value::float_or_na(dropout.initial, value::DEFAULT_PRECISION)),
                ),
                Row::new(
                    "Final",
                    CellValue::from_formatted(value::float_or_na(dropout.r#final, value::DEFAULT_PRECISION)),
                ),
            ],
        });
    }
    Section {
        title: "Training Configuration",
        open: true,
        blocks,
    }
}

pub fn training_metrics(doc: &ModelCardDocument) -> Section {
    let tm = &doc.training_metrics;
    let mut blocks = vec![best_epoch_block(tm.best_epoch.as_ref())];

    match doc.model_kind() {
        ModelKind::SinglePredictor => {
            if let Some(cm) = &tm.classification_metrics {
                let pct = |v| CellValue::from_formatted(value::format_percentage(v));
                blocks.push(Block::MetricGrid {
                    heading: Some("Classification Metrics"),
                    cells: vec![
                        Row::new("Accuracy", pct(cm.accuracy)),
                        Row::new("Precision", pct(cm.precision)),
                        Row::new("Recall", pct(cm.recall)),
                        Row::new("F1 Score", pct(cm.f1)),
                        Row::new("AUC", pct(cm.auc)),
                        Row::new(
                            "Binary Classification",
                            CellValue::Text(if cm.is_binary { "True" } else { "False" }.to_string()),
                        ),
                    ],
                });
            }
            if let Some(ot) = &tm.optimal_threshold {
                blocks.push(Block::KeyValues {
                    heading: Some("Optimal Threshold"),
                    rows: vec![
                        Row::new(
                            "Optimal Threshold",
                            CellValue::from_formatted(value::float_or_na(
                                ot.optimal_threshold,
                                value::DEFAULT_PRECISION,
                            )),
                        ),
                        Row::new(
                            "Positive Label",
                            CellValue::from_formatted(value::format_scalar(
                                ot.pos_label.as_ref(),
                                value::DEFAULT_PRECISION,
                            )),
                        ),
                        Row::new(
                            "F1 at Optimal Threshold",
                            CellValue::from_formatted(value::format_percentage(ot.optimal_threshold_f1)),
                        ),
                        Row::new(
                            "Accuracy at Optimal Threshold",
                            CellValue::from_formatted(value::format_percentage(
                                ot.accuracy_at_optimal_threshold,
                            )),
                        ),
                    ],
                });
            }
            if let Some(am) = &tm.argmax_metrics {
                let pct = |v| CellValue::from_formatted(value::format_percentage(v));
                blocks.push(Block::MetricGrid {
                    heading: Some("Argmax Metrics"),
                    cells: vec![
                        Row::new("Accuracy", pct(am.accuracy)),
                        Row::new("Precision", pct(am.precision)),
                        Row::new("Recall", pct(am.recall)),
                        Row::new("F1 Score", pct(am.f1)),
                    ],
                });
            }
        }
        ModelKind::EmbeddingSpace => {
            let float = |v| CellValue::from_formatted(value::float_or_na(v, value::DEFAULT_PRECISION));
            if let Some(lp) = &tm.loss_progression {
                blocks.push(Block::KeyValues {
                    heading: Some("Loss Progression"),
                    rows: vec![
                        Row::new("Initial Train Loss", float(lp.initial_train)),
                        Row::new("Initial Val Loss", float(lp.initial_val)),
                        Row::new("Improvement %", float(lp.improvement_pct)),
                    ],
                });
            }
            if let Some(fe) = &tm.final_epoch {
                blocks.push(Block::KeyValues {
                    heading: Some("Final Epoch"),
                    rows: vec![
                        Row::new("Epoch", CellValue::from_formatted(value::display_or_na(fe.epoch))),
                        Row::new("Train Loss", float(fe.train_loss)),
                        Row::new("Val Loss", float(fe.val_loss)),
                    ],
                });
            }
        }
        // Unrecognized model types get only the best-epoch block.
        ModelKind::Other => {}
    }

    Section {
        title: "Training Metrics",
        open: true,
        blocks,
    }
}

fn best_epoch_block(best: Option<&crate::document::BestEpoch>) -> Block {
    let float = |v| CellValue::from_formatted(value::float_or_na(v, value::DEFAULT_PRECISION));
    let mut rows = vec![
        Row::new(
            "Epoch",
            CellValue::from_formatted(value::display_or_na(best.and_then(|b| b.epoch))),
        ),
        Row::new("Validation Loss", float(best.and_then(|b| b.validation_loss))),
        Row::new("Train Loss", float(best.and_then(|b| b.train_loss))),
    ];
    // The embedding-space loss decomposition shows up as one group.
    if let Some(best) = best {
        if best.spread_loss.is_some() {
            rows.push(Row::new("Spread Loss", float(best.spread_loss)));
            rows.push(Row::new("Joint Loss", float(best.joint_loss)));
            rows.push(Row::new("Marginal Loss", float(best.marginal_loss)));
        }
    }
    Block::KeyValues {
        heading: Some("Best Epoch"),
        rows,
    }
}

pub fn model_architecture(doc: &ModelCardDocument) -> Section {
    let ma = &doc.model_architecture;
    let mut rows = Vec::new();
    if let Some(layers) = ma.predictor_layers {
        rows.push(Row::new("Predictor Layers", CellValue::Text(layers.to_string())));
    }
    if let Some(params) = ma.predictor_parameters {
        rows.push(Row::new(
            "Predictor Parameters",
            CellValue::Text(value::format_count(params)),
        ));
    }
    if let Some(d_model) = ma.embedding_space_d_model {
        rows.push(Row::new(
            "Embedding Space d_model",
            CellValue::Text(d_model.to_string()),
        ));
    }
    Section {
        title: "Model Architecture",
        open: true,
        blocks: vec![Block::KeyValues { heading: None, rows }],
    }
}

pub fn model_quality(doc: &ModelCardDocument) -> Section {
    let mq = &doc.model_quality;
    let mut blocks = Vec::new();
    if let Some(assessment) = &mq.assessment {
        blocks.push(Block::KeyValues {
            heading: None,
            rows: vec![Row::new(
                "Assessment",
                CellValue::Badge {
                    label: assessment.clone(),
                    color: value::quality_color(Some(assessment)),
                },
            )],
        });
    }
    if !mq.recommendations.is_empty() {
        blocks.push(Block::Recommendations(
            mq.recommendations
                .iter()
                .map(|rec| RecommendationView {
                    issue: rec.issue.clone().unwrap_or_else(na),
                    suggestion: rec.suggestion.clone().unwrap_or_else(na),
                })
                .collect(),
        ));
    }
    if !mq.warnings.is_empty() {
        blocks.push(Block::Warnings(mq.warnings.iter().map(warning_view).collect()));
    }
    if let Some(warning) = &mq.training_quality_warning {
        blocks.push(Block::Note {
            heading: "Training Quality Warning",
            body: warning.clone(),
        });
    }
    Section {
        title: "Model Quality",
        open: true,
        blocks,
    }
}

fn warning_view(warning: &crate::document::QualityWarning) -> WarningView {
    let severity = warning.severity.clone().unwrap_or_else(|| "UNKNOWN".to_string());
    let color = value::severity_color(&severity);
    WarningView {
        color,
        severity,
        kind: warning.kind.clone().unwrap_or_else(na),
        message: warning.message.clone().unwrap_or_else(na),
        recommendation: warning.recommendation.clone(),
        details: warning
            .details
            .as_ref()
            .filter(|d| !matches!(d, Value::Null))
            .map(|d| serde_json::to_string_pretty(d).unwrap_or_default()),
    }
}

pub fn technical_details(doc: &ModelCardDocument) -> Section {
    let td = &doc.technical_details;
    let mut rows = vec![
        Row::new("PyTorch Version", CellValue::text(td.pytorch_version.as_deref())),
        Row::new("Device", CellValue::text(td.device.as_deref())),
        Row::new("Precision", CellValue::text(td.precision.as_deref())),
        Row::new("Loss Function", CellValue::text(td.loss_function.as_deref())),
    ];
    if let Some(norm) = &td.normalization {
        rows.push(Row::new("Normalization", CellValue::Text(norm.clone())));
    }
    Section {
        title: "Technical Details",
        open: true,
        blocks: vec![Block::KeyValues { heading: None, rows }],
    }
}

pub fn provenance(doc: &ModelCardDocument) -> Section {
    let prov = &doc.provenance;
    let mut rows = vec![Row::new("Created At", CellValue::text(prov.created_at.as_deref()))];
    if let Some(minutes) = prov.training_duration_minutes {
        let (h, m) = prov.duration_parts().unwrap_or((0, 0));
        rows.push(Row::new(
            "Training Duration",
            CellValue::Text(format!("{h}h {m}m ({minutes:.2} minutes)")),
        ));
    }
    if let Some(version_info) = &prov.version_info {
        if !matches!(version_info, Value::Null) {
            rows.push(Row::new(
                "Version Info",
                CellValue::Json(serde_json::to_string_pretty(version_info).unwrap_or_default()),
            ));
        }
    }
    Section {
        title: "Provenance",
        open: true,
        blocks: vec![Block::KeyValues { heading: None, rows }],
    }
}

pub fn column_statistics(doc: &ModelCardDocument) -> Option<Section> {
    if doc.column_statistics.is_empty() {
        return None;
    }
    let rows: Vec<Vec<CellValue>> = doc
        .column_statistics
        .iter()
        .map(|(name, stats)| {
            vec![
                CellValue::Text(name.clone()),
                CellValue::from_formatted(value::float_or_na(
                    stats.mutual_information_bits,
                    value::DEFAULT_PRECISION,
                )),
                CellValue::from_formatted(value::float_or_na(
                    stats.marginal_loss,
                    value::DEFAULT_PRECISION,
                )),
            ]
        })
        .collect();
    Some(Section {
        title: "Column Statistics",
        open: true,
        blocks: vec![Block::Table {
            columns: vec!["Column", "Mutual Information (bits)", "Marginal Loss"],
            rows,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FeatureRecord, ModelCardDocument};
    use serde_json::json;

    fn doc_from(value: serde_json::Value) -> ModelCardDocument {
        serde_json::from_value(value).expect("document parses")
    }

    #[test]
    fn test_feature_inventory_omitted_when_empty() {
        let doc = ModelCardDocument::default();
        assert!(feature_inventory(&doc).is_none());
    }

    #[test]
    fn test_feature_inventory_truncates_to_limit() {
        let features: Vec<serde_json::Value> = (0..75)
            .map(|i| json!({"name": format!("feat_{i}"), "type": "scalar"}))
            .collect();
        let doc = doc_from(json!({"feature_inventory": features}));
        let section = feature_inventory(&doc).expect("section present");
        let Block::Features(rows) = &section.blocks[0] else {
            panic!("expected feature block");
        };
        assert_eq!(rows.len(), FEATURE_LIMIT);
        // Input order preserved, no re-sorting.
        assert_eq!(rows[0].name, "feat_0");
        assert_eq!(rows[49].name, "feat_49");
        assert!(!section.open, "feature inventory starts collapsed");
    }

    #[test]
    fn test_sample_values_capped_with_more_count() {
        let feat: FeatureRecord = serde_json::from_value(json!({
            "name": "region",
            "sample_values": ["a", "b", "c", "d", "e", "f", "g", "h"]
        }))
        .expect("feature parses");
        let row = feature_row(&feat);
        assert_eq!(row.samples, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(row.more, 3);
    }

    #[test]
    fn test_sample_values_no_more_suffix_at_limit() {
        let feat: FeatureRecord = serde_json::from_value(json!({
            "name": "region",
            "sample_values": ["a", "b", "c"]
        }))
        .expect("feature parses");
        let row = feature_row(&feat);
        assert_eq!(row.samples.len(), 3);
        assert_eq!(row.more, 0);
    }

    #[test]
    fn test_single_predictor_metric_blocks() {
        let doc = doc_from(json!({
            "model_identification": {"model_type": "Single Predictor"},
            "training_metrics": {
                "classification_metrics": {"accuracy": 0.925, "f1": 0.899},
                "optimal_threshold": {"optimal_threshold": 0.452},
                "argmax_metrics": {"accuracy": 0.9},
                "loss_progression": {"initial_train": 1.5},
                "final_epoch": {"epoch": 32}
            }
        }));
        let section = training_metrics(&doc);
        let headings: Vec<_> = section
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::KeyValues { heading, .. } | Block::MetricGrid { heading, .. } => *heading,
                _ => None,
            })
            .collect();
        assert!(headings.contains(&"Classification Metrics"));
        assert!(headings.contains(&"Optimal Threshold"));
        assert!(headings.contains(&"Argmax Metrics"));
        // Embedding-space blocks must not render for a Single Predictor.
        assert!(!headings.contains(&"Loss Progression"));
        assert!(!headings.contains(&"Final Epoch"));
    }

    #[test]
    fn test_embedding_space_metric_blocks() {
        let doc = doc_from(json!({
            "model_identification": {"model_type": "Embedding Space"},
            "training_metrics": {
                "classification_metrics": {"accuracy": 0.925},
                "loss_progression": {"initial_train": 1.5, "improvement_pct": 42.0},
                "final_epoch": {"epoch": 32, "train_loss": 0.2, "val_loss": 0.25}
            }
        }));
        let section = training_metrics(&doc);
        let headings: Vec<_> = section
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::KeyValues { heading, .. } | Block::MetricGrid { heading, .. } => *heading,
                _ => None,
            })
            .collect();
        assert!(headings.contains(&"Loss Progression"));
        assert!(headings.contains(&"Final Epoch"));
        assert!(!headings.contains(&"Classification Metrics"));
    }

    #[test]
    fn test_unrecognized_model_type_only_best_epoch() {
        let doc = doc_from(json!({
            "model_identification": {"model_type": "Ensemble"},
            "training_metrics": {
                "best_epoch": {"epoch": 7},
                "classification_metrics": {"accuracy": 0.9},
                "loss_progression": {"initial_train": 1.0}
            }
        }));
        let section = training_metrics(&doc);
        assert_eq!(section.blocks.len(), 1);
        let Block::KeyValues { heading, .. } = &section.blocks[0] else {
            panic!("expected key/value block");
        };
        assert_eq!(*heading, Some("Best Epoch"));
    }

    #[test]
    fn test_best_epoch_block_always_present() {
        let section = training_metrics(&ModelCardDocument::default());
        assert_eq!(section.blocks.len(), 1);
    }

    #[test]
    fn test_best_epoch_loss_decomposition_toggles_on_spread() {
        let doc = doc_from(json!({
            "training_metrics": {
                "best_epoch": {
                    "epoch": 28, "validation_loss": 0.13, "train_loss": 0.12,
                    "spread_loss": 0.01, "joint_loss": 0.05, "marginal_loss": 0.07
                }
            }
        }));
        let Block::KeyValues { rows, .. } = &training_metrics(&doc).blocks[0] else {
            panic!("expected key/value block");
        };
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[3].label, "Spread Loss");
    }

    #[test]
    fn test_column_statistics_omitted_when_empty() {
        assert!(column_statistics(&ModelCardDocument::default()).is_none());
        let doc = doc_from(json!({"column_statistics": {}}));
        assert!(column_statistics(&doc).is_none());
    }

    #[test]
    fn test_column_statistics_table() {
        let doc = doc_from(json!({
            "column_statistics": {
                "fleet_size": {"mutual_information_bits": 2.34, "marginal_loss": 0.012}
            }
        }));
        let section = column_statistics(&doc).expect("section present");
        let Block::Table { rows, .. } = &section.blocks[0] else {
            panic!("expected table block");
        };
        assert_eq!(rows[0][0], CellValue::Text("fleet_size".to_string()));
        assert_eq!(rows[0][1], CellValue::Text("2.34".to_string()));
    }

    #[test]
    fn test_quality_blocks_omitted_when_empty() {
        let section = model_quality(&ModelCardDocument::default());
        assert!(section.blocks.is_empty());
    }

    #[test]
    fn test_warning_view_defaults() {
        let doc = doc_from(json!({
            "model_quality": {"warnings": [{"message": "something looks off"}]}
        }));
        let section = model_quality(&doc);
        let Block::Warnings(warnings) = &section.blocks[0] else {
            panic!("expected warnings block");
        };
        assert_eq!(warnings[0].severity, "UNKNOWN");
        assert_eq!(warnings[0].color, crate::value::NEUTRAL_COLOR);
        assert!(warnings[0].details.is_none());
    }

    #[test]
    fn test_architecture_rows_independently_optional() {
        let doc = doc_from(json!({"model_architecture": {"predictor_parameters": 264925317}}));
        let Block::KeyValues { rows, .. } = &model_architecture(&doc).blocks[0] else {
            panic!("expected key/value block");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, CellValue::Text("264,925,317".to_string()));
    }

    #[test]
    fn test_provenance_duration_format() {
        let doc = doc_from(json!({"provenance": {"training_duration_minutes": 45.2}}));
        let Block::KeyValues { rows, .. } = &provenance(&doc).blocks[0] else {
            panic!("expected key/value block");
        };
        assert_eq!(rows[1].value, CellValue::Text("0h 45m (45.20 minutes)".to_string()));
    }

    #[test]
    fn test_section_order_and_omission() {
        let doc = ModelCardDocument::default();
        let titles: Vec<_> = build_sections(&doc).iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Model Identification",
                "Training Dataset",
                "Training Configuration",
                "Training Metrics",
                "Model Architecture",
                "Model Quality",
                "Technical Details",
                "Provenance",
            ]
        );
    }
}
