// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Typed model-card document
//!
//! The card is a read-only snapshot of a training run: identification,
//! dataset, features, configuration, metrics, architecture, quality findings,
//! technical details, provenance, and per-column statistics. Every section and
//! every field inside a section is optional; an absent key deserializes to its
//! default and renders as the `N/A` sentinel or an omitted block, never an
//! error. A field that is present but has the wrong shape fails at
//! deserialization time — the renderers do no coercion of their own.
//!
//! Free-form payloads (version info, warning details, sample values) stay as
//! raw `serde_json::Value` so the renderers can dump them verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A complete model-card document, parsed from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelCardDocument {
    pub model_identification: ModelIdentification,
    pub training_dataset: TrainingDataset,
    pub feature_inventory: Vec<FeatureRecord>,
    pub training_configuration: TrainingConfiguration,
    pub training_metrics: TrainingMetrics,
    pub model_architecture: ModelArchitecture,
    pub model_quality: ModelQuality,
    pub technical_details: TechnicalDetails,
    pub provenance: Provenance,
    /// Per-column statistics, Embedding Space models only. Keyed by column
    /// name; `BTreeMap` so render order is stable across runs.
    pub column_statistics: BTreeMap<String, ColumnStatistics>,
}

impl ModelCardDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The display name used in report headers.
    pub fn model_name(&self) -> &str {
        self.model_identification.name.as_deref().unwrap_or("Model Card")
    }

    /// Classify the model type for metrics branching.
    pub fn model_kind(&self) -> ModelKind {
        ModelKind::parse(self.model_identification.model_type.as_deref())
    }
}

/// Model type classification driving which metric blocks render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    SinglePredictor,
    EmbeddingSpace,
    Other,
}

impl ModelKind {
    /// Accepts the long form and the short code used by older cards.
    pub fn parse(model_type: Option<&str>) -> Self {
        match model_type.unwrap_or_default().to_lowercase().as_str() {
            "single predictor" | "sp" => Self::SinglePredictor,
            "embedding space" | "es" => Self::EmbeddingSpace,
            _ => Self::Other,
        }
    }
}

/// Who and what trained this model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelIdentification {
    pub session_id: Option<String>,
    pub job_id: Option<String>,
    pub name: Option<String>,
    pub target_column: Option<String>,
    pub target_column_type: Option<String>,
    pub compute_cluster: Option<String>,
    pub training_date: Option<String>,
    pub status: Option<String>,
    pub model_type: Option<String>,
    pub framework: Option<String>,
}

impl ModelIdentification {
    /// Human-facing model type, refined by the target column type:
    /// a Single Predictor over a `set` target is a classifier, over a
    /// `scalar` target a regression; an embedding space is foundational.
    pub fn model_type_display(&self) -> String {
        let Some(model_type) = self.model_type.as_deref().filter(|s| !s.is_empty()) else {
            return crate::value::NOT_AVAILABLE.to_string();
        };
        let target_type = self
            .target_column_type
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        match model_type.to_lowercase().as_str() {
            "embedding space" | "es" => "Foundational Embedding Space".to_string(),
            "single predictor" | "sp" => match target_type.as_str() {
                "set" => "Classifier".to_string(),
                "scalar" => "Regression".to_string(),
                _ => "Single Predictor".to_string(),
            },
            _ => model_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingDataset {
    pub train_rows: Option<u64>,
    pub val_rows: Option<u64>,
    pub total_rows: Option<u64>,
    pub total_features: Option<u64>,
    pub feature_names: Vec<String>,
    pub target_column: Option<String>,
}

/// One entry of the feature inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub data_type: Option<String>,
    pub encoder_type: Option<String>,
    pub unique_values: Option<u64>,
    pub sample_values: Vec<Value>,
    pub statistics: Option<FeatureStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureStatistics {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub median: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfiguration {
    pub epochs_total: Option<u64>,
    pub best_epoch: Option<u64>,
    pub d_model: Option<u64>,
    pub batch_size: Option<u64>,
    pub learning_rate: Option<f64>,
    pub optimizer: Option<String>,
    pub dropout_schedule: Option<DropoutSchedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropoutSchedule {
    pub enabled: bool,
    pub initial: Option<f64>,
    pub r#final: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingMetrics {
    pub best_epoch: Option<BestEpoch>,
    pub classification_metrics: Option<ClassificationMetrics>,
    pub optimal_threshold: Option<OptimalThreshold>,
    pub argmax_metrics: Option<ArgmaxMetrics>,
    pub loss_progression: Option<LossProgression>,
    pub final_epoch: Option<FinalEpoch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BestEpoch {
    pub epoch: Option<u64>,
    pub validation_loss: Option<f64>,
    pub train_loss: Option<f64>,
    pub spread_loss: Option<f64>,
    pub joint_loss: Option<f64>,
    pub marginal_loss: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationMetrics {
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
    pub auc: Option<f64>,
    pub is_binary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimalThreshold {
    pub optimal_threshold: Option<f64>,
    /// Label treated as positive; bool or string depending on the target.
    pub pos_label: Option<Value>,
    pub optimal_threshold_f1: Option<f64>,
    pub accuracy_at_optimal_threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgmaxMetrics {
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LossProgression {
    pub initial_train: Option<f64>,
    pub initial_val: Option<f64>,
    pub improvement_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalEpoch {
    pub epoch: Option<u64>,
    pub train_loss: Option<f64>,
    pub val_loss: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelArchitecture {
    pub predictor_layers: Option<u64>,
    pub predictor_parameters: Option<u64>,
    pub embedding_space_d_model: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelQuality {
    pub assessment: Option<String>,
    pub recommendations: Vec<Recommendation>,
    pub warnings: Vec<QualityWarning>,
    pub training_quality_warning: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub issue: Option<String>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityWarning {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub severity: Option<String>,
    pub message: Option<String>,
    pub recommendation: Option<String>,
    pub details: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalDetails {
    pub pytorch_version: Option<String>,
    pub device: Option<String>,
    pub precision: Option<String>,
    pub loss_function: Option<String>,
    pub normalization: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provenance {
    pub created_at: Option<String>,
    pub training_duration_minutes: Option<f64>,
    pub version_info: Option<Value>,
}

impl Provenance {
    /// Split the duration into whole hours and leftover whole minutes.
    pub fn duration_parts(&self) -> Option<(u64, u64)> {
        self.training_duration_minutes
            .map(|m| ((m / 60.0) as u64, (m % 60.0) as u64))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnStatistics {
    pub mutual_information_bits: Option<f64>,
    pub marginal_loss: Option<f64>,
}
