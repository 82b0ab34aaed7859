// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Render facade: mode selection and the file sink
//!
//! The sink assembles the complete report in memory before touching the
//! filesystem, so a failed write never leaves a truncated report behind.

use crate::document::ModelCardDocument;
use crate::{html, text};
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

/// Output format for a model-card report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Self-contained HTML page.
    Html,
    /// Console-friendly summary.
    TextBrief,
    /// Full plain-text report.
    TextDetailed,
}

impl RenderMode {
    /// Conventional file extension for the mode.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::TextBrief | Self::TextDetailed => "txt",
        }
    }
}

/// Render a document to a string in the given mode.
///
/// HTML output is stamped with `generated_at`; the text modes ignore it and
/// are deterministic for a given document.
pub fn render_to_string(
    doc: &ModelCardDocument,
    mode: RenderMode,
    generated_at: DateTime<Utc>,
) -> String {
    match mode {
        RenderMode::Html => html::render_html(doc, generated_at),
        RenderMode::TextBrief => text::render_brief_text(doc),
        RenderMode::TextDetailed => text::render_detailed_text(doc),
    }
}

/// Render a document and write it to `path` as UTF-8, returning the path.
///
/// The report is fully assembled before the write starts.
pub fn render_to_file(
    doc: &ModelCardDocument,
    mode: RenderMode,
    generated_at: DateTime<Utc>,
    path: &Path,
) -> anyhow::Result<PathBuf> {
    let rendered = render_to_string(doc, mode, generated_at);
    std::fs::write(path, &rendered)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    info!(
        path = %path.display(),
        mode = ?mode,
        bytes = rendered.len(),
        "wrote model card report"
    );
    Ok(path.to_path_buf())
}
