// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Model-card rendering for trained models
//!
//! This crate provides:
//! - A typed, read-only view of a model-card JSON document
//! - Uniform value formatting (floats, percentages, counts, `N/A` sentinel)
//! - Table-driven section builders shared by every output backend
//! - A self-contained HTML report with collapsible sections
//! - Brief and detailed plain-text reports
//! - A write-after-assemble file sink
//!
//! Rendering is pure: the same document and timestamp always produce the
//! same bytes, and a document is never mutated or validated beyond what
//! deserialization enforces.

pub mod document;
pub mod html;
pub mod render;
pub mod sections;
pub mod text;
pub mod value;

pub use document::{ModelCardDocument, ModelKind};
pub use html::render_html;
pub use render::{render_to_file, render_to_string, RenderMode};
pub use text::{render_brief_text, render_detailed_text};
