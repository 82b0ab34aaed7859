// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! HTML backend
//!
//! Emits a single self-contained page: inline stylesheet, inline script, no
//! external assets. Each card section becomes a `<details>` disclosure with
//! expand-all / collapse-all controls at the top.
//!
//! The caller supplies the generation timestamp; it is the only part of the
//! page that varies between renders of the same document.

use crate::document::ModelCardDocument;
use crate::sections::{self, Block, CellValue, FeatureRow, Section};
use chrono::{DateTime, Utc};

/// Inline stylesheet, including print rules that collapse the page onto
/// letter paper with closed sections hidden.
const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
    color: #333;
    background: #f5f5f5;
    padding: 20px;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    background: white;
    padding: 40px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
}

.header { border-bottom: 3px solid #667eea; padding-bottom: 20px; margin-bottom: 30px; }
.header h1 { font-size: 32px; color: #333; margin-bottom: 10px; }
.header .meta { color: #666; font-size: 14px; }

.controls {
    margin-bottom: 20px;
    padding: 15px;
    background: #f8f9fa;
    border-radius: 5px;
    display: flex;
    gap: 10px;
    flex-wrap: wrap;
}

.btn {
    padding: 8px 16px;
    background: #667eea;
    color: white;
    border: none;
    border-radius: 4px;
    cursor: pointer;
    font-size: 14px;
}
.btn:hover { background: #5568d3; }
.btn-secondary { background: #6c757d; }
.btn-secondary:hover { background: #5a6268; }

details { margin-bottom: 20px; border: 1px solid #ddd; border-radius: 5px; background: white; }
details summary {
    padding: 15px 20px;
    cursor: pointer;
    font-weight: 600;
    background: #f8f9fa;
    border-radius: 5px 5px 0 0;
    user-select: none;
}
details summary:hover { background: #e9ecef; }
details summary::-webkit-details-marker { display: none; }
details summary::before {
    content: '\25B6';
    display: inline-block;
    margin-right: 10px;
    transition: transform 0.2s;
}
details[open] summary::before { transform: rotate(90deg); }
details summary h2 { display: inline; font-size: 20px; margin: 0; }

.section-content { padding: 20px; }

.metrics-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 15px;
    margin: 20px 0;
}
.metric-card {
    background: #f8f9fa;
    padding: 15px;
    border-radius: 5px;
    border-left: 4px solid #667eea;
}
.metric-label {
    font-size: 12px;
    color: #666;
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 5px;
}
.metric-value { font-size: 24px; font-weight: bold; color: #333; }

.info-table { width: 100%; border-collapse: collapse; margin: 15px 0; }
.info-table th {
    text-align: left;
    padding: 10px;
    background: #f8f9fa;
    font-weight: 600;
    width: 200px;
    border-bottom: 1px solid #ddd;
}
.info-table td { padding: 10px; border-bottom: 1px solid #ddd; }

.data-table { width: 100%; border-collapse: collapse; margin: 15px 0; font-size: 14px; }
.data-table th { background: #667eea; color: white; padding: 12px; text-align: left; font-weight: 600; }
.data-table td { padding: 10px 12px; border-bottom: 1px solid #ddd; }
.data-table tr:hover { background: #f8f9fa; }

.tag-list { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 10px; }
.tag {
    display: inline-block;
    padding: 4px 12px;
    background: #e3f2fd;
    color: #1976d2;
    border-radius: 12px;
    font-size: 12px;
}

.badge {
    display: inline-block;
    padding: 4px 12px;
    color: white;
    border-radius: 12px;
    font-size: 12px;
    font-weight: 600;
}

.recommendations-list { list-style: none; margin: 15px 0; }
.recommendations-list li {
    padding: 15px;
    margin-bottom: 10px;
    background: #f8f9fa;
    border-left: 4px solid #667eea;
    border-radius: 4px;
}

.warnings-list { margin: 15px 0; }
.warning-item {
    padding: 15px;
    margin-bottom: 15px;
    background: #fff3cd;
    border-left: 4px solid #ffc107;
    border-radius: 4px;
}
.warning-header { display: flex; align-items: center; gap: 10px; margin-bottom: 10px; }
.warning-message { margin: 10px 0; }
.warning-recommendation { margin-top: 10px; padding: 10px; background: white; border-radius: 4px; }
.warning-details { margin-top: 10px; }
.warning-details summary { padding: 5px; font-size: 14px; background: transparent; }

.details-json {
    background: #f8f9fa;
    padding: 15px;
    border-radius: 4px;
    overflow-x: auto;
    font-size: 12px;
    margin-top: 10px;
}

.stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 5px; font-size: 12px; }

.callout {
    padding: 15px;
    background: #fff3cd;
    border-left: 4px solid #ffc107;
    border-radius: 4px;
    margin: 15px 0;
}

code {
    background: #f8f9fa;
    padding: 2px 6px;
    border-radius: 3px;
    font-family: 'Courier New', monospace;
    font-size: 13px;
}

@media print {
    @page { size: letter; margin: 0.5in; }
    body { background: white; padding: 0; }
    .container { box-shadow: none; padding: 0; }
    .controls { display: none; }
    details { page-break-inside: avoid; border: none; }
    details summary { page-break-after: avoid; }
    details[open] { display: block; }
    details:not([open]) { display: none; }
    .section-content { padding: 10px 0; }
    .metrics-grid { grid-template-columns: repeat(2, 1fr); }
    .data-table { font-size: 10pt; }
    .data-table th, .data-table td { padding: 6px; }
    .warning-item, .recommendations-list li { page-break-inside: avoid; }
}
"#;

const SCRIPT: &str = r#"
function expandAll() {
    document.querySelectorAll('details').forEach(detail => { detail.open = true; });
}

function collapseAll() {
    document.querySelectorAll('details').forEach(detail => { detail.open = false; });
}
"#;

/// Render the complete HTML page for a model-card document.
///
/// `generated_at` is stamped into the header; with it pinned, output is
/// byte-for-byte deterministic for a given document.
pub fn render_html(doc: &ModelCardDocument, generated_at: DateTime<Utc>) -> String {
    let model_name = doc.model_name();
    let mut out = String::with_capacity(32 * 1024);

    out.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Model Card - {model_name}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Model Card: {model_name}</h1>
            <div class="meta">Generated: {}</div>
        </div>
        <div class="controls">
            <button class="btn" onclick="expandAll()">Expand All</button>
            <button class="btn btn-secondary" onclick="collapseAll()">Collapse All</button>
        </div>
"#,
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    ));

    for section in sections::build_sections(doc) {
        write_section(&mut out, &section);
    }

    out.push_str(&format!(
        r#"    </div>
    <script>{SCRIPT}</script>
</body>
</html>
"#
    ));
    out
}

fn write_section(out: &mut String, section: &Section) {
    let open = if section.open { " open" } else { "" };
    out.push_str(&format!(
        "    <details{open}>\n        <summary><h2>{}</h2></summary>\n        <div class=\"section-content\">\n",
        section.title
    ));
    for block in &section.blocks {
        write_block(out, block);
    }
    out.push_str("        </div>\n    </details>\n");
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::KeyValues { heading, rows } => {
            if let Some(heading) = heading {
                out.push_str(&format!("            <h3>{heading}</h3>\n"));
            }
            out.push_str("            <table class=\"info-table\">\n");
            for row in rows {
                out.push_str(&format!(
                    "                <tr><th>{}</th><td>{}</td></tr>\n",
                    row.label,
                    cell_html(&row.value)
                ));
            }
            out.push_str("            </table>\n");
        }
        Block::MetricGrid { heading, cells } => {
            if let Some(heading) = heading {
                out.push_str(&format!("            <h3>{heading}</h3>\n"));
            }
            out.push_str("            <div class=\"metrics-grid\">\n");
            for cell in cells {
                out.push_str(&format!(
                    "                <div class=\"metric-card\">\n                    <div class=\"metric-label\">{}</div>\n                    <div class=\"metric-value\">{}</div>\n                </div>\n",
                    cell.label,
                    cell_html(&cell.value)
                ));
            }
            out.push_str("            </div>\n");
        }
        Block::Tags { heading, tags } => {
            out.push_str(&format!(
                "            <h3>{heading}</h3>\n            <div class=\"tag-list\">\n"
            ));
            for tag in tags {
                out.push_str(&format!("                <span class=\"tag\">{tag}</span>\n"));
            }
            out.push_str("            </div>\n");
        }
        Block::Features(rows) => write_feature_table(out, rows),
        Block::Table { columns, rows } => {
            out.push_str("            <table class=\"data-table\">\n                <thead>\n                    <tr>");
            for column in columns {
                out.push_str(&format!("<th>{column}</th>"));
            }
            out.push_str("</tr>\n                </thead>\n                <tbody>\n");
            for row in rows {
                out.push_str("                    <tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", cell_html(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("                </tbody>\n            </table>\n");
        }
        Block::Recommendations(recs) => {
            out.push_str("            <h3>Recommendations</h3>\n            <ul class=\"recommendations-list\">\n");
            for rec in recs {
                out.push_str(&format!(
                    "                <li><strong>{}</strong><br>{}</li>\n",
                    rec.issue, rec.suggestion
                ));
            }
            out.push_str("            </ul>\n");
        }
        Block::Warnings(warnings) => {
            out.push_str("            <h3>Warnings</h3>\n            <div class=\"warnings-list\">\n");
            for warning in warnings {
                out.push_str(&format!(
                    "                <div class=\"warning-item\">\n                    <div class=\"warning-header\">\n                        <span class=\"badge\" style=\"background-color: {}\">{}</span>\n                        <strong>{}</strong>\n                    </div>\n                    <div class=\"warning-message\">{}</div>\n",
                    warning.color, warning.severity, warning.kind, warning.message
                ));
                if let Some(recommendation) = &warning.recommendation {
                    out.push_str(&format!(
                        "                    <div class=\"warning-recommendation\"><strong>Recommendation:</strong> {recommendation}</div>\n"
                    ));
                }
                if let Some(details) = &warning.details {
                    out.push_str(&format!(
                        "                    <details class=\"warning-details\">\n                        <summary>Details</summary>\n                        <pre class=\"details-json\">{details}</pre>\n                    </details>\n"
                    ));
                }
                out.push_str("                </div>\n");
            }
            out.push_str("            </div>\n");
        }
        Block::Note { heading, body } => {
            out.push_str(&format!(
                "            <div class=\"callout\"><strong>{heading}:</strong> {body}</div>\n"
            ));
        }
    }
}

fn write_feature_table(out: &mut String, rows: &[FeatureRow]) {
    out.push_str(
        "            <table class=\"data-table\">\n                <thead>\n                    <tr><th>Name</th><th>Type</th><th>Encoder</th><th>Unique Values</th><th>Sample Values</th><th>Statistics</th></tr>\n                </thead>\n                <tbody>\n",
    );
    for row in rows {
        let samples = if row.samples.is_empty() {
            missing()
        } else {
            let mut joined = row.samples.join(", ");
            if row.more > 0 {
                joined.push_str(&format!(" <em>(+{} more)</em>", row.more));
            }
            joined
        };
        let stats = match &row.stats {
            Some(pairs) => {
                let cells: String = pairs
                    .iter()
                    .map(|(label, value)| format!("<div>{label}: {value}</div>"))
                    .collect();
                format!("<div class=\"stats-grid\">{cells}</div>")
            }
            None => missing(),
        };
        out.push_str(&format!(
            "                    <tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.name,
            row.data_type,
            row.encoder,
            cell_html(&row.unique_values),
            samples,
            stats
        ));
    }
    out.push_str("                </tbody>\n            </table>\n");
}

fn missing() -> String {
    format!("<em>{}</em>", crate::value::NOT_AVAILABLE)
}

fn cell_html(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.clone(),
        CellValue::Missing => missing(),
        CellValue::Code(s) => format!("<code>{s}</code>"),
        CellValue::Badge { label, color } => {
            format!("<span class=\"badge\" style=\"background-color: {color}\">{label}</span>")
        }
        CellValue::Json(s) => format!("<pre class=\"details-json\">{s}</pre>"),
    }
}
