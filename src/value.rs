// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Display formatting for raw model-card values
//!
//! Every renderer goes through these helpers so that a given document always
//! formats the same way:
//! - floats: fixed precision, trailing zeros and trailing point stripped
//! - percentages: two decimals plus `%`
//! - missing values: the `N/A` sentinel
//! - presentation color lookups for status / quality / warning severity

use serde_json::Value;

/// Sentinel substituted for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default precision for float display.
pub const DEFAULT_PRECISION: usize = 4;

/// Neutral gray used when a color lookup does not recognize its input.
pub const NEUTRAL_COLOR: &str = "#6c757d";

/// Format a float at fixed precision, then strip trailing zeros and a
/// trailing decimal point, so `0.9000` becomes `0.9` and `1.0` becomes `1`.
///
/// Rounding is whatever `format!("{:.p}")` does (round-half-even on decimal
/// ties); the same rule applies at every call site.
pub fn format_float(value: f64, precision: usize) -> String {
    let fixed = format!("{value:.precision$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Format an arbitrary JSON value for display.
///
/// `None` and `Null` map to the sentinel; booleans render as `True`/`False`
/// (matching the upstream card generator); floats go through [`format_float`];
/// arrays and objects are dumped as 2-space-indented JSON (an empty collection
/// dumps as `[]`/`{}`, not the sentinel); strings and integers pass through.
pub fn format_scalar(value: Option<&Value>, precision: usize) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::Bool(b) => if *b { "True" } else { "False" }.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                format_float(n.as_f64().unwrap_or(f64::NAN), precision)
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_default()
        }
    }
}

/// Format an optional float, substituting the sentinel when absent.
pub fn float_or_na(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format_float(v, precision))
}

/// Format an optional displayable value, substituting the sentinel when absent.
pub fn display_or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Format a ratio as a percentage with two decimals (`0.9253` -> `92.53%`).
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a count with thousands separators (`431000` -> `431,000`).
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Color token for a training status badge.
pub fn status_color(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "done" => "#28a745",
        "training" => "#ffc107",
        "failed" => "#dc3545",
        _ => NEUTRAL_COLOR,
    }
}

/// Color token for a quality assessment badge.
pub fn quality_color(assessment: Option<&str>) -> &'static str {
    let Some(assessment) = assessment else {
        return NEUTRAL_COLOR;
    };
    match assessment.to_lowercase().as_str() {
        "excellent" => "#28a745",
        "good" => "#007bff",
        "fair" => "#ffc107",
        "poor" => "#fd7e14",
        _ => NEUTRAL_COLOR,
    }
}

/// Color token for a warning severity badge.
pub fn severity_color(severity: &str) -> &'static str {
    match severity.to_lowercase().as_str() {
        "high" => "#dc3545",
        "moderate" => "#ffc107",
        "low" => "#007bff",
        _ => NEUTRAL_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_float_strips_trailing_zeros() {
        assert_eq!(format_float(0.9000, 4), "0.9");
        assert_eq!(format_float(1.0, 4), "1");
        assert_eq!(format_float(0.1334, 4), "0.1334");
        assert_eq!(format_float(-0.5000, 4), "-0.5");
    }

    #[test]
    fn test_format_float_rounds() {
        assert_eq!(format_float(0.12345, 4), "0.1235");
        assert_eq!(format_float(0.001, 4), "0.001");
        assert_eq!(format_float(45.2, 2), "45.2");
    }

    #[test]
    fn test_format_float_non_finite() {
        // No special-casing for non-finite values.
        assert_eq!(format_float(f64::INFINITY, 4), "inf");
        assert_eq!(format_float(f64::NAN, 4), "NaN");
    }

    #[test]
    fn test_format_scalar_missing() {
        assert_eq!(format_scalar(None, 4), "N/A");
        assert_eq!(format_scalar(Some(&Value::Null), 4), "N/A");
    }

    #[test]
    fn test_format_scalar_bool_and_string() {
        assert_eq!(format_scalar(Some(&json!(true)), 4), "True");
        assert_eq!(format_scalar(Some(&json!(false)), 4), "False");
        assert_eq!(format_scalar(Some(&json!("Adam")), 4), "Adam");
    }

    #[test]
    fn test_format_scalar_numbers() {
        assert_eq!(format_scalar(Some(&json!(28)), 4), "28");
        assert_eq!(format_scalar(Some(&json!(0.001)), 4), "0.001");
        assert_eq!(format_scalar(Some(&json!(0.9253)), 3), "0.925");
    }

    #[test]
    fn test_format_scalar_collections() {
        assert_eq!(format_scalar(Some(&json!([])), 4), "[]");
        assert_eq!(format_scalar(Some(&json!({})), 4), "{}");
        let dumped = format_scalar(Some(&json!({"a": 1})), 4);
        assert_eq!(dumped, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Some(0.9253)), "92.53%");
        assert_eq!(format_percentage(Some(0.925)), "92.50%");
        assert_eq!(format_percentage(Some(1.0)), "100.00%");
        assert_eq!(format_percentage(None), "N/A");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(431), "431");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(264925317), "264,925,317");
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color("done"), "#28a745");
        assert_eq!(status_color("DONE"), "#28a745");
        assert_eq!(status_color("training"), "#ffc107");
        assert_eq!(status_color("failed"), "#dc3545");
        assert_eq!(status_color("weird"), NEUTRAL_COLOR);
        assert_eq!(status_color(""), NEUTRAL_COLOR);
    }

    #[test]
    fn test_quality_color() {
        assert_eq!(quality_color(Some("Excellent")), "#28a745");
        assert_eq!(quality_color(Some("GOOD")), "#007bff");
        assert_eq!(quality_color(Some("fair")), "#ffc107");
        assert_eq!(quality_color(Some("poor")), "#fd7e14");
        assert_eq!(quality_color(Some("unknown")), NEUTRAL_COLOR);
        assert_eq!(quality_color(None), NEUTRAL_COLOR);
    }

    #[test]
    fn test_severity_color() {
        assert_eq!(severity_color("HIGH"), "#dc3545");
        assert_eq!(severity_color("Moderate"), "#ffc107");
        assert_eq!(severity_color("low"), "#007bff");
        assert_eq!(severity_color("UNKNOWN"), NEUTRAL_COLOR);
    }

    #[test]
    fn test_float_or_na() {
        assert_eq!(float_or_na(Some(0.452), 4), "0.452");
        assert_eq!(float_or_na(None, 4), "N/A");
    }

    #[test]
    fn test_display_or_na() {
        assert_eq!(display_or_na(Some(512u64)), "512");
        assert_eq!(display_or_na(None::<u64>), "N/A");
    }
}
