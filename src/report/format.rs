//! Presentation formatting.
//!
//! All rounding lives here; the solver and the result keep full precision.

use chrono::NaiveDateTime;

use crate::domain::EstimationResult;

/// Layout used for every timestamp shown to a user.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn fmt_temp(v: f64) -> String {
    format!("{v:.2}")
}

pub fn fmt_hours(v: f64) -> String {
    format!("{v:.2}")
}

pub fn fmt_k(v: f64) -> String {
    format!("{v:.4}")
}

pub fn fmt_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Format the terminal report for one estimate.
pub fn format_result(result: &EstimationResult) -> String {
    let mut out = String::new();

    out.push_str("=== tod - Time of Death Estimate (Newton's Law of Cooling) ===\n");
    out.push_str(&format!(
        "Estimated time of death: {}\n",
        fmt_timestamp(result.estimated_time_of_death)
    ));
    out.push_str(&format!(
        "Time since death: {} h ({})\n",
        fmt_hours(result.time_since_death_hours),
        fmt_hours_minutes(result.time_since_death_hours)
    ));
    out.push_str(&format!("Cooling constant: k = {} h⁻¹\n", fmt_k(result.k)));

    out.push_str("\nDerivation:\n");
    for (i, step) in result.steps.iter().enumerate() {
        out.push_str(&format!("{}. {step}\n", i + 1));
    }

    out.push_str("\nWarnings:\n");
    for warning in &result.warnings {
        out.push_str(&format!("- {warning}\n"));
    }

    out
}

/// `2.5` -> `2h 30m`; negative durations keep a leading minus.
fn fmt_hours_minutes(hours: f64) -> String {
    let total_minutes = (hours.abs() * 60.0).round() as u64;
    let sign = if hours < 0.0 && total_minutes > 0 { "-" } else { "" };
    format!("{sign}{}h {:02}m", total_minutes / 60, total_minutes % 60)
}
