//! Request validation and normalization.
//!
//! This module turns a raw `EstimationRequest` into a `NormalizedRequest`:
//! every field range-checked, every default applied, and the cooling-constant
//! source collapsed into a single `Calibration` choice.
//!
//! Checks run in a fixed order so the first offending field is the one
//! reported. No cooling math happens here.

use chrono::{DateTime, NaiveDateTime};

use crate::domain::{
    AMBIENT_RANGE_C, BODY_RANGE_C, Calibration, DEFAULT_NORMAL_BODY_TEMP_C, EstimationRequest,
    MAX_EXPLICIT_K, MIN_AMBIENT_SEPARATION_C, NORMAL_BODY_RANGE_C, NormalizedRequest,
};
use crate::error::EstimateError;

/// Accepted local date-time layouts (RFC 3339 with an offset is tried first).
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Validate `request` and fill defaults. `now` stands in for a missing scene time.
pub fn normalize(
    request: &EstimationRequest,
    now: NaiveDateTime,
) -> Result<NormalizedRequest, EstimateError> {
    let ambient_temp_c = check_range("ambientTempC", request.ambient_temp_c, AMBIENT_RANGE_C)?;
    let body_temp_c = check_range("bodyTempC", request.body_temp_c, BODY_RANGE_C)?;
    let normal_body_temp_c = check_range(
        "normalBodyTempC",
        request.normal_body_temp_c.unwrap_or(DEFAULT_NORMAL_BODY_TEMP_C),
        NORMAL_BODY_RANGE_C,
    )?;

    let time_since_first_reading_hours = request.time_since_first_reading_hours.unwrap_or(0.0);
    if !(time_since_first_reading_hours >= 0.0 && time_since_first_reading_hours.is_finite()) {
        return Err(EstimateError::validation(format!(
            "timeSinceFirstReadingHours must be zero or positive (got {time_since_first_reading_hours})"
        )));
    }

    if let Some(k) = request.k {
        if !(k > 0.0 && k <= MAX_EXPLICIT_K) {
            return Err(EstimateError::validation(format!(
                "k must be within (0, {MAX_EXPLICIT_K}] h⁻¹ (got {k})"
            )));
        }
    }

    if let Some(second) = &request.second_reading {
        check_range("secondReading.bodyTempC", second.body_temp_c, BODY_RANGE_C)?;
        let delta = second.delta_hours_from_first;
        if !(delta > 0.0 && delta.is_finite()) {
            return Err(EstimateError::validation(format!(
                "secondReading.deltaHoursFromFirst must be positive (got {delta})"
            )));
        }
    }

    let separation = (body_temp_c - ambient_temp_c).abs();
    if separation < MIN_AMBIENT_SEPARATION_C {
        return Err(EstimateError::validation(format!(
            "bodyTempC must differ from ambientTempC by at least {MIN_AMBIENT_SEPARATION_C} °C \
             (got {body_temp_c} vs {ambient_temp_c}); a body at equilibrium carries no timing information"
        )));
    }

    let scene_date_time = match request.scene_date_time.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_scene_date_time(raw)?,
        _ => now,
    };

    let (calibration, explicit_k_overridden) = match (request.second_reading, request.k) {
        (Some(second), k) => (Calibration::Derived(second), k.is_some()),
        (None, Some(k)) => (Calibration::Explicit(k), false),
        (None, None) => (Calibration::Default, false),
    };

    Ok(NormalizedRequest {
        ambient_temp_c,
        body_temp_c,
        normal_body_temp_c,
        time_since_first_reading_hours,
        scene_date_time,
        calibration,
        explicit_k_overridden,
    })
}

/// Parse an ISO-8601 scene time.
///
/// Offsets are accepted but dropped: the wall-clock reading at the scene is
/// what the estimate is anchored to.
pub fn parse_scene_date_time(raw: &str) -> Result<NaiveDateTime, EstimateError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| {
            EstimateError::validation(format!(
                "sceneDateTime must be an ISO-8601 date-time such as 2024-03-01T14:30:00 (got '{raw}')"
            ))
        })
}

fn check_range(field: &str, value: f64, (lo, hi): (f64, f64)) -> Result<f64, EstimateError> {
    if (lo..=hi).contains(&value) {
        Ok(value)
    } else {
        Err(EstimateError::validation(format!(
            "{field} must be within [{lo}, {hi}] °C (got {value})"
        )))
    }
}
