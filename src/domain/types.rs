//! Shared domain types.
//!
//! Request and result types mirror the JSON contract (camelCase keys) so they
//! can be read from request files and written back out unchanged.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Default cooling constant (h⁻¹), the Marshall–Hoare average.
pub const DEFAULT_K: f64 = 0.1947;

/// Assumed body temperature at the moment of death when none is given (°C).
pub const DEFAULT_NORMAL_BODY_TEMP_C: f64 = 37.0;

/// Smallest separation (°C) between body and ambient that the model accepts.
pub const MIN_AMBIENT_SEPARATION_C: f64 = 0.5;

pub const AMBIENT_RANGE_C: (f64, f64) = (-30.0, 50.0);
pub const BODY_RANGE_C: (f64, f64) = (0.0, 45.0);
pub const NORMAL_BODY_RANGE_C: (f64, f64) = (35.0, 42.0);

/// Upper bound for an explicit cooling constant (h⁻¹). The lower bound is open at 0.
pub const MAX_EXPLICIT_K: f64 = 5.0;

/// A second body-temperature reading used to calibrate `k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondReading {
    pub body_temp_c: f64,
    pub delta_hours_from_first: f64,
}

/// Raw estimation request as received from a caller.
///
/// Nothing here is validated yet; see `io::ingest::normalize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationRequest {
    pub ambient_temp_c: f64,
    pub body_temp_c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_body_temp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_since_first_reading_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
    /// ISO-8601 reference instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_reading: Option<SecondReading>,
}

impl EstimationRequest {
    pub fn new(ambient_temp_c: f64, body_temp_c: f64) -> Self {
        Self {
            ambient_temp_c,
            body_temp_c,
            ..Self::default()
        }
    }
}

/// Where the cooling constant comes from, decided once during normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calibration {
    /// Derive `k` from a second reading.
    Derived(SecondReading),
    /// Use a caller-supplied `k`.
    Explicit(f64),
    /// Use `DEFAULT_K`.
    Default,
}

/// A validated request with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub ambient_temp_c: f64,
    pub body_temp_c: f64,
    pub normal_body_temp_c: f64,
    pub time_since_first_reading_hours: f64,
    pub scene_date_time: NaiveDateTime,
    pub calibration: Calibration,
    /// An explicit `k` was supplied but a second reading took precedence.
    pub explicit_k_overridden: bool,
}

/// The resolved cooling constant together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingConstant {
    pub value: f64,
    pub source: KSource,
}

/// Provenance of a resolved cooling constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KSource {
    /// Two-point derivation; keeps the readings for the derivation trace.
    Derived {
        first_temp_c: f64,
        second_temp_c: f64,
        delta_hours: f64,
    },
    Explicit,
    Default,
}

impl KSource {
    pub fn label(self) -> &'static str {
        match self {
            KSource::Derived { .. } => "derived",
            KSource::Explicit => "explicit",
            KSource::Default => "default",
        }
    }
}

/// Numeric output of the cooling solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub k: CoolingConstant,
    /// Hours from death to the first reading.
    pub first_reading_hours: f64,
    /// Hours from death to the reference instant.
    pub time_since_death_hours: f64,
}

/// Final estimation result handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub k: f64,
    pub time_since_death_hours: f64,
    pub estimated_time_of_death: NaiveDateTime,
    pub steps: Vec<String>,
    pub warnings: Vec<String>,
}
