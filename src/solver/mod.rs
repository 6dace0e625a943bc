//! Cooling solver.
//!
//! Responsibilities:
//!
//! - resolve the cooling constant (`calibration`)
//! - invert the cooling law for the hours between death and the first reading
//! - add the first-reading offset to get hours since death at the reference instant
//!
//! No rounding happens here. A negative result is returned as-is; flagging it
//! is the narrator's job.

pub mod calibration;

pub use calibration::*;

use tracing::debug;

use crate::domain::{NormalizedRequest, Solution};
use crate::error::EstimateError;
use crate::models::{elapsed_hours, excess_ratio};

/// Solve a normalized request.
pub fn solve(request: &NormalizedRequest) -> Result<Solution, EstimateError> {
    let k = resolve_k(request.calibration, request.body_temp_c, request.ambient_temp_c)?;

    let first_reading_hours = invert_first_reading(
        request.body_temp_c,
        request.normal_body_temp_c,
        request.ambient_temp_c,
        k.value,
    )?;
    let time_since_death_hours = first_reading_hours + request.time_since_first_reading_hours;

    debug!(
        k = k.value,
        source = k.source.label(),
        first_reading_hours,
        time_since_death_hours,
        "solved cooling model"
    );

    Ok(Solution {
        k,
        first_reading_hours,
        time_since_death_hours,
    })
}

/// `t1 = -ln((T1 - Te) / (T0 - Te)) / k`.
pub fn invert_first_reading(
    body_temp_c: f64,
    normal_body_temp_c: f64,
    ambient_c: f64,
    k: f64,
) -> Result<f64, EstimateError> {
    if normal_body_temp_c == ambient_c {
        return Err(EstimateError::model(format!(
            "normal body temperature {normal_body_temp_c} °C equals ambient {ambient_c} °C; \
             a body that starts at ambient never cools"
        )));
    }

    let ratio = excess_ratio(body_temp_c, normal_body_temp_c, ambient_c);
    if !(ratio > 0.0 && ratio.is_finite()) {
        return Err(EstimateError::model(format!(
            "body temperature {body_temp_c} °C and normal body temperature {normal_body_temp_c} °C \
             lie on opposite sides of ambient {ambient_c} °C; (T1 - Te)/(T0 - Te) = {ratio:.4} \
             must be positive"
        )));
    }

    let t1 = elapsed_hours(ratio, k);
    if !t1.is_finite() {
        return Err(EstimateError::model(format!(
            "elapsed time for k = {k} h⁻¹ is not finite"
        )));
    }
    Ok(t1)
}
