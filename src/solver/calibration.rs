//! Cooling-constant resolution.
//!
//! The calibration choice is made once here; everything downstream only sees
//! the resolved `CoolingConstant`.

use tracing::debug;

use crate::domain::{Calibration, CoolingConstant, DEFAULT_K, KSource};
use crate::error::EstimateError;
use crate::models::{excess_ratio, two_point_k};

/// Resolve `k` for a request whose first reading is `first_temp_c` at ambient `ambient_c`.
pub fn resolve_k(
    calibration: Calibration,
    first_temp_c: f64,
    ambient_c: f64,
) -> Result<CoolingConstant, EstimateError> {
    match calibration {
        Calibration::Derived(second) => {
            let value = derive_k(
                first_temp_c,
                second.body_temp_c,
                ambient_c,
                second.delta_hours_from_first,
            )?;
            Ok(CoolingConstant {
                value,
                source: KSource::Derived {
                    first_temp_c,
                    second_temp_c: second.body_temp_c,
                    delta_hours: second.delta_hours_from_first,
                },
            })
        }
        Calibration::Explicit(value) => Ok(CoolingConstant {
            value,
            source: KSource::Explicit,
        }),
        Calibration::Default => Ok(CoolingConstant {
            value: DEFAULT_K,
            source: KSource::Default,
        }),
    }
}

/// Two-point derivation: `k = -ln((T2 - Te) / (T1 - Te)) / Δt`.
pub fn derive_k(
    first_temp_c: f64,
    second_temp_c: f64,
    ambient_c: f64,
    delta_hours: f64,
) -> Result<f64, EstimateError> {
    if first_temp_c == ambient_c {
        return Err(EstimateError::model(format!(
            "first reading {first_temp_c} °C equals ambient {ambient_c} °C; \
             the cooling constant cannot be derived from an equilibrated body"
        )));
    }

    let ratio = excess_ratio(second_temp_c, first_temp_c, ambient_c);
    if !(ratio > 0.0 && ratio.is_finite()) {
        return Err(EstimateError::model(format!(
            "readings {first_temp_c} °C and {second_temp_c} °C are not strictly on the same side of \
             ambient {ambient_c} °C; (T2 - Te)/(T1 - Te) = {ratio:.4} must be positive"
        )));
    }

    let k = two_point_k(ratio, delta_hours);
    debug!(ratio, delta_hours, k, "derived cooling constant from second reading");

    if !(k > 0.0 && k.is_finite()) {
        return Err(EstimateError::model(format!(
            "derived cooling constant k = {k:.4} h⁻¹ is not positive; the second reading \
             ({second_temp_c} °C) must be closer to ambient than the first ({first_temp_c} °C)"
        )));
    }
    Ok(k)
}
