//! Derivation trace.
//!
//! Five steps, always in this order:
//! 1. governing equation, then again with Te and T0 substituted
//! 2. cooling constant (two-point derivation, or its source)
//! 3. inversion for the first reading
//! 4. first-reading offset
//! 5. projection onto the scene clock

use chrono::NaiveDateTime;

use crate::domain::{KSource, NormalizedRequest, Solution};
use crate::report::format::{fmt_hours, fmt_k, fmt_temp, fmt_timestamp};

pub fn derivation_steps(
    request: &NormalizedRequest,
    solution: &Solution,
    estimated_time_of_death: NaiveDateTime,
) -> Vec<String> {
    let te = fmt_temp(request.ambient_temp_c);
    let t0 = fmt_temp(request.normal_body_temp_c);
    let t1 = fmt_temp(request.body_temp_c);
    let k = fmt_k(solution.k.value);

    let equation = format!(
        "Newton's Law of Cooling: T(t) = Te + (T0 - Te) * e^(-k*t); \
         with Te = {te}°C (ambient) and T0 = {t0}°C (body temperature at death), \
         T(t) = {te} + ({t0} - {te}) * e^(-k*t)"
    );

    let constant = match solution.k.source {
        KSource::Derived {
            first_temp_c,
            second_temp_c,
            delta_hours,
        } => format!(
            "k from two readings: k = -ln((T2 - Te)/(T1 - Te)) / Δt \
             = -ln(({} - {te})/({} - {te})) / {} = {k} h⁻¹",
            fmt_temp(second_temp_c),
            fmt_temp(first_temp_c),
            fmt_hours(delta_hours),
        ),
        KSource::Explicit => format!("k = {k} h⁻¹ (explicit value supplied with the request)"),
        KSource::Default => format!("k = {k} h⁻¹ (default, Marshall–Hoare average)"),
    };

    let inversion = format!(
        "t1 = -ln((T1 - Te)/(T0 - Te)) / k = -ln(({t1} - {te})/({t0} - {te})) / {k} = {} h",
        fmt_hours(solution.first_reading_hours),
    );

    let offset = format!(
        "time since death = t1 + time since first reading = {} h + {} h = {} h",
        fmt_hours(solution.first_reading_hours),
        fmt_hours(request.time_since_first_reading_hours),
        fmt_hours(solution.time_since_death_hours),
    );

    let projection = format!(
        "estimated time of death = scene time - time since death = {} - {} h = {}",
        fmt_timestamp(request.scene_date_time),
        fmt_hours(solution.time_since_death_hours),
        fmt_timestamp(estimated_time_of_death),
    );

    vec![equation, constant, inversion, offset, projection]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Calibration, CoolingConstant, SecondReading};
    use chrono::NaiveDate;

    fn request(calibration: Calibration) -> NormalizedRequest {
        NormalizedRequest {
            ambient_temp_c: 20.0,
            body_temp_c: 32.0,
            normal_body_temp_c: 37.0,
            time_since_first_reading_hours: 0.5,
            scene_date_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            calibration,
            explicit_k_overridden: false,
        }
    }

    fn tod() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 42, 0)
            .unwrap()
    }

    #[test]
    fn default_k_trace() {
        let s = Solution {
            k: CoolingConstant { value: 0.1947, source: KSource::Default },
            first_reading_hours: 1.7893,
            time_since_death_hours: 2.2893,
        };
        let steps = derivation_steps(&request(Calibration::Default), &s, tod());
        assert_eq!(steps.len(), 5);
        assert!(steps[0].contains("Te = 20.00°C") && steps[0].contains("T0 = 37.00°C"));
        assert!(steps[0].contains("T(t) = 20.00 + (37.00 - 20.00) * e^(-k*t)"), "{}", steps[0]);
        assert_eq!(steps[1], "k = 0.1947 h⁻¹ (default, Marshall–Hoare average)");
        assert!(steps[2].ends_with("= 1.79 h"));
        assert_eq!(
            steps[3],
            "time since death = t1 + time since first reading = 1.79 h + 0.50 h = 2.29 h"
        );
        assert_eq!(
            steps[4],
            "estimated time of death = scene time - time since death = 2024-03-01T12:00:00 - 2.29 h = 2024-03-01T09:42:00"
        );
    }

    #[test]
    fn derived_k_trace_substitutes_both_readings() {
        let second = SecondReading { body_temp_c: 30.0, delta_hours_from_first: 1.0 };
        let s = Solution {
            k: CoolingConstant {
                value: 0.18232,
                source: KSource::Derived { first_temp_c: 32.0, second_temp_c: 30.0, delta_hours: 1.0 },
            },
            first_reading_hours: 1.9,
            time_since_death_hours: 2.4,
        };
        let steps = derivation_steps(&request(Calibration::Derived(second)), &s, tod());
        assert_eq!(
            steps[1],
            "k from two readings: k = -ln((T2 - Te)/(T1 - Te)) / Δt = -ln((30.00 - 20.00)/(32.00 - 20.00)) / 1.00 = 0.1823 h⁻¹"
        );
    }

    #[test]
    fn explicit_k_trace_names_source() {
        let s = Solution {
            k: CoolingConstant { value: 0.25, source: KSource::Explicit },
            first_reading_hours: 1.0,
            time_since_death_hours: 1.5,
        };
        let steps = derivation_steps(&request(Calibration::Explicit(0.25)), &s, tod());
        assert!(steps[1].contains("explicit"));
        assert!(steps[1].starts_with("k = 0.2500"));
    }
}
