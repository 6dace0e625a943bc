//! Applicability warnings.
//!
//! Emitted in a fixed order: calibration notes for the resolved `k` source,
//! then the range rule table, then the disclaimer. Every rule is evaluated
//! independently against the final numbers.

use crate::domain::{DEFAULT_NORMAL_BODY_TEMP_C, KSource, NormalizedRequest, Solution};

/// Closed band of typical cooling constants (h⁻¹). Values on the edges are typical.
pub const TYPICAL_K_RANGE: (f64, f64) = (0.05, 0.3);

/// Elapsed hours past which the estimate is unreliable. Exactly this value is not flagged.
pub const RELIABLE_WINDOW_HOURS: f64 = 48.0;

/// Body-to-ambient separation (°C) under which uncertainty grows sharply.
pub const NEAR_AMBIENT_C: f64 = 2.0;

/// Deviation (°C) from 37 °C at which the normal body temperature is called non-standard.
pub const NON_STANDARD_NORMAL_C: f64 = 1.0;

pub const WARN_DERIVED_K: &str =
    "Cooling constant derived from two readings assumes a constant ambient temperature between readings.";
pub const WARN_EXPLICIT_K_IGNORED: &str =
    "The supplied cooling constant was ignored because a second reading was provided.";
pub const WARN_EXPLICIT_K: &str =
    "Using the supplied cooling constant; ensure it is appropriate for the scene conditions.";
pub const WARN_DEFAULT_K: &str =
    "Using the default cooling constant (Marshall–Hoare average); results may be inaccurate without calibration.";

pub const WARN_K_OUT_OF_RANGE: &str = "Cooling constant outside typical physiological range [0.05, 0.3] h⁻¹: \
     clothing, body mass, or environment may deviate from standard assumptions.";
pub const WARN_NEGATIVE_ELAPSED: &str = "Model predicts a time of death after the reference reading: \
     inputs may be inconsistent or near the model boundary.";
pub const WARN_BEYOND_WINDOW: &str = "Elapsed time exceeds the reliable window for Newton's-Law TOD estimation; \
     results beyond ~48 hours are unreliable.";
pub const WARN_NEAR_AMBIENT: &str =
    "Body temperature is close to ambient; the estimate carries high uncertainty.";
pub const WARN_NON_STANDARD_NORMAL: &str =
    "Non-standard normal body temperature used; verify it against the case history.";

pub const DISCLAIMER: &str = "This estimate ignores clothing, airflow, humidity, and body mass, \
     and is not a substitute for expert forensic analysis.";

/// One predicate → message entry of the range table.
pub struct WarningRule {
    pub applies: fn(&NormalizedRequest, &Solution) -> bool,
    pub message: &'static str,
}

pub const RANGE_RULES: &[WarningRule] = &[
    WarningRule {
        applies: k_out_of_range,
        message: WARN_K_OUT_OF_RANGE,
    },
    WarningRule {
        applies: negative_elapsed,
        message: WARN_NEGATIVE_ELAPSED,
    },
    WarningRule {
        applies: beyond_window,
        message: WARN_BEYOND_WINDOW,
    },
    WarningRule {
        applies: near_ambient,
        message: WARN_NEAR_AMBIENT,
    },
    WarningRule {
        applies: non_standard_normal,
        message: WARN_NON_STANDARD_NORMAL,
    },
];

/// Build the full ordered warning list.
pub fn collect_warnings(request: &NormalizedRequest, solution: &Solution) -> Vec<String> {
    let mut out: Vec<String> = calibration_notes(request, solution.k.source)
        .iter()
        .map(|s| s.to_string())
        .collect();

    out.extend(
        RANGE_RULES
            .iter()
            .filter(|rule| (rule.applies)(request, solution))
            .map(|rule| rule.message.to_string()),
    );

    out.push(DISCLAIMER.to_string());
    out
}

fn calibration_notes(request: &NormalizedRequest, source: KSource) -> Vec<&'static str> {
    match source {
        KSource::Derived { .. } if request.explicit_k_overridden => {
            vec![WARN_DERIVED_K, WARN_EXPLICIT_K_IGNORED]
        }
        KSource::Derived { .. } => vec![WARN_DERIVED_K],
        KSource::Explicit => vec![WARN_EXPLICIT_K],
        KSource::Default => vec![WARN_DEFAULT_K],
    }
}

fn k_out_of_range(_: &NormalizedRequest, s: &Solution) -> bool {
    let (lo, hi) = TYPICAL_K_RANGE;
    !(lo..=hi).contains(&s.k.value)
}

fn negative_elapsed(_: &NormalizedRequest, s: &Solution) -> bool {
    s.time_since_death_hours < 0.0
}

fn beyond_window(_: &NormalizedRequest, s: &Solution) -> bool {
    s.time_since_death_hours > RELIABLE_WINDOW_HOURS
}

fn near_ambient(r: &NormalizedRequest, _: &Solution) -> bool {
    (r.body_temp_c - r.ambient_temp_c).abs() < NEAR_AMBIENT_C
}

fn non_standard_normal(r: &NormalizedRequest, _: &Solution) -> bool {
    (r.normal_body_temp_c - DEFAULT_NORMAL_BODY_TEMP_C).abs() > NON_STANDARD_NORMAL_C
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Calibration, CoolingConstant, DEFAULT_K};
    use chrono::NaiveDate;

    fn request() -> NormalizedRequest {
        NormalizedRequest {
            ambient_temp_c: 20.0,
            body_temp_c: 32.0,
            normal_body_temp_c: 37.0,
            time_since_first_reading_hours: 0.0,
            scene_date_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            calibration: Calibration::Default,
            explicit_k_overridden: false,
        }
    }

    fn solution(k: f64, source: KSource, hours: f64) -> Solution {
        Solution {
            k: CoolingConstant { value: k, source },
            first_reading_hours: hours,
            time_since_death_hours: hours,
        }
    }

    #[test]
    fn plain_default_case_has_source_note_and_disclaimer_only() {
        let w = collect_warnings(&request(), &solution(DEFAULT_K, KSource::Default, 1.79));
        assert_eq!(w, vec![WARN_DEFAULT_K.to_string(), DISCLAIMER.to_string()]);
    }

    #[test]
    fn window_boundary_is_open() {
        let at = collect_warnings(&request(), &solution(DEFAULT_K, KSource::Default, 48.0));
        assert!(!at.iter().any(|w| w == WARN_BEYOND_WINDOW));

        let past = collect_warnings(&request(), &solution(DEFAULT_K, KSource::Default, 48.000001));
        assert!(past.iter().any(|w| w == WARN_BEYOND_WINDOW));
    }

    #[test]
    fn k_band_is_closed() {
        for k in [0.05, 0.3] {
            let w = collect_warnings(&request(), &solution(k, KSource::Explicit, 2.0));
            assert!(!w.iter().any(|m| m == WARN_K_OUT_OF_RANGE), "k={k}");
        }
        for k in [0.0499, 0.3001, 4.0] {
            let w = collect_warnings(&request(), &solution(k, KSource::Explicit, 2.0));
            assert!(w.iter().any(|m| m == WARN_K_OUT_OF_RANGE), "k={k}");
        }
    }

    #[test]
    fn all_rules_fire_in_table_order() {
        let mut r = request();
        r.body_temp_c = 21.0;
        r.normal_body_temp_c = 39.0;
        r.explicit_k_overridden = true;
        let source = KSource::Derived { first_temp_c: 21.0, second_temp_c: 20.9, delta_hours: 1.0 };

        // Contradictory numbers on purpose: each rule is checked on its own.
        let mut s = solution(0.01, source, -1.0);
        let w = collect_warnings(&r, &s);
        assert_eq!(
            w,
            vec![
                WARN_DERIVED_K,
                WARN_EXPLICIT_K_IGNORED,
                WARN_K_OUT_OF_RANGE,
                WARN_NEGATIVE_ELAPSED,
                WARN_NEAR_AMBIENT,
                WARN_NON_STANDARD_NORMAL,
                DISCLAIMER,
            ]
        );

        s.time_since_death_hours = 60.0;
        let w = collect_warnings(&r, &s);
        assert_eq!(w[3], WARN_BEYOND_WINDOW);
        assert_eq!(w.last().map(String::as_str), Some(DISCLAIMER));
    }
}
