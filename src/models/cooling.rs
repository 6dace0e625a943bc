//! Newton's Law of Cooling primitives.
//!
//! ```text
//! T(t) = Te + (T0 - Te) * e^(-k*t)
//! ```
//!
//! Everything here is a plain function on `f64`. Domain checks (sign of the
//! excess ratio, non-zero denominators) belong to the solver, which knows which
//! physical assumption a failure violates.

/// Body temperature `t` hours after death.
pub fn temperature_at(ambient_c: f64, initial_c: f64, k: f64, t_hours: f64) -> f64 {
    ambient_c + (initial_c - ambient_c) * (-k * t_hours).exp()
}

/// Ratio of a temperature's excess over ambient to a reference excess.
///
/// `(temp - Te) / (reference - Te)`. Positive exactly when both lie on the same
/// side of ambient.
pub fn excess_ratio(temp_c: f64, reference_c: f64, ambient_c: f64) -> f64 {
    (temp_c - ambient_c) / (reference_c - ambient_c)
}

/// Invert the cooling law: hours needed for the excess to decay to `ratio`.
pub fn elapsed_hours(ratio: f64, k: f64) -> f64 {
    -ratio.ln() / k
}

/// Two-point cooling constant: `k = -ln(ratio) / Δt`.
pub fn two_point_k(ratio: f64, delta_hours: f64) -> f64 {
    -ratio.ln() / delta_hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_at_zero_is_initial() {
        assert_eq!(temperature_at(20.0, 37.0, 0.1947, 0.0), 37.0);
    }

    #[test]
    fn temperature_decays_towards_ambient() {
        let late = temperature_at(20.0, 37.0, 0.1947, 200.0);
        assert!((late - 20.0).abs() < 1e-9);

        let cold = temperature_at(-10.0, 37.0, 0.1947, 5.0);
        assert!(cold < 37.0 && cold > -10.0);
    }

    #[test]
    fn elapsed_hours_inverts_temperature_at() {
        let (te, t0, k) = (18.0, 37.2, 0.21);
        for &t in &[0.5, 3.0, 12.0, 30.0] {
            let temp = temperature_at(te, t0, k, t);
            let back = elapsed_hours(excess_ratio(temp, t0, te), k);
            assert!((back - t).abs() < 1e-9, "t={t} came back as {back}");
        }
    }

    #[test]
    fn ratio_is_negative_across_ambient() {
        assert!(excess_ratio(15.0, 37.0, 20.0) < 0.0);
        assert!(excess_ratio(25.0, 37.0, 20.0) > 0.0);
    }
}
