//! Shared estimation pipeline used by the CLI and by library callers.
//!
//! normalize -> solve -> project onto the scene clock -> narrate
//!
//! The CLI only adds presentation (text, JSON, plot) on top of this.

use chrono::{Duration, Local, NaiveDateTime};
use tracing::{info, warn};

use crate::domain::{EstimationRequest, EstimationResult, NormalizedRequest, Solution};
use crate::error::EstimateError;
use crate::io::ingest::normalize;
use crate::report::narrate;
use crate::solver::solve;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Estimate time of death, using the current local time when the request has no scene time.
pub fn estimate(request: &EstimationRequest) -> Result<EstimationResult, EstimateError> {
    estimate_at(request, Local::now().naive_local())
}

/// Estimate time of death with an explicit "now".
pub fn estimate_at(
    request: &EstimationRequest,
    now: NaiveDateTime,
) -> Result<EstimationResult, EstimateError> {
    run_estimate(request, now).map(|run| run.result)
}

/// All computed outputs of a single estimate.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub request: NormalizedRequest,
    pub solution: Solution,
    pub result: EstimationResult,
}

/// Execute the full pipeline and keep the intermediate values.
pub fn run_estimate(request: &EstimationRequest, now: NaiveDateTime) -> Result<RunOutput, EstimateError> {
    let normalized = normalize(request, now)?;
    if normalized.explicit_k_overridden {
        warn!("explicit k ignored: second reading supplied");
    }

    let solution = solve(&normalized)?;
    let elapsed = elapsed_duration(solution.time_since_death_hours)?;
    let estimated_time_of_death = normalized
        .scene_date_time
        .checked_sub_signed(elapsed)
        .ok_or_else(|| {
            EstimateError::model(format!(
                "estimated time of death {:.2} h before the scene time is outside the supported calendar",
                solution.time_since_death_hours
            ))
        })?;

    let narrative = narrate(&normalized, &solution, estimated_time_of_death);

    info!(
        k = solution.k.value,
        k_source = solution.k.source.label(),
        time_since_death_hours = solution.time_since_death_hours,
        estimated_time_of_death = %estimated_time_of_death,
        warnings = narrative.warnings.len(),
        "estimate complete"
    );

    let result = EstimationResult {
        k: solution.k.value,
        time_since_death_hours: solution.time_since_death_hours,
        estimated_time_of_death,
        steps: narrative.steps,
        warnings: narrative.warnings,
    };
    Ok(RunOutput {
        request: normalized,
        solution,
        result,
    })
}

/// Convert fractional hours to a `Duration`, rounded to the nearest nanosecond.
pub fn elapsed_duration(hours: f64) -> Result<Duration, EstimateError> {
    let nanos = (hours * NANOS_PER_HOUR).round();
    // i64::MAX as f64 rounds up to 2^63, so the bound must be exclusive.
    if !(nanos.is_finite() && nanos.abs() < i64::MAX as f64) {
        return Err(EstimateError::model(format!(
            "elapsed time of {hours} h is too large to place on a calendar"
        )));
    }
    Ok(Duration::nanoseconds(nanos as i64))
}
