//! Narration of a solved estimate.
//!
//! Turns the solver's numbers into an ordered derivation trace and an ordered
//! list of applicability warnings. Nothing here changes a numeric result.

pub mod format;
pub mod steps;
pub mod warnings;

pub use format::*;
pub use steps::*;
pub use warnings::*;

use chrono::NaiveDateTime;

use crate::domain::{NormalizedRequest, Solution};

/// Derivation trace plus warnings for one estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    pub steps: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn narrate(
    request: &NormalizedRequest,
    solution: &Solution,
    estimated_time_of_death: NaiveDateTime,
) -> Narrative {
    Narrative {
        steps: derivation_steps(request, solution, estimated_time_of_death),
        warnings: collect_warnings(request, solution),
    }
}
