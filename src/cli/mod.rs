//! Command-line parsing for the time-of-death estimator.
//!
//! Argument parsing and command dispatch stay separate from the cooling math.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{EstimationRequest, SecondReading};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "tod",
    version,
    about = "Post-mortem time-of-death estimate from body temperature (Newton's Law of Cooling)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate time of death from one or two body-temperature readings.
    Estimate(EstimateArgs),
    /// Liveness probe: prints `ok` and exits 0.
    Health,
}

#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    /// Read the request from a JSON file instead of flags.
    #[arg(
        long,
        value_name = "JSON",
        conflicts_with_all = [
            "ambient", "body", "normal", "since_first", "k", "scene", "second_body", "second_delta",
        ]
    )]
    pub request: Option<PathBuf>,

    /// Ambient temperature (°C).
    #[arg(short = 'a', long, allow_negative_numbers = true, required_unless_present = "request")]
    pub ambient: Option<f64>,

    /// Body temperature at the first reading (°C).
    #[arg(short = 'b', long, required_unless_present = "request")]
    pub body: Option<f64>,

    /// Body temperature assumed at death (°C). Defaults to 37.0.
    #[arg(long)]
    pub normal: Option<f64>,

    /// Hours between the first reading and the scene time.
    #[arg(long = "since-first", value_name = "HOURS")]
    pub since_first: Option<f64>,

    /// Explicit cooling constant (h⁻¹). Ignored when a second reading is given.
    #[arg(short = 'k', long)]
    pub k: Option<f64>,

    /// Scene reference time (ISO-8601). Defaults to now.
    #[arg(long, value_name = "DATETIME")]
    pub scene: Option<String>,

    /// Body temperature at the second reading (°C).
    #[arg(long = "second-body", requires = "second_delta")]
    pub second_body: Option<f64>,

    /// Hours between the first and second readings.
    #[arg(long = "second-delta", value_name = "HOURS", requires = "second_body")]
    pub second_delta: Option<f64>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the result JSON to this file.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Render an ASCII cooling curve under the text report.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 16)]
    pub height: usize,
}

impl EstimateArgs {
    /// Build a request from flags. Returns `None` when `--request` was used instead.
    pub fn to_request(&self) -> Option<EstimationRequest> {
        let (ambient_temp_c, body_temp_c) = (self.ambient?, self.body?);
        let second_reading = match (self.second_body, self.second_delta) {
            (Some(body_temp_c), Some(delta_hours_from_first)) => Some(SecondReading {
                body_temp_c,
                delta_hours_from_first,
            }),
            _ => None,
        };
        Some(EstimationRequest {
            ambient_temp_c,
            body_temp_c,
            normal_body_temp_c: self.normal,
            time_since_first_reading_hours: self.since_first,
            k: self.k,
            scene_date_time: self.scene.clone(),
            second_reading,
        })
    }
}
