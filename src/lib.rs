//! `tod-estimator` library crate.
//!
//! Post-mortem time-of-death estimation from body temperature via Newton's Law
//! of Cooling. The binary (`tod`) is a thin wrapper around this library so the
//! estimation engine is testable and reusable without spawning processes.
//!
//! ```no_run
//! use tod_estimator::app::pipeline::estimate;
//! use tod_estimator::domain::EstimationRequest;
//!
//! let result = estimate(&EstimationRequest::new(20.0, 32.0))?;
//! println!("{} h since death", result.time_since_death_hours);
//! # Ok::<(), tod_estimator::error::EstimateError>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod plot;
pub mod report;
pub mod solver;
