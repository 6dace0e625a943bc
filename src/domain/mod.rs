//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the raw request and its validated form (`EstimationRequest`, `NormalizedRequest`)
//! - the calibration choice and resolved cooling constant (`Calibration`, `CoolingConstant`)
//! - solver and final outputs (`Solution`, `EstimationResult`)

pub mod types;

pub use types::*;
