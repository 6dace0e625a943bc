//! Input/output helpers.
//!
//! - request validation + defaults (`ingest`)
//! - request/result JSON files (`json`)

pub mod ingest;
pub mod json;

pub use ingest::*;
pub use json::*;
