//! Environment-driven settings for the `tod` binary.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory:
//!
//! - `TOD_LOG`: tracing filter directive (default `warn`)
//! - `TOD_OUTPUT`: default output format, `text` or `json` (default `text`)
//!
//! CLI flags take precedence over both.

use std::str::FromStr;

use crate::error::{AppError, EXIT_INPUT};

pub const ENV_LOG: &str = "TOD_LOG";
pub const ENV_OUTPUT: &str = "TOD_OUTPUT";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::new(
                EXIT_INPUT,
                format!("Invalid {ENV_OUTPUT} value '{other}' (expected 'text' or 'json')."),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Load `.env` (if present) and read settings from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut settings = Settings::default();
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            settings.log_filter = filter;
        }
        if let Some(output) = lookup(ENV_OUTPUT).filter(|v| !v.trim().is_empty()) {
            settings.output = output.parse()?;
        }
        Ok(settings)
    }
}
