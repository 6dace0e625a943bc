//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads settings and installs logging
//! - parses CLI arguments
//! - runs the estimation pipeline
//! - prints the report / JSON / plot
//! - writes optional exports

use chrono::Local;
use clap::Parser;

use crate::cli::{Command, EstimateArgs};
use crate::config::{OutputFormat, Settings};
use crate::domain::EstimationRequest;
use crate::error::{AppError, EXIT_INPUT, ErrorReport};

pub mod pipeline;

/// Entry point for the `tod` binary.
pub fn run() -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    crate::logging::init(&settings.log_filter);

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Estimate(args) => handle_estimate(args, &settings),
        Command::Health => {
            println!("ok");
            Ok(())
        }
    }
}

fn handle_estimate(args: EstimateArgs, settings: &Settings) -> Result<(), AppError> {
    let format = if args.json { OutputFormat::Json } else { settings.output };
    let request = request_from_args(&args)?;

    let run = match pipeline::run_estimate(&request, Local::now().naive_local()) {
        Ok(run) => run,
        Err(err) => {
            if format == OutputFormat::Json {
                println!("{}", to_json(&ErrorReport::from(&err))?);
            }
            return Err(err.into());
        }
    };

    match format {
        OutputFormat::Json => println!("{}", to_json(&run.result)?),
        OutputFormat::Text => {
            print!("{}", crate::report::format_result(&run.result));
            if args.plot {
                println!();
                print!(
                    "{}",
                    crate::plot::render_cooling_plot(&run.request, &run.solution, args.width, args.height)
                );
            }
        }
    }

    if let Some(path) = &args.export {
        crate::io::json::write_result_json(path, &run.result)?;
    }

    Ok(())
}

fn request_from_args(args: &EstimateArgs) -> Result<EstimationRequest, AppError> {
    match &args.request {
        Some(path) => crate::io::json::read_request_json(path),
        None => args.to_request().ok_or_else(|| {
            AppError::new(EXIT_INPUT, "Both --ambient and --body are required without --request.")
        }),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to serialize JSON: {e}")))
}

/// Rewrite argv so estimate flags work without the subcommand.
///
/// Rules:
/// - `tod --ambient 20 ...`     -> `tod estimate --ambient 20 ...`
/// - `tod --help/--version/-h`  -> unchanged
/// - `tod` / `tod <subcommand>` -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1) else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version");
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "estimate".to_string());
    }
    argv
}
