//! CLI logic for the prism pipeline tool.
//!
//! This module wires the parsed command line to the pipeline library:
//! configuration is loaded and overridden by path arguments, then the
//! requested stage (or the full pipeline) runs.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use log::info;

use prism::{Pipeline, PrismError};

/// Run the prism CLI application
///
/// This function loads configuration, applies command-line path overrides,
/// and runs the requested pipeline stage.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PrismError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Missing stage inputs
/// - Snippet parsing errors
pub fn run(args: &Args) -> Result<(), PrismError> {
    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;

    // Apply command-line path overrides
    let paths = app_config.paths_mut();
    match &args.command {
        Command::Split { input, out_dir } => {
            if let Some(input) = input {
                paths.set_source(input.clone());
            }
            if let Some(out_dir) = out_dir {
                paths.set_fragments_dir(out_dir.clone());
            }
        }
        Command::Convert { in_dir, out_dir } => {
            if let Some(in_dir) = in_dir {
                paths.set_fragments_dir(in_dir.clone());
            }
            if let Some(out_dir) = out_dir {
                paths.set_components_dir(out_dir.clone());
            }
        }
        Command::Combine { in_dir, output } => {
            if let Some(in_dir) = in_dir {
                paths.set_components_dir(in_dir.clone());
            }
            if let Some(output) = output {
                paths.set_module(output.clone());
            }
        }
        Command::Run => {}
    }

    let pipeline = Pipeline::new(app_config);

    match &args.command {
        Command::Split { .. } => {
            let report = pipeline.split()?;
            info!(fragments = report.written().len(); "Split stage finished");
        }
        Command::Convert { .. } => {
            let report = pipeline.convert()?;
            info!(
                written = report.written().len(),
                skipped = report.skipped().len(),
                failed = report.failed().len();
                "Convert stage finished"
            );
        }
        Command::Combine { .. } => {
            let report = pipeline.combine()?;
            info!(snippets = report.combined(); "Combine stage finished");
        }
        Command::Run => {
            let report = pipeline.run()?;
            info!(
                fragments = report.split().written().len(),
                snippets = report.convert().written().len(),
                combined = report.combine().combined();
                "Pipeline finished"
            );
        }
    }

    Ok(())
}
