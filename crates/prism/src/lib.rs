//! Prism - a batch pipeline for color-separating SVG artwork.
//!
//! Three stages, each a pure file-tree transformation: split a multi-color
//! SVG into per-color fragment documents, convert each fragment into a JSX
//! component snippet, and combine all snippets into one aggregate module.
//! Stages run independently and are idempotent over unchanged input.

pub mod config;

mod error;
mod stage;

pub use prism_core::{class_list, color, component, element, fragment, module};

pub use error::PrismError;
pub use stage::{CombineReport, Combiner, ConvertReport, Converter, SplitReport, Splitter};

use log::info;

use config::AppConfig;

/// Facade for running pipeline stages against one configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use prism::{Pipeline, config::AppConfig};
///
/// let pipeline = Pipeline::new(AppConfig::default());
///
/// // Run one stage…
/// let report = pipeline.split().expect("Failed to split");
/// println!("{} fragments", report.written().len());
///
/// // …or the whole pipeline.
/// pipeline.run().expect("Failed to run pipeline");
/// ```
#[derive(Default)]
pub struct Pipeline {
    config: AppConfig,
}

/// Reports of a full pipeline run, one per stage.
#[derive(Debug)]
pub struct PipelineReport {
    split: SplitReport,
    convert: ConvertReport,
    combine: CombineReport,
}

impl PipelineReport {
    /// The split stage report.
    pub fn split(&self) -> &SplitReport {
        &self.split
    }

    /// The convert stage report.
    pub fn convert(&self) -> &ConvertReport {
        &self.convert
    }

    /// The combine stage report.
    pub fn combine(&self) -> &CombineReport {
        &self.combine
    }
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Split the source image into per-color fragment documents.
    ///
    /// # Errors
    ///
    /// Returns `PrismError` if the source file is missing or unreadable.
    pub fn split(&self) -> Result<SplitReport, PrismError> {
        Splitter::new(self.config.paths()).run()
    }

    /// Convert fragment documents into JSX component snippets.
    ///
    /// # Errors
    ///
    /// Returns `PrismError` if the fragments directory is absent.
    pub fn convert(&self) -> Result<ConvertReport, PrismError> {
        Converter::new(self.config.paths()).run()
    }

    /// Combine component snippets into the aggregate module.
    ///
    /// # Errors
    ///
    /// Returns `PrismError` if the components directory is absent or any
    /// snippet fails to parse.
    pub fn combine(&self) -> Result<CombineReport, PrismError> {
        Combiner::new(self.config.paths()).run()
    }

    /// Run split, convert, and combine in sequence.
    ///
    /// # Errors
    ///
    /// Returns the first stage error encountered; later stages do not run.
    pub fn run(&self) -> Result<PipelineReport, PrismError> {
        info!("Running full pipeline");

        let split = self.split()?;
        let convert = self.convert()?;
        let combine = self.combine()?;

        Ok(PipelineReport {
            split,
            convert,
            combine,
        })
    }
}
