//! The combine stage: one aggregate module listing every snippet body.

use std::{fs, path::PathBuf};

use log::{info, warn};

use prism_core::module::AggregateModule;
use prism_parser::parse_snippet;

use crate::{config::PathsConfig, error::PrismError};

/// Outcome of a combine run.
#[derive(Debug, Default)]
pub struct CombineReport {
    module: Option<PathBuf>,
    combined: usize,
}

impl CombineReport {
    /// The written module path, or `None` when there was nothing to
    /// combine.
    pub fn module(&self) -> Option<&PathBuf> {
        self.module.as_ref()
    }

    /// Number of snippet bodies listed in the module.
    pub fn combined(&self) -> usize {
        self.combined
    }
}

/// Combines component snippets into the aggregate module.
///
/// Snippets are listed in lexicographic file-name order. Unlike the
/// converter, a snippet that fails to parse is fatal for the whole stage:
/// the module must either list every snippet or not be written at all.
pub struct Combiner<'a> {
    paths: &'a PathsConfig,
}

impl<'a> Combiner<'a> {
    /// Create a combiner over the given paths.
    pub fn new(paths: &'a PathsConfig) -> Self {
        Self { paths }
    }

    /// Run the stage.
    ///
    /// # Errors
    ///
    /// Returns [`PrismError::MissingInput`] if the components directory is
    /// absent, or [`PrismError::Parse`] if any snippet fails structured
    /// parsing. No module file is written on error.
    pub fn run(&self) -> Result<CombineReport, PrismError> {
        let files = super::sorted_files_with_extension(self.paths.components_dir(), "jsx")?;

        if files.is_empty() {
            warn!(
                dir = self.paths.components_dir().display().to_string();
                "No component snippets found; module not written"
            );
            return Ok(CombineReport::default());
        }

        info!(snippets = files.len(); "Combining component snippets");

        let mut snippets = Vec::with_capacity(files.len());
        for path in &files {
            let source = fs::read_to_string(path)?;
            match parse_snippet(&source) {
                Ok(snippet) => snippets.push(snippet),
                Err(err) => {
                    warn!(path = path.display().to_string(); "Snippet failed to parse");
                    return Err(PrismError::new_parse_error(err, source));
                }
            }
        }

        let module = AggregateModule::new(snippets);
        fs::write(self.paths.module(), module.to_string())?;

        info!(
            path = self.paths.module().display().to_string(),
            snippets = module.len();
            "Created aggregate module"
        );

        Ok(CombineReport {
            module: Some(self.paths.module().to_path_buf()),
            combined: module.len(),
        })
    }
}
