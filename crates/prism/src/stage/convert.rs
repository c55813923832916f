//! The convert stage: one JSX component snippet per fragment document.

use std::{fs, path::{Path, PathBuf}};

use log::{info, warn};

use prism_core::{
    component::{ComponentSnippet, Shape, ShapeKind},
    fragment::{ColorFragment, FRAGMENT_CLASS},
};
use prism_parser::scan_document;

use crate::{config::PathsConfig, error::PrismError};

/// Outcome of a convert run.
///
/// Skips and failures are per-file: one bad fragment never fails the
/// batch, it is recorded here and the stage moves on.
#[derive(Debug, Default)]
pub struct ConvertReport {
    written: Vec<PathBuf>,
    skipped: Vec<(PathBuf, String)>,
    failed: Vec<(PathBuf, String)>,
}

impl ConvertReport {
    /// The snippet files written, in input order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Fragments skipped with a diagnostic, as `(path, reason)` pairs.
    pub fn skipped(&self) -> &[(PathBuf, String)] {
        &self.skipped
    }

    /// Fragments that failed to convert, as `(path, error)` pairs.
    pub fn failed(&self) -> &[(PathBuf, String)] {
        &self.failed
    }
}

/// Per-file outcome inside the batch.
enum FileOutcome {
    Written(PathBuf),
    Skipped(String),
}

/// Converts fragment documents into JSX component snippets.
pub struct Converter<'a> {
    paths: &'a PathsConfig,
}

impl<'a> Converter<'a> {
    /// Create a converter over the given paths.
    pub fn new(paths: &'a PathsConfig) -> Self {
        Self { paths }
    }

    /// Run the stage over every `*.svg` file in the fragments directory,
    /// sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns [`PrismError::MissingInput`] if the fragments directory is
    /// absent. Per-file failures do not abort the run; they are logged and
    /// recorded in the report.
    pub fn run(&self) -> Result<ConvertReport, PrismError> {
        let files = super::sorted_files_with_extension(self.paths.fragments_dir(), "svg")?;

        let mut report = ConvertReport::default();

        if files.is_empty() {
            warn!(
                dir = self.paths.fragments_dir().display().to_string();
                "No fragment documents found; nothing to convert"
            );
            return Ok(report);
        }

        info!(fragments = files.len(); "Converting fragments");

        for path in files {
            match self.convert_file(&path) {
                Ok(FileOutcome::Written(out_path)) => {
                    info!(path = out_path.display().to_string(); "Created component snippet");
                    report.written.push(out_path);
                }
                Ok(FileOutcome::Skipped(reason)) => {
                    warn!(path = path.display().to_string(), reason = reason.clone(); "Skipping fragment");
                    report.skipped.push((path, reason));
                }
                Err(err) => {
                    warn!(path = path.display().to_string(), error = err.to_string(); "Failed to convert fragment");
                    report.failed.push((path, err.to_string()));
                }
            }
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len();
            "Conversion complete"
        );
        Ok(report)
    }

    fn convert_file(&self, path: &Path) -> Result<FileOutcome, PrismError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        let Some(color) = ColorFragment::color_from_file_name(file_name) else {
            return Ok(FileOutcome::Skipped(format!(
                "file name '{file_name}' does not follow the color_<hex>.svg convention"
            )));
        };

        let source = fs::read_to_string(path)?;
        let document = scan_document(&source);

        let shapes: Vec<Shape> = document
            .elements()
            .iter()
            .filter(|element| element.has_class(FRAGMENT_CLASS))
            .filter_map(|element| {
                let kind = ShapeKind::from_tag_name(element.name())?;
                let geometry = element.attribute(kind.geometry_attribute())?;
                Some(Shape::new(kind, geometry))
            })
            .collect();

        if shapes.is_empty() {
            return Ok(FileOutcome::Skipped(format!(
                "no path/polygon elements with class '{FRAGMENT_CLASS}'"
            )));
        }

        let snippet = ComponentSnippet::new(color, shapes);

        fs::create_dir_all(self.paths.components_dir())?;
        let out_path = self.paths.components_dir().join(snippet.file_name());
        fs::write(&out_path, snippet.to_string())?;

        Ok(FileOutcome::Written(out_path))
    }
}
