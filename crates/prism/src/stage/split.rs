//! The split stage: one fragment document per distinct fill color.

use std::{fs, io, path::PathBuf};

use indexmap::IndexMap;
use log::{info, warn};

use prism_core::{
    color::FillColor,
    element::Element,
    fragment::ColorFragment,
};
use prism_parser::scan_document;

use crate::{config::PathsConfig, error::PrismError};

/// Outcome of a split run: the fragment files written, in emission order.
#[derive(Debug, Default)]
pub struct SplitReport {
    written: Vec<(FillColor, PathBuf)>,
}

impl SplitReport {
    /// The written fragments as `(color, path)` pairs.
    pub fn written(&self) -> &[(FillColor, PathBuf)] {
        &self.written
    }
}

/// Splits the source image into per-color fragment documents.
///
/// Elements are grouped by *resolved color*, not by class name: several
/// selectors sharing one fill merge into a single fragment, and an element
/// whose class list resolves to several colors is emitted into each of
/// those fragments (at most once per fragment).
pub struct Splitter<'a> {
    paths: &'a PathsConfig,
}

impl<'a> Splitter<'a> {
    /// Create a splitter over the given paths.
    pub fn new(paths: &'a PathsConfig) -> Self {
        Self { paths }
    }

    /// Run the stage.
    ///
    /// # Errors
    ///
    /// Returns [`PrismError::MissingInput`] if the source file does not
    /// exist (nothing is written in that case), or [`PrismError::Io`] for
    /// other read/write failures.
    pub fn run(&self) -> Result<SplitReport, PrismError> {
        let source_path = self.paths.source();
        info!(path = source_path.display().to_string(); "Splitting source image");

        let source = fs::read_to_string(source_path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                PrismError::MissingInput(source_path.to_path_buf())
            } else {
                PrismError::Io(err)
            }
        })?;

        let document = scan_document(&source);

        // Resolve selectors to colors, last write wins on duplicates.
        let mut color_by_class: IndexMap<&str, FillColor> = IndexMap::new();
        for rule in document.rules() {
            color_by_class.insert(rule.selector(), rule.color());
        }

        if color_by_class.is_empty() {
            warn!("No fill rules found in source; nothing to split");
            return Ok(SplitReport::default());
        }

        // Group elements by resolved color, preserving document order.
        let mut groups: IndexMap<FillColor, Vec<Element>> = IndexMap::new();
        for element in document.elements() {
            let mut resolved: Vec<FillColor> = Vec::new();
            for token in element.class_tokens() {
                if let Some(&color) = color_by_class.get(token) {
                    if !resolved.contains(&color) {
                        resolved.push(color);
                        groups.entry(color).or_default().push(element.clone());
                    }
                }
            }
        }

        if groups.is_empty() {
            warn!("No elements matched any fill rule; nothing to split");
            return Ok(SplitReport::default());
        }

        fs::create_dir_all(self.paths.fragments_dir())?;

        let header = document.header_or_default();
        let mut report = SplitReport::default();

        for (color, elements) in groups {
            let fragment = ColorFragment::new(color, header.clone(), elements);
            let path = self.paths.fragments_dir().join(fragment.file_name());

            fs::write(&path, fragment.to_svg_string())?;

            info!(
                path = path.display().to_string(),
                color = color.to_string();
                "Created fragment"
            );
            report.written.push((color, path));
        }

        info!(fragments = report.written.len(); "Split complete");
        Ok(report)
    }
}
