//! Configuration types for the prism pipeline.
//!
//! This module provides the configuration structures that control where
//! each stage reads its input and writes its output. All types implement
//! [`serde::Deserialize`] for loading from TOML files.
//!
//! The original tool hard-coded working-directory-relative paths; here they
//! are explicit configuration so stages can be pointed anywhere, which also
//! keeps tests independent of the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Filesystem locations section.
    #[serde(default)]
    paths: PathsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified paths.
    pub fn new(paths: PathsConfig) -> Self {
        Self { paths }
    }

    /// Returns the paths configuration.
    pub fn paths(&self) -> &PathsConfig {
        &self.paths
    }

    /// Returns the paths configuration for modification.
    pub fn paths_mut(&mut self) -> &mut PathsConfig {
        &mut self.paths
    }
}

/// Filesystem locations for each pipeline stage.
///
/// Every field has a working-directory-relative default, so an empty
/// configuration file (or none at all) reproduces the conventional layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// The source SVG read by the split stage.
    source: PathBuf,

    /// Directory of per-color fragment documents (split output, convert
    /// input).
    fragments_dir: PathBuf,

    /// Directory of JSX component snippets (convert output, combine input).
    components_dir: PathBuf,

    /// The aggregate module written by the combine stage.
    module: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("input.svg"),
            fragments_dir: PathBuf::from("split_colors"),
            components_dir: PathBuf::from("jsxs"),
            module: PathBuf::from("paths.tsx"),
        }
    }
}

impl PathsConfig {
    /// The source SVG path.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The fragments directory.
    pub fn fragments_dir(&self) -> &Path {
        &self.fragments_dir
    }

    /// The component snippets directory.
    pub fn components_dir(&self) -> &Path {
        &self.components_dir
    }

    /// The aggregate module path.
    pub fn module(&self) -> &Path {
        &self.module
    }

    /// Override the source SVG path.
    pub fn set_source(&mut self, source: PathBuf) {
        self.source = source;
    }

    /// Override the fragments directory.
    pub fn set_fragments_dir(&mut self, fragments_dir: PathBuf) {
        self.fragments_dir = fragments_dir;
    }

    /// Override the component snippets directory.
    pub fn set_components_dir(&mut self, components_dir: PathBuf) {
        self.components_dir = components_dir;
    }

    /// Override the aggregate module path.
    pub fn set_module(&mut self, module: PathBuf) {
        self.module = module;
    }
}
