//! Error types for prism operations.
//!
//! This module provides the main error type [`PrismError`] which wraps the
//! error conditions that can occur during pipeline processing.

use std::{io, path::PathBuf};

use thiserror::Error;

use prism_parser::error::ParseError;

/// The main error type for prism operations.
///
/// The `Parse` variant carries the parsed source alongside the structured
/// [`ParseError`], so callers can render diagnostics with labeled source
/// spans.
#[derive(Debug, Error)]
pub enum PrismError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("missing input: {}", .0.display())]
    MissingInput(PathBuf),
}

impl PrismError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
