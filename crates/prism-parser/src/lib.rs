//! Scanners and parsers for the prism pipeline.
//!
//! Two entry points:
//!
//! - [`scan_document`] performs best-effort scanning of SVG source text,
//!   collecting the document header, the fill rules of any style blocks,
//!   and every element carrying a class attribute. Markup that does not
//!   scan is skipped, never fatal.
//! - [`parse_snippet`] strictly parses a converter-produced JSX component
//!   snippet back into its model. Failures carry rich [`error::Diagnostic`]s
//!   with labeled source spans.

pub mod error;

mod document;
mod snippet;
mod span;

pub use document::{FillRule, SourceDocument, scan_document};
pub use snippet::parse_snippet;
pub use span::Span;
