//! Diagnostic types for the prism parsers.
//!
//! The snippet parser reports failures as [`Diagnostic`]s: a severity, an
//! optional [`ErrorCode`], labeled source spans, and optional help text.
//! One or more diagnostics are wrapped in a [`ParseError`].

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
