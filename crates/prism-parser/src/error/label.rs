//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A labeled span in parsed source.
///
/// Primary labels mark the main location of a problem; secondary labels
/// provide additional context, such as "wrapper opened here".
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// The labeled span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Returns `true` if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
