//! JSX component snippets produced by the fragment converter.
//!
//! A [`ComponentSnippet`] wraps one fragment's shapes in a keyed
//! `React.Fragment` and renders as a standalone JSX module with a default
//! export. Only the geometry attribute of each shape survives conversion.

use std::fmt;

use crate::{color::FillColor, fragment::FRAGMENT_CLASS};

/// Shape kinds retained by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A `path` element, keyed by its `d` attribute.
    Path,
    /// A `polygon` element, keyed by its `points` attribute.
    Polygon,
}

impl ShapeKind {
    /// The element tag name for this shape kind.
    pub fn tag_name(&self) -> &'static str {
        match self {
            ShapeKind::Path => "path",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// The single geometry attribute preserved for this kind.
    pub fn geometry_attribute(&self) -> &'static str {
        match self {
            ShapeKind::Path => "d",
            ShapeKind::Polygon => "points",
        }
    }

    /// Classify a tag name, or `None` for kinds the converter drops.
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "path" => Some(ShapeKind::Path),
            "polygon" => Some(ShapeKind::Polygon),
            _ => None,
        }
    }
}

/// A single shape with its geometry attribute value, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    geometry: String,
}

impl Shape {
    /// Create a shape from its kind and raw geometry attribute value.
    pub fn new(kind: ShapeKind, geometry: impl Into<String>) -> Self {
        Self {
            kind,
            geometry: geometry.into(),
        }
    }

    /// The shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The raw geometry attribute value.
    pub fn geometry(&self) -> &str {
        &self.geometry
    }

    /// Write this shape as a JSX element at the given indent.
    pub(crate) fn write_jsx(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(
            f,
            "{indent}<{} className=\"{FRAGMENT_CLASS}\" {}=\"{}\"/>",
            self.kind.tag_name(),
            self.kind.geometry_attribute(),
            self.geometry
        )
    }
}

/// A named, renderable unit wrapping one fragment's shapes.
///
/// Displays as a complete JSX module:
///
/// ```text
/// import React from 'react';
///
/// const Color001645 = () => {
///   return (
///     <React.Fragment key="color_001645">
///       <path className="color" d="M0 0L1 1"/>
///     </React.Fragment>
///   );
/// };
///
/// export default Color001645;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSnippet {
    color: FillColor,
    shapes: Vec<Shape>,
}

impl ComponentSnippet {
    /// Create a snippet for `color` wrapping `shapes`.
    pub fn new(color: FillColor, shapes: Vec<Shape>) -> Self {
        Self { color, shapes }
    }

    /// The fill color this snippet was derived from.
    pub fn color(&self) -> FillColor {
        self.color
    }

    /// The shapes wrapped by this snippet.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The component identifier, e.g. `Color7B00FF`.
    pub fn identifier(&self) -> String {
        format!("Color{}", self.color.digits_upper())
    }

    /// The fragment key, e.g. `color_7b00ff`.
    pub fn key(&self) -> String {
        format!("color_{}", self.color.digits())
    }

    /// The file name this snippet persists under, e.g. `color_7b00ff.jsx`.
    pub fn file_name(&self) -> String {
        format!("color_{}.jsx", self.color.digits())
    }

    /// Write the wrapped shape elements, one per line at the given indent.
    pub(crate) fn write_shapes(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        for shape in &self.shapes {
            shape.write_jsx(f, indent)?;
        }
        Ok(())
    }
}

impl fmt::Display for ComponentSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identifier = self.identifier();

        writeln!(f, "import React from 'react';")?;
        writeln!(f)?;
        writeln!(f, "const {identifier} = () => {{")?;
        writeln!(f, "  return (")?;
        writeln!(f, "    <React.Fragment key=\"{}\">", self.key())?;
        self.write_shapes(f, "      ")?;
        writeln!(f, "    </React.Fragment>")?;
        writeln!(f, "  );")?;
        writeln!(f, "}};")?;
        writeln!(f)?;
        writeln!(f, "export default {identifier};")
    }
}
