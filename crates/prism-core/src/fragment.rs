//! Per-color fragment documents produced by the splitter.
//!
//! A [`ColorFragment`] is a self-contained SVG document holding every element
//! of the source image that resolved to one fill color. The original class
//! attributes are rewritten to the single literal [`FRAGMENT_CLASS`], and an
//! inline style block binds that class to the fill.

use log::debug;
use svg::{
    Document,
    node::{Node, element as svg_element},
};

use crate::{color::FillColor, element::Element};

/// The fixed literal class bound to the fill color in fragment documents.
pub const FRAGMENT_CLASS: &str = "color";

/// View box used when the source image has no `<svg>` open tag.
pub const DEFAULT_VIEW_BOX: &str = "0 0 4284 5712";

const SVG_XMLNS: &str = "http://www.w3.org/2000/svg";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// The `<svg …>` open tag attributes shared by all fragments of one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgHeader {
    attributes: Vec<(String, String)>,
}

impl SvgHeader {
    /// Create a header from scanned `<svg>` attributes.
    pub fn new(attributes: Vec<(String, String)>) -> Self {
        Self { attributes }
    }

    /// The header attributes in source order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

impl Default for SvgHeader {
    fn default() -> Self {
        Self::new(vec![
            ("xmlns".to_string(), SVG_XMLNS.to_string()),
            ("viewBox".to_string(), DEFAULT_VIEW_BOX.to_string()),
        ])
    }
}

/// A single-color subset of the source image's elements.
#[derive(Debug, Clone)]
pub struct ColorFragment {
    color: FillColor,
    header: SvgHeader,
    elements: Vec<Element>,
}

impl ColorFragment {
    /// Create a fragment for `color`.
    ///
    /// Every element's class attribute is rewritten to [`FRAGMENT_CLASS`],
    /// so the emitted document is independent of the source's class names.
    pub fn new(color: FillColor, header: SvgHeader, mut elements: Vec<Element>) -> Self {
        for element in &mut elements {
            element.set_attribute("class", FRAGMENT_CLASS);
        }

        Self {
            color,
            header,
            elements,
        }
    }

    /// The fill color this fragment was grouped under.
    pub fn color(&self) -> FillColor {
        self.color
    }

    /// The rewritten elements of this fragment.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The file name this fragment persists under, e.g. `color_7b00ff.svg`.
    pub fn file_name(&self) -> String {
        format!("color_{}.svg", self.color.digits())
    }

    /// Parse the color back out of a fragment file name.
    ///
    /// Returns `None` for names that do not follow the
    /// `color_<hex>.svg` convention.
    pub fn color_from_file_name(file_name: &str) -> Option<FillColor> {
        let digits = file_name.strip_prefix("color_")?.strip_suffix(".svg")?;
        FillColor::from_digits(digits).ok()
    }

    /// Render this fragment as an SVG document node.
    pub fn to_document(&self) -> Document {
        debug!(
            color = self.color.to_string(),
            elements = self.elements.len();
            "Rendering fragment document"
        );

        let mut document = Document::new();
        for (name, value) in self.header.attributes() {
            document = document.set(name.as_str(), value.as_str());
        }

        let style = svg_element::Style::new(format!(
            ".{FRAGMENT_CLASS} {{ fill: {}; }}",
            self.color
        ));
        document = document.add(svg_element::Definitions::new().add(style));

        for element in &self.elements {
            let mut node = svg_element::Element::new(element.name());
            for (name, value) in element.attributes() {
                node.assign(name.as_str(), value.as_str());
            }
            document = document.add(node);
        }

        document
    }

    /// Render this fragment as the full file content, including the XML
    /// declaration.
    pub fn to_svg_string(&self) -> String {
        format!("{XML_DECLARATION}\n{}\n", self.to_document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fragment() -> ColorFragment {
        let color = FillColor::from_digits("001645").unwrap();
        let elements = vec![
            Element::new("path")
                .with_attribute("class", "st3")
                .with_attribute("d", "M0 0L1 1"),
            Element::new("polygon")
                .with_attribute("class", "st3 st7")
                .with_attribute("points", "0,0 1,1 0,1"),
        ];
        ColorFragment::new(color, SvgHeader::default(), elements)
    }

    #[test]
    fn test_file_name() {
        assert_eq!(sample_fragment().file_name(), "color_001645.svg");
    }

    #[test]
    fn test_color_from_file_name() {
        assert_eq!(
            ColorFragment::color_from_file_name("color_7b00ff.svg"),
            Some(FillColor::from_digits("7b00ff").unwrap())
        );
        assert_eq!(ColorFragment::color_from_file_name("notes.svg"), None);
        assert_eq!(ColorFragment::color_from_file_name("color_xyz.svg"), None);
        assert_eq!(ColorFragment::color_from_file_name("color_7b00ff.jsx"), None);
    }

    #[test]
    fn test_class_attributes_are_rewritten() {
        let fragment = sample_fragment();
        for element in fragment.elements() {
            assert_eq!(element.attribute("class"), Some(FRAGMENT_CLASS));
        }
    }

    #[test]
    fn test_document_is_self_contained() {
        let rendered = sample_fragment().to_svg_string();

        assert!(rendered.starts_with("<?xml"));
        assert!(rendered.contains(".color { fill: #001645; }"));
        assert!(rendered.contains(r#"viewBox="0 0 4284 5712""#));
        assert!(rendered.contains(r#"d="M0 0L1 1""#));
        assert!(rendered.contains(r#"points="0,0 1,1 0,1""#));
        assert!(rendered.ends_with("</svg>\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let fragment = sample_fragment();
        assert_eq!(fragment.to_svg_string(), fragment.to_svg_string());
    }
}
