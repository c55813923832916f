//! Best-effort scanning of SVG source text.
//!
//! The scanner makes a single pass over the raw markup and collects the
//! three things the pipeline needs: the `<svg …>` open tag (the document
//! header), the `.selector { fill: #rrggbb; }` rules of any style blocks,
//! and every element open tag carrying a `class` attribute.
//!
//! Markup that does not scan — malformed tags, unquoted attributes, rules
//! whose fill is not a 6-hex-digit color — is skipped, never fatal. The
//! public entry point is [`scan_document`].

use log::debug;
use winnow::{
    Parser as _,
    ascii::{multispace0, multispace1},
    combinator::{alt, delimited, opt, preceded, repeat, terminated},
    error::{ContextError, ErrMode},
    stream::{LocatingSlice, Stream},
    token::{any, take_till, take_until, take_while},
};

use prism_core::{
    color::FillColor,
    element::Element,
    fragment::SvgHeader,
};

pub(crate) type Input<'a> = LocatingSlice<&'a str>;
pub(crate) type IResult<O> = Result<O, ErrMode<ContextError>>;

/// A `.selector { fill: #rrggbb; }` binding scanned from a style block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRule {
    selector: String,
    color: FillColor,
}

impl FillRule {
    /// Create a fill rule binding `selector` to `color`.
    pub fn new(selector: impl Into<String>, color: FillColor) -> Self {
        Self {
            selector: selector.into(),
            color,
        }
    }

    /// The class selector name, without the leading `.`.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The bound fill color.
    pub fn color(&self) -> FillColor {
        self.color
    }
}

/// The scanned shape of a source SVG document.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    header: Option<SvgHeader>,
    rules: Vec<FillRule>,
    elements: Vec<Element>,
}

impl SourceDocument {
    /// The scanned `<svg …>` open tag attributes, if the source had one.
    pub fn header(&self) -> Option<&SvgHeader> {
        self.header.as_ref()
    }

    /// The scanned header, or the built-in default when the source had none.
    pub fn header_or_default(&self) -> SvgHeader {
        self.header.clone().unwrap_or_default()
    }

    /// The fill rules of all style blocks, in source order.
    ///
    /// Duplicate selectors are not collapsed here; resolution (last write
    /// wins) is the splitter's concern.
    pub fn rules(&self) -> &[FillRule] {
        &self.rules
    }

    /// Every scanned element open tag carrying a `class` attribute, in
    /// source order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// Scan SVG source text into a [`SourceDocument`].
///
/// The scan is best-effort and total: any input produces a document, with
/// unrecognizable markup skipped.
pub fn scan_document(source: &str) -> SourceDocument {
    let mut input = LocatingSlice::new(source);

    let mut header: Option<SvgHeader> = None;
    let mut rules: Vec<FillRule> = Vec::new();
    let mut elements: Vec<Element> = Vec::new();

    loop {
        let _ = attempt(&mut input, skip_text);
        if input.eof_offset() == 0 {
            break;
        }

        if attempt(&mut input, non_element_markup).is_some() {
            continue;
        }

        if let Some(tag) = attempt(&mut input, scanned_tag) {
            if header.is_none() && tag.element.name().eq_ignore_ascii_case("svg") {
                header = Some(SvgHeader::new(tag.element.attributes().to_vec()));
            } else if tag.element.name().eq_ignore_ascii_case("style") && !tag.self_closing {
                match attempt(&mut input, style_content) {
                    Some(content) => rules.extend(scan_fill_rules(content)),
                    None => debug!("Unterminated style block; remaining rules ignored"),
                }
            } else if tag.element.attribute("class").is_some() {
                elements.push(tag.element);
            }
            continue;
        }

        // Not a recognizable construct: skip the `<` and resume scanning.
        let _ = attempt(&mut input, skip_char);
    }

    debug!(
        has_header = header.is_some(),
        rules = rules.len(),
        elements = elements.len();
        "Scanned document"
    );

    SourceDocument {
        header,
        rules,
        elements,
    }
}

/// A scanned element open tag.
#[derive(Debug)]
pub(crate) struct ScannedTag {
    pub(crate) element: Element,
    pub(crate) self_closing: bool,
}

/// Run `parser`, resetting the input on failure.
pub(crate) fn attempt<'a, O>(
    input: &mut Input<'a>,
    mut parser: impl FnMut(&mut Input<'a>) -> IResult<O>,
) -> Option<O> {
    let checkpoint = input.checkpoint();
    match parser(input) {
        Ok(value) => Some(value),
        Err(_) => {
            input.reset(&checkpoint);
            None
        }
    }
}

/// Parse an element open tag: `<name attr="value" …>` or `<name …/>`.
pub(crate) fn scanned_tag(input: &mut Input<'_>) -> IResult<ScannedTag> {
    (
        preceded('<', markup_name),
        repeat(0.., preceded(multispace1, attribute)),
        multispace0,
        alt(("/>", ">")),
    )
        .map(
            |(name, attributes, _, close): (&str, Vec<(String, String)>, &str, &str)| ScannedTag {
                element: Element::from_parts(name, attributes),
                self_closing: close == "/>",
            },
        )
        .parse_next(input)
}

/// Tag and attribute name characters (permissive XML-ish names).
pub(crate) fn markup_name<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
    })
    .parse_next(input)
}

/// One `name="value"` attribute; the value may be single- or double-quoted,
/// or absent entirely for bare attributes.
fn attribute(input: &mut Input<'_>) -> IResult<(String, String)> {
    (
        markup_name,
        opt(preceded((multispace0, '=', multispace0), quoted_value)),
    )
        .map(|(name, value): (&str, Option<&str>)| {
            (name.to_string(), value.unwrap_or_default().to_string())
        })
        .parse_next(input)
}

fn quoted_value<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    alt((
        delimited('"', take_till(0.., '"'), '"'),
        delimited('\'', take_till(0.., '\''), '\''),
    ))
    .parse_next(input)
}

/// Comments, processing instructions, doctype declarations, and closing
/// tags: markup the scanner consumes without modeling.
fn non_element_markup(input: &mut Input<'_>) -> IResult<()> {
    alt((
        ("<!--", take_until(0.., "-->"), "-->").void(),
        ("<?", take_till(0.., '>'), '>').void(),
        ("<!", take_till(0.., '>'), '>').void(),
        ("</", take_till(0.., '>'), '>').void(),
    ))
    .parse_next(input)
}

/// The raw content of a style block, up to its closing tag.
fn style_content<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    terminated(take_until(0.., "</style>"), "</style>").parse_next(input)
}

fn skip_text(input: &mut Input<'_>) -> IResult<()> {
    take_till(0.., '<').void().parse_next(input)
}

fn skip_char(input: &mut Input<'_>) -> IResult<char> {
    any.parse_next(input)
}

/// Scan style block content for `.selector { fill: #rrggbb; }` rules.
///
/// Content that does not match the rule shape — compound selectors, other
/// leading declarations, short hex forms — is skipped.
fn scan_fill_rules(content: &str) -> Vec<FillRule> {
    let mut input = LocatingSlice::new(content);
    let mut rules = Vec::new();

    loop {
        let _ = attempt(&mut input, skip_to_selector);
        if input.eof_offset() == 0 {
            break;
        }

        match attempt(&mut input, fill_rule) {
            Some(rule) => rules.push(rule),
            None => {
                let _ = attempt(&mut input, skip_char);
            }
        }
    }

    rules
}

fn skip_to_selector(input: &mut Input<'_>) -> IResult<()> {
    take_till(0.., '.').void().parse_next(input)
}

/// `.selector { fill: #rrggbb; }` with arbitrary interior whitespace.
fn fill_rule(input: &mut Input<'_>) -> IResult<FillRule> {
    (
        preceded('.', css_ident),
        preceded(
            (multispace0, '{', multispace0, "fill", multispace0, ':', multispace0),
            fill_color,
        ),
        (multispace0, ';'),
    )
        .map(|(selector, color, _): (&str, FillColor, (&str, char))| {
            FillRule::new(selector, color)
        })
        .parse_next(input)
}

fn css_ident<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., |c: char| c.is_alphanumeric() || matches!(c, '-' | '_'))
        .parse_next(input)
}

/// A 6-hex-digit color literal, `#rrggbb`.
fn fill_color(input: &mut Input<'_>) -> IResult<FillColor> {
    preceded('#', take_while(6..=6, |c: char| c.is_ascii_hexdigit()))
        .verify_map(|digits: &str| FillColor::from_digits(digits).ok())
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use prism_core::fragment::DEFAULT_VIEW_BOX;

    const SAMPLE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported artwork -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 200">
  <defs>
    <style>
      .st0 { fill: #001645; }
      .st1 { fill: #7b00ff; }
      .st12 { fill: #001645; }
    </style>
  </defs>
  <path class="st0" d="M0 0L1 1"/>
  <polygon class="st1 shaded" points="0,0 1,1"/>
  <path class="st12" d="M2 2"/>
</svg>
"##;

    #[test]
    fn test_scan_header() {
        let document = scan_document(SAMPLE);

        let header = document.header().expect("header should be scanned");
        assert_eq!(
            header.attributes(),
            &[
                (
                    "xmlns".to_string(),
                    "http://www.w3.org/2000/svg".to_string()
                ),
                ("viewBox".to_string(), "0 0 100 200".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_fill_rules() {
        let document = scan_document(SAMPLE);

        let rules: Vec<_> = document
            .rules()
            .iter()
            .map(|rule| (rule.selector(), rule.color().to_string()))
            .collect();

        assert_eq!(
            rules,
            vec![
                ("st0", "#001645".to_string()),
                ("st1", "#7b00ff".to_string()),
                ("st12", "#001645".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_classed_elements() {
        let document = scan_document(SAMPLE);

        let names: Vec<_> = document
            .elements()
            .iter()
            .map(|element| element.name())
            .collect();
        assert_eq!(names, vec!["path", "polygon", "path"]);

        // Attribute order is preserved as written.
        assert_eq!(
            document.elements()[0].attributes(),
            &[
                ("class".to_string(), "st0".to_string()),
                ("d".to_string(), "M0 0L1 1".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_header_falls_back_to_default() {
        let document = scan_document(r#"<path class="st0" d="M0 0"/>"#);

        assert!(document.header().is_none());
        let header = document.header_or_default();
        assert!(
            header
                .attributes()
                .iter()
                .any(|(name, value)| name == "viewBox" && value == DEFAULT_VIEW_BOX)
        );
    }

    #[test]
    fn test_style_inside_cdata() {
        let source = r#"<svg><style><![CDATA[ .st0 { fill: #aabbcc; } ]]></style></svg>"#;
        let document = scan_document(source);

        assert_eq!(document.rules().len(), 1);
        assert_eq!(document.rules()[0].selector(), "st0");
    }

    #[test]
    fn test_short_hex_rules_are_skipped() {
        let source = "<style>.a { fill: #fff; } .b { fill: #001645; }</style>";
        let document = scan_document(source);

        assert_eq!(document.rules().len(), 1);
        assert_eq!(document.rules()[0].selector(), "b");
    }

    #[test]
    fn test_rules_with_leading_declarations_are_skipped() {
        let source = "<style>.a { stroke: none; fill: #001645; }</style>";
        let document = scan_document(source);

        assert!(document.rules().is_empty());
    }

    #[test]
    fn test_malformed_tags_are_skipped() {
        let source = r#"<svg><path class="st0" d="M0 0"/><path width=100></svg>"#;
        let document = scan_document(source);

        assert_eq!(document.elements().len(), 1);
    }

    #[test]
    fn test_elements_without_class_are_ignored() {
        let source = r#"<svg><rect width="5" height="5"/><path class="st0" d="M0 0"/></svg>"#;
        let document = scan_document(source);

        assert_eq!(document.elements().len(), 1);
        assert_eq!(document.elements()[0].name(), "path");
    }

    #[test]
    fn test_single_quoted_attributes() {
        let source = "<path class='st0' d='M0 0'/>";
        let document = scan_document(source);

        assert_eq!(document.elements()[0].attribute("d"), Some("M0 0"));
    }

    proptest! {
        /// The scanner is total: arbitrary input never panics and always
        /// yields a document.
        #[test]
        fn test_scan_is_total(source in ".*") {
            let _ = scan_document(&source);
        }

        /// Every rule the scanner yields carries a selector it actually saw.
        #[test]
        fn test_scanned_rules_come_from_source(
            selector in "[a-z][a-z0-9]{0,8}",
            digits in "[0-9a-f]{6}",
        ) {
            let source = format!("<style>.{selector} {{ fill: #{digits}; }}</style>");
            let document = scan_document(&source);

            prop_assert_eq!(document.rules().len(), 1);
            prop_assert_eq!(document.rules()[0].selector(), selector.as_str());
            prop_assert_eq!(document.rules()[0].color().digits(), digits);
        }
    }
}
