//! Structured parsing of JSX component snippet files.
//!
//! The aggregator re-reads the converter's output. Rather than stripping
//! literal wrapper prefixes from the text, the snippet is parsed back into
//! its model — the fragment key and the shape elements inside the wrapper —
//! so the stage is insensitive to incidental whitespace and attribute
//! ordering. Anything else inside the wrapper is a hard error.

use winnow::{
    Parser as _,
    ascii::multispace0,
    stream::{LocatingSlice, Location, Stream},
    token::take_until,
};

use prism_core::{
    color::FillColor,
    component::{ComponentSnippet, Shape, ShapeKind},
};

use crate::{
    document::{IResult, Input, attempt, scanned_tag},
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

const WRAPPER_TAG: &str = "React.Fragment";
const WRAPPER_OPEN: &str = "<React.Fragment";

/// Parse a converter-produced snippet back into its [`ComponentSnippet`].
///
/// # Errors
///
/// Returns a [`ParseError`] with labeled spans when the snippet has no
/// well-formed fragment wrapper, an invalid key, or unexpected content
/// inside the wrapper body.
pub fn parse_snippet(source: &str) -> Result<ComponentSnippet, ParseError> {
    let mut input = LocatingSlice::new(source);

    if attempt(&mut input, seek_wrapper).is_none() {
        return Err(Diagnostic::error("no fragment wrapper found in snippet")
            .with_code(ErrorCode::E001)
            .with_label(Span::new(0..0), "expected a `<React.Fragment …>` wrapper")
            .with_help("snippets are produced by the convert stage; regenerate them if edited")
            .into());
    }

    let wrapper_start = input.current_token_start();
    let Some(wrapper) = attempt(&mut input, scanned_tag) else {
        return Err(Diagnostic::error("malformed fragment wrapper")
            .with_code(ErrorCode::E001)
            .with_label(
                Span::new(wrapper_start..wrapper_start),
                "wrapper open tag does not parse",
            )
            .into());
    };
    let wrapper_span = Span::new(wrapper_start..input.previous_token_end());

    if wrapper.element.name() != WRAPPER_TAG {
        return Err(Diagnostic::error(format!(
            "unexpected wrapper tag `<{}>`",
            wrapper.element.name()
        ))
        .with_code(ErrorCode::E001)
        .with_label(wrapper_span, "expected `<React.Fragment …>`")
        .into());
    }

    let color = match wrapper.element.attribute("key") {
        Some(key) => key
            .strip_prefix("color_")
            .and_then(|digits| FillColor::from_digits(digits).ok())
            .ok_or_else(|| {
                Diagnostic::error(format!("invalid fragment key '{key}'"))
                    .with_code(ErrorCode::E002)
                    .with_label(wrapper_span, "in this wrapper")
                    .with_help("expected key=\"color_<hex>\" with 6 hex digits")
            })?,
        None => {
            return Err(Diagnostic::error("fragment wrapper has no key attribute")
                .with_code(ErrorCode::E002)
                .with_label(wrapper_span, "in this wrapper")
                .with_help("expected key=\"color_<hex>\" with 6 hex digits")
                .into());
        }
    };

    let mut shapes = Vec::new();

    if !wrapper.self_closing {
        loop {
            let _ = attempt(&mut input, skip_whitespace);

            if attempt(&mut input, close_wrapper).is_some() {
                break;
            }

            if input.eof_offset() == 0 {
                return Err(Diagnostic::error("unterminated fragment wrapper")
                    .with_code(ErrorCode::E005)
                    .with_label(Span::new(source.len()..source.len()), "snippet ends here")
                    .with_secondary_label(wrapper_span, "wrapper opened here")
                    .into());
            }

            let element_start = input.current_token_start();
            let Some(tag) = attempt(&mut input, scanned_tag) else {
                return Err(Diagnostic::error("unexpected content in fragment body")
                    .with_code(ErrorCode::E003)
                    .with_label(Span::new(element_start..element_start), "not an element")
                    .with_help("expected a shape element or the closing wrapper tag")
                    .into());
            };
            let element_span = Span::new(element_start..input.previous_token_end());

            let Some(kind) = ShapeKind::from_tag_name(tag.element.name()) else {
                return Err(Diagnostic::error(format!(
                    "unexpected element `<{}>` in fragment body",
                    tag.element.name()
                ))
                .with_code(ErrorCode::E003)
                .with_label(element_span, "not a path or polygon")
                .with_help("only path and polygon elements are supported")
                .into());
            };

            let Some(geometry) = tag.element.attribute(kind.geometry_attribute()) else {
                return Err(Diagnostic::error(format!(
                    "{} element has no `{}` attribute",
                    kind.tag_name(),
                    kind.geometry_attribute()
                ))
                .with_code(ErrorCode::E004)
                .with_label(element_span, "missing geometry")
                .into());
            };

            shapes.push(Shape::new(kind, geometry));
        }
    }

    Ok(ComponentSnippet::new(color, shapes))
}

fn seek_wrapper(input: &mut Input<'_>) -> IResult<()> {
    take_until(0.., WRAPPER_OPEN).void().parse_next(input)
}

fn skip_whitespace(input: &mut Input<'_>) -> IResult<()> {
    multispace0.void().parse_next(input)
}

/// The wrapper closing tag, tolerant of interior whitespace.
fn close_wrapper(input: &mut Input<'_>) -> IResult<()> {
    ("</", multispace0, WRAPPER_TAG, multispace0, '>')
        .void()
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample_snippet() -> ComponentSnippet {
        ComponentSnippet::new(
            FillColor::from_digits("001645").unwrap(),
            vec![
                Shape::new(ShapeKind::Path, "M0 0L1 1"),
                Shape::new(ShapeKind::Polygon, "0,0 1,1 0,1"),
            ],
        )
    }

    fn code_of(err: &ParseError) -> Option<ErrorCode> {
        err.diagnostics().first().and_then(|diag| diag.code())
    }

    #[test]
    fn test_converter_output_parses_back() {
        let snippet = sample_snippet();
        let parsed = parse_snippet(&snippet.to_string()).expect("rendered snippet should parse");

        assert_eq!(parsed, snippet);
    }

    #[test]
    fn test_reformatted_snippet_parses() {
        let source = "\
import React from 'react';
const Color001645 = () => {
  return (<React.Fragment   key=\"color_001645\"><path d=\"M0 0\"  className=\"color\" />
      </ React.Fragment >);
};
export default Color001645;
";

        let parsed = parse_snippet(source).expect("whitespace variations should parse");
        assert_eq!(parsed.shapes().len(), 1);
        assert_eq!(parsed.shapes()[0].geometry(), "M0 0");
    }

    #[test]
    fn test_missing_wrapper() {
        let err = parse_snippet("export default null;").unwrap_err();
        assert_eq!(code_of(&err), Some(ErrorCode::E001));
    }

    #[test]
    fn test_missing_key() {
        let err = parse_snippet("<React.Fragment></React.Fragment>").unwrap_err();
        assert_eq!(code_of(&err), Some(ErrorCode::E002));
    }

    #[test]
    fn test_invalid_key() {
        let err = parse_snippet(r#"<React.Fragment key="fragment_1"></React.Fragment>"#)
            .unwrap_err();
        assert_eq!(code_of(&err), Some(ErrorCode::E002));
    }

    #[test]
    fn test_unexpected_element() {
        let source = r#"<React.Fragment key="color_001645"><rect width="1"/></React.Fragment>"#;
        let err = parse_snippet(source).unwrap_err();

        assert_eq!(code_of(&err), Some(ErrorCode::E003));
        // The offending element is pinpointed by a primary label.
        let labels = err.diagnostics()[0].labels();
        assert!(labels[0].is_primary());
        assert!(!labels[0].span().is_empty());
    }

    #[test]
    fn test_missing_geometry() {
        let source = r#"<React.Fragment key="color_001645"><path className="color"/></React.Fragment>"#;
        let err = parse_snippet(source).unwrap_err();

        assert_eq!(code_of(&err), Some(ErrorCode::E004));
    }

    #[test]
    fn test_unterminated_wrapper() {
        let source = r#"<React.Fragment key="color_001645"><path d="M0 0"/>"#;
        let err = parse_snippet(source).unwrap_err();

        assert_eq!(code_of(&err), Some(ErrorCode::E005));
        // Secondary label points back at the wrapper open tag.
        assert!(err.diagnostics()[0].labels().iter().any(|l| l.is_secondary()));
    }

    #[test]
    fn test_self_closing_wrapper_is_empty() {
        let parsed = parse_snippet(r#"<React.Fragment key="color_7b00ff"/>"#).unwrap();

        assert!(parsed.shapes().is_empty());
        assert_eq!(parsed.color().digits(), "7b00ff");
    }

    #[test]
    fn test_content_after_wrapper_is_ignored() {
        let source = "<React.Fragment key=\"color_001645\">\n</React.Fragment>\n);\n};\nexport default Color001645;\n";
        let parsed = parse_snippet(source).unwrap();

        assert!(parsed.shapes().is_empty());
    }

    proptest! {
        /// The parser is total: arbitrary input returns a result, never
        /// panics.
        #[test]
        fn test_parse_is_total(source in ".*") {
            let _ = parse_snippet(&source);
        }

        /// Rendered snippets always parse back to the same model.
        #[test]
        fn test_render_parse_round_trip(digits in "[0-9a-f]{6}", geometry in "[MLHVZz0-9,. -]{1,40}") {
            let snippet = ComponentSnippet::new(
                FillColor::from_digits(&digits).unwrap(),
                vec![Shape::new(ShapeKind::Path, geometry)],
            );

            let parsed = parse_snippet(&snippet.to_string()).expect("rendered snippet parses");
            prop_assert_eq!(parsed, snippet);
        }
    }
}
