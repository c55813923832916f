//! Scanned markup element model.

use crate::class_list;

/// A markup element scanned from an SVG document: a tag name plus its
/// attributes in source order.
///
/// Only the open tag is modeled. The pipeline never needs element content;
/// fragments are rebuilt from the tag and its attributes alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    /// Create an element with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Create an element from a tag name and its attributes in source order.
    pub fn from_parts(name: impl Into<String>, attributes: Vec<(String, String)>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// Builder-style attribute addition, mainly for tests and fixtures.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// The element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's attributes in source order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// The whitespace-delimited tokens of the `class` attribute.
    pub fn class_tokens(&self) -> impl Iterator<Item = &str> {
        class_list::tokens(self.attribute("class").unwrap_or_default())
    }

    /// Returns `true` if the `class` attribute contains `name` as an exact
    /// token.
    pub fn has_class(&self, name: &str) -> bool {
        class_list::contains_token(self.attribute("class").unwrap_or_default(), name)
    }

    /// Replace the value of `name`, appending the attribute if absent.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(attr, _)| attr == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let element = Element::new("path")
            .with_attribute("class", "st3")
            .with_attribute("d", "M0 0L1 1");

        assert_eq!(element.name(), "path");
        assert_eq!(element.attribute("d"), Some("M0 0L1 1"));
        assert_eq!(element.attribute("points"), None);
    }

    #[test]
    fn test_class_tokens() {
        let element = Element::new("polygon").with_attribute("class", "st1 st12");

        let tokens: Vec<_> = element.class_tokens().collect();
        assert_eq!(tokens, vec!["st1", "st12"]);
        assert!(element.has_class("st1"));
        assert!(!element.has_class("st2"));
    }

    #[test]
    fn test_class_tokens_without_class_attribute() {
        let element = Element::new("path");
        assert_eq!(element.class_tokens().count(), 0);
        assert!(!element.has_class("st1"));
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut element = Element::new("path")
            .with_attribute("class", "st3")
            .with_attribute("d", "M0 0");

        element.set_attribute("class", "color");

        assert_eq!(element.attribute("class"), Some("color"));
        // Replacement keeps the attribute's original position.
        assert_eq!(element.attributes()[0].0, "class");
    }

    #[test]
    fn test_set_attribute_appends_when_absent() {
        let mut element = Element::new("path");
        element.set_attribute("class", "color");
        assert_eq!(element.attribute("class"), Some("color"));
    }
}
