//! Fill color handling for the prism pipeline.
//!
//! Fragments, snippets, and the aggregate module are all keyed by the fill
//! color declared in the source image's style block, so [`FillColor`] is the
//! identity that threads through every stage.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a fill color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fill color '{value}': expected '#' followed by 6 hex digits")]
pub struct ColorParseError {
    value: String,
}

impl ColorParseError {
    fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A 6-hex-digit RGB fill color.
///
/// Colors are normalized on parse, so `#7B00FF` and `#7b00ff` compare equal
/// and produce the same file names and keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FillColor {
    rgb: [u8; 3],
}

impl FillColor {
    /// Create a fill color from its RGB components.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            rgb: [red, green, blue],
        }
    }

    /// Parse the bare hex digits of a color, without a leading `#`.
    ///
    /// This is the form used in file names (`color_7b00ff.svg`) and fragment
    /// keys (`color_7b00ff`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] unless `digits` is exactly 6 hex digits.
    pub fn from_digits(digits: &str) -> Result<Self, ColorParseError> {
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(digits));
        }

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).expect("validated hex digits parse as u8")
        };

        Ok(Self {
            rgb: [component(0..2), component(2..4), component(4..6)],
        })
    }

    /// The bare lowercase hex digits, as used in file names and keys.
    pub fn digits(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// The uppercase hex digits, as used in component identifiers.
    pub fn digits_upper(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

impl FromStr for FillColor {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::new(value))?;
        Self::from_digits(digits).map_err(|_| ColorParseError::new(value))
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase() {
        let color: FillColor = "#001645".parse().unwrap();
        assert_eq!(color, FillColor::new(0x00, 0x16, 0x45));
    }

    #[test]
    fn test_parse_normalizes_case() {
        let upper: FillColor = "#7B00FF".parse().unwrap();
        let lower: FillColor = "#7b00ff".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "#7b00ff");
    }

    #[test]
    fn test_parse_requires_hash() {
        assert!("7b00ff".parse::<FillColor>().is_err());
    }

    #[test]
    fn test_from_digits_rejects_wrong_length() {
        assert!(FillColor::from_digits("fff").is_err());
        assert!(FillColor::from_digits("1234567").is_err());
        assert!(FillColor::from_digits("").is_err());
    }

    #[test]
    fn test_from_digits_rejects_non_hex() {
        assert!(FillColor::from_digits("00164z").is_err());
    }

    #[test]
    fn test_digits_round_trip() {
        let color = FillColor::from_digits("7b00ff").unwrap();
        assert_eq!(color.digits(), "7b00ff");
        assert_eq!(color.digits_upper(), "7B00FF");
    }
}
