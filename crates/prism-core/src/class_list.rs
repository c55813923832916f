//! Whitespace-delimited class list matching.
//!
//! Class attributes hold one or more class names separated by whitespace.
//! Matching is exact per token: `st1` does not match an element whose class
//! list is `"st12"`.

/// Iterate the class tokens of a class attribute value.
pub fn tokens(class_attr: &str) -> impl Iterator<Item = &str> {
    class_attr.split_whitespace()
}

/// Returns `true` if `class_attr` contains `name` as an exact
/// whitespace-delimited token.
pub fn contains_token(class_attr: &str, name: &str) -> bool {
    tokens(class_attr).any(|token| token == name)
}
