//! Default implementations of the stateless rule primitives.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Rules;

// Numeric detection is deliberately stricter than str::parse, which accepts
// "inf" and "nan".
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());

/// Stateless rule evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRules;

impl Rules for DefaultRules {
    fn require(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }

    fn is_number(&self, value: &str) -> bool {
        NUMBER_REGEX.is_match(value.trim())
    }

    fn is_integer(&self, value: &str) -> bool {
        INTEGER_REGEX.is_match(value.trim())
    }

    fn is_string(&self, value: &str) -> bool {
        !value.is_empty() && !NUMBER_REGEX.is_match(value.trim())
    }

    fn is_regex(&self, value: &str) -> bool {
        Regex::new(value).is_ok()
    }

    fn min(&self, limit: i64, value: &str) -> bool {
        value.chars().count() as i64 >= limit
    }

    fn max(&self, limit: i64, value: &str) -> bool {
        value.chars().count() as i64 <= limit
    }

    fn contains(&self, needle: &str, value: &str) -> bool {
        value.contains(needle)
    }

    fn pattern(&self, pattern: &Regex, value: &str) -> bool {
        pattern.is_match(value)
    }

    fn equals(&self, value: &str, other: &str) -> bool {
        value == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        let rules = DefaultRules;
        assert!(rules.require("penguin"));
        assert!(rules.require("0"));
        assert!(!rules.require(""));
        assert!(!rules.require("   "));
    }

    #[test]
    fn test_numeric_predicates() {
        let rules = DefaultRules;
        assert!(rules.is_number("42"));
        assert!(rules.is_number("-3.25"));
        assert!(!rules.is_number("inf"));
        assert!(!rules.is_number("12abc"));

        assert!(rules.is_integer("42"));
        assert!(rules.is_integer("-7"));
        assert!(!rules.is_integer("3.5"));
        assert!(!rules.is_integer("seven"));
    }

    #[test]
    fn test_is_string() {
        let rules = DefaultRules;
        assert!(rules.is_string("penguin"));
        assert!(!rules.is_string("42"));
        assert!(!rules.is_string(""));
    }

    #[test]
    fn test_is_regex() {
        let rules = DefaultRules;
        assert!(rules.is_regex(r"^\d{3}$"));
        assert!(!rules.is_regex(r"([unclosed"));
    }

    #[test]
    fn test_length_bounds() {
        let rules = DefaultRules;
        assert!(rules.min(3, "abc"));
        assert!(rules.min(3, "abcd"));
        assert!(!rules.min(3, "ab"));

        assert!(rules.max(3, "abc"));
        assert!(rules.max(3, "ab"));
        assert!(!rules.max(3, "abcd"));

        // Length counts characters, not bytes.
        assert!(rules.max(3, "äöü"));
    }

    #[test]
    fn test_contains_and_equals() {
        let rules = DefaultRules;
        assert!(rules.contains("gui", "penguin"));
        assert!(!rules.contains("gnu", "penguin"));

        assert!(rules.equals("same", "same"));
        assert!(!rules.equals("same", "other"));
    }

    #[test]
    fn test_pattern() {
        let rules = DefaultRules;
        let re = Regex::new(r"^\d{3}-\d{4}$").unwrap();
        assert!(rules.pattern(&re, "555-1234"));
        assert!(!rules.pattern(&re, "5551234"));
    }
}
