//! Vigil Validation
//!
//! Rule primitives consumed by the Vigil form engine. The engine talks to
//! these through the [`Rules`] and [`PasswordRules`] traits so that any
//! evaluator can be injected; [`Validly`] bundles the default
//! implementations of both.

use regex::Regex;

pub mod password;
pub mod rules;

pub use password::{PasswordEvaluator, StrengthRating, StrengthReport};
pub use rules::DefaultRules;

/// Stateless rule evaluation contract.
///
/// Value-only predicates take just the field's current value. Parameterized
/// predicates additionally take a rule parameter read from a field attribute.
pub trait Rules {
    /// The value is present (non-empty after trimming whitespace).
    fn require(&self, value: &str) -> bool;

    /// The value reads as a number (integer or decimal).
    fn is_number(&self, value: &str) -> bool;

    /// The value reads as an integer.
    fn is_integer(&self, value: &str) -> bool;

    /// The value is non-empty text that does not read as a number.
    fn is_string(&self, value: &str) -> bool;

    /// The value compiles as a regular expression.
    fn is_regex(&self, value: &str) -> bool;

    /// The value is at least `limit` characters long.
    fn min(&self, limit: i64, value: &str) -> bool;

    /// The value is at most `limit` characters long.
    fn max(&self, limit: i64, value: &str) -> bool;

    /// The value contains `needle` as a substring.
    fn contains(&self, needle: &str, value: &str) -> bool;

    /// The value matches the compiled pattern.
    fn pattern(&self, pattern: &Regex, value: &str) -> bool;

    /// The two values are equal.
    fn equals(&self, value: &str, other: &str) -> bool;
}

/// Stateful password evaluation contract.
///
/// Filters are registered by name, consulted as a set, and cleared between
/// validation passes. Strength measurement is observational and does not
/// touch filter state.
pub trait PasswordRules {
    /// Register a named complexity filter. Returns `false` when the name is
    /// not recognized; the filter set is left unchanged in that case.
    fn add_filter(&mut self, name: &str) -> bool;

    /// Clear every registered filter.
    fn reset_filters(&mut self);

    /// Number of currently registered filters.
    fn filter_count(&self) -> usize;

    /// Whether `value` satisfies at least `threshold` of the registered
    /// filters. A threshold of zero always passes.
    fn meets_minimum_filters(&self, value: &str, threshold: u32) -> bool;

    /// Measure password quality. `probe` is an optional known-bad candidate
    /// (for example the account name) that zeroes the score when it equals
    /// the value.
    fn test_strength(&self, value: &str, probe: Option<&str>) -> StrengthReport;
}

/// Default evaluator bundle: stateless rules plus a password evaluator.
#[derive(Debug, Default)]
pub struct Validly {
    pub rules: DefaultRules,
    pub password: PasswordEvaluator,
}

impl Validly {
    pub fn new() -> Self {
        Self::default()
    }
}
