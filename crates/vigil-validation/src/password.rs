//! Password complexity filters and strength measurement.

use serde::Serialize;
use std::fmt;

use crate::PasswordRules;

/// A named complexity rule counted toward a minimum-filters threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    /// Contains a lowercase letter.
    Lower,
    /// Contains an uppercase letter.
    Upper,
    /// Contains a digit.
    Digit,
    /// Contains a non-alphanumeric character.
    Special,
    /// Is at least eight characters long.
    Length,
}

impl Filter {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "lower" => Some(Self::Lower),
            "upper" => Some(Self::Upper),
            "digit" => Some(Self::Digit),
            "special" => Some(Self::Special),
            "length" => Some(Self::Length),
            _ => None,
        }
    }

    fn satisfied(self, value: &str) -> bool {
        match self {
            Self::Lower => value.chars().any(|c| c.is_lowercase()),
            Self::Upper => value.chars().any(|c| c.is_uppercase()),
            Self::Digit => value.chars().any(|c| c.is_ascii_digit()),
            Self::Special => value.chars().any(|c| !c.is_alphanumeric()),
            Self::Length => value.chars().count() >= 8,
        }
    }
}

/// Qualitative password strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthRating {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        };
        f.write_str(label)
    }
}

/// Result of a strength measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u32,
    pub rating: StrengthRating,
}

impl StrengthReport {
    fn from_score(score: u32) -> Self {
        let rating = match score {
            0..=19 => StrengthRating::VeryWeak,
            20..=39 => StrengthRating::Weak,
            40..=59 => StrengthRating::Fair,
            60..=79 => StrengthRating::Strong,
            _ => StrengthRating::VeryStrong,
        };
        Self { score, rating }
    }
}

/// Stateful password evaluator.
///
/// Filters accumulate through [`PasswordRules::add_filter`] until reset;
/// callers are expected to re-declare them for every validation pass.
#[derive(Debug, Default)]
pub struct PasswordEvaluator {
    filters: Vec<Filter>,
}

impl PasswordEvaluator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordRules for PasswordEvaluator {
    fn add_filter(&mut self, name: &str) -> bool {
        match Filter::parse(name) {
            Some(filter) => {
                // Duplicates are kept; each registration counts separately.
                self.filters.push(filter);
                true
            }
            None => false,
        }
    }

    fn reset_filters(&mut self) {
        self.filters.clear();
    }

    fn filter_count(&self) -> usize {
        self.filters.len()
    }

    fn meets_minimum_filters(&self, value: &str, threshold: u32) -> bool {
        let satisfied = self
            .filters
            .iter()
            .filter(|filter| filter.satisfied(value))
            .count() as u32;

        satisfied >= threshold
    }

    fn test_strength(&self, value: &str, probe: Option<&str>) -> StrengthReport {
        if value.is_empty() || probe == Some(value) {
            return StrengthReport::from_score(0);
        }

        let length = value.chars().count() as u32;
        let mut score = length.min(16) * 3;

        let classes = [Filter::Lower, Filter::Upper, Filter::Digit, Filter::Special]
            .iter()
            .filter(|class| class.satisfied(value))
            .count() as u32;
        score += classes * 8;

        if length >= 12 && classes >= 3 {
            score += 10;
        }

        StrengthReport::from_score(score)
    }
}
