// File: src/triggers.rs
// Purpose: Trigger registry and per-element trigger processing

use regex::Regex;
use tracing::warn;
use vigil_validation::Rules;

use crate::document::{ElementId, FormDocument};
use crate::error::Error;

/// A trigger identifier that maps to an attribute suffix.
pub trait TriggerName {
    fn name(&self) -> &'static str;
}

/// Value-only triggers: the validator call takes just the field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorTrigger {
    Require,
    Number,
    Integer,
    Text,
    Regex,
}

impl ComparatorTrigger {
    pub fn evaluate(&self, rules: &dyn Rules, value: &str) -> bool {
        match self {
            Self::Require => rules.require(value),
            Self::Number => rules.is_number(value),
            Self::Integer => rules.is_integer(value),
            Self::Text => rules.is_string(value),
            Self::Regex => rules.is_regex(value),
        }
    }
}

impl TriggerName for ComparatorTrigger {
    fn name(&self) -> &'static str {
        match self {
            Self::Require => "require",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Text => "string",
            Self::Regex => "regex",
        }
    }
}

/// Parameterized triggers: the validator call takes the attribute value as a
/// rule parameter plus the field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTrigger {
    Min,
    Max,
    Contains,
    Pattern,
}

impl RuleTrigger {
    pub fn evaluate(&self, rules: &dyn Rules, raw: &str, value: &str) -> Result<bool, Error> {
        match self {
            Self::Min => Ok(match integer_param(raw) {
                Some(limit) => rules.min(limit, value),
                None => {
                    warn!(param = %raw, "min trigger needs an integer parameter");
                    false
                }
            }),
            Self::Max => Ok(match integer_param(raw) {
                Some(limit) => rules.max(limit, value),
                None => {
                    warn!(param = %raw, "max trigger needs an integer parameter");
                    false
                }
            }),
            Self::Contains => Ok(rules.contains(raw, value)),
            Self::Pattern => {
                let pattern = Regex::new(raw).map_err(|source| Error::InvalidPattern {
                    pattern: raw.to_string(),
                    source,
                })?;
                Ok(rules.pattern(&pattern, value))
            }
        }
    }
}

impl TriggerName for RuleTrigger {
    fn name(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Contains => "contains",
            Self::Pattern => "pattern",
        }
    }
}

/// Triggers implemented by the engine itself: cross-field comparison and
/// cascading revalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTrigger {
    Match,
    Trigger,
}

impl TriggerName for FormTrigger {
    fn name(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Trigger => "trigger",
        }
    }
}

/// Any trigger, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Comparator(ComparatorTrigger),
    Rule(RuleTrigger),
    Form(FormTrigger),
}

impl Trigger {
    /// Resolve a trigger name. Unknown names fail fast instead of turning
    /// into a missed validation later.
    pub fn parse(name: &str) -> Result<Self, Error> {
        match name {
            "require" => Ok(Self::Comparator(ComparatorTrigger::Require)),
            "number" => Ok(Self::Comparator(ComparatorTrigger::Number)),
            "integer" => Ok(Self::Comparator(ComparatorTrigger::Integer)),
            "string" => Ok(Self::Comparator(ComparatorTrigger::Text)),
            "regex" => Ok(Self::Comparator(ComparatorTrigger::Regex)),
            "min" => Ok(Self::Rule(RuleTrigger::Min)),
            "max" => Ok(Self::Rule(RuleTrigger::Max)),
            "contains" => Ok(Self::Rule(RuleTrigger::Contains)),
            "pattern" => Ok(Self::Rule(RuleTrigger::Pattern)),
            "match" => Ok(Self::Form(FormTrigger::Match)),
            "trigger" => Ok(Self::Form(FormTrigger::Trigger)),
            other => Err(Error::UnknownTrigger(other.to_string())),
        }
    }
}

/// The three trigger groups a field validation pass runs, in order.
///
/// Resolved once at construction so a misspelled trigger name surfaces as
/// [`Error::UnknownTrigger`] before any keystroke arrives.
#[derive(Debug, Clone)]
pub struct TriggerSet {
    pub(crate) comparators: Vec<ComparatorTrigger>,
    pub(crate) rules: Vec<RuleTrigger>,
    pub(crate) form: Vec<FormTrigger>,
}

impl TriggerSet {
    /// The full standard registry.
    pub fn standard() -> Self {
        Self {
            comparators: vec![
                ComparatorTrigger::Require,
                ComparatorTrigger::Number,
                ComparatorTrigger::Integer,
                ComparatorTrigger::Text,
                ComparatorTrigger::Regex,
            ],
            rules: vec![
                RuleTrigger::Min,
                RuleTrigger::Max,
                RuleTrigger::Contains,
                RuleTrigger::Pattern,
            ],
            form: vec![FormTrigger::Match, FormTrigger::Trigger],
        }
    }

    /// Build a set from explicit names, partitioned into their groups.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, Error> {
        let mut set = Self {
            comparators: Vec::new(),
            rules: Vec::new(),
            form: Vec::new(),
        };

        for name in names {
            match Trigger::parse(name.as_ref())? {
                Trigger::Comparator(trigger) => set.comparators.push(trigger),
                Trigger::Rule(trigger) => set.rules.push(trigger),
                Trigger::Form(trigger) => set.form.push(trigger),
            }
        }

        Ok(set)
    }
}

/// Run `evaluate` once per trigger whose attribute is present and non-empty
/// on `element`.
///
/// The attribute consulted for a trigger is `{prefix}-{name}`. No
/// aggregation happens here; callers fold the outcomes themselves, which
/// lets the same mechanism serve all three trigger categories.
pub fn process_triggers<T, F>(
    doc: &FormDocument,
    element: ElementId,
    prefix: &str,
    triggers: &[T],
    mut evaluate: F,
) -> Result<(), Error>
where
    T: TriggerName,
    F: FnMut(&T, &str, &str) -> Result<(), Error>,
{
    for trigger in triggers {
        let attr_name = format!("{}-{}", prefix, trigger.name());
        match doc.attr(element, &attr_name) {
            Some(raw) if !raw.is_empty() => evaluate(trigger, raw, doc.value(element))?,
            _ => {}
        }
    }

    Ok(())
}

fn integer_param(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;
    use vigil_validation::DefaultRules;

    #[test]
    fn test_parse_resolves_every_standard_name() {
        for name in [
            "require", "number", "integer", "string", "regex", "min", "max", "contains",
            "pattern", "match", "trigger",
        ] {
            assert!(Trigger::parse(name).is_ok(), "{name} should resolve");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = Trigger::parse("telekinesis").unwrap_err();
        assert!(matches!(err, Error::UnknownTrigger(name) if name == "telekinesis"));
    }

    #[test]
    fn test_from_names_partitions_groups() {
        let set = TriggerSet::from_names(&["min", "require", "match"]).unwrap();
        assert_eq!(set.comparators, vec![ComparatorTrigger::Require]);
        assert_eq!(set.rules, vec![RuleTrigger::Min]);
        assert_eq!(set.form, vec![FormTrigger::Match]);
    }

    #[test]
    fn test_from_names_fails_fast() {
        assert!(TriggerSet::from_names(&["min", "mxa"]).is_err());
    }

    #[test]
    fn test_process_skips_absent_and_empty_attributes() {
        let mut doc = FormDocument::new();
        let form = doc.append(None, Element::form());
        let input = doc.append(
            Some(form),
            Element::input("text")
                .with_attr("data-vigil-min", "3")
                .with_attr("data-vigil-max", "")
                .with_value("abcd"),
        );

        let mut seen = Vec::new();
        process_triggers(
            &doc,
            input,
            "data-vigil",
            &[RuleTrigger::Min, RuleTrigger::Max, RuleTrigger::Contains],
            |trigger, raw, value| {
                seen.push((trigger.name(), raw.to_string(), value.to_string()));
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(seen, vec![("min", "3".to_string(), "abcd".to_string())]);
    }

    #[test]
    fn test_rule_trigger_coercion() {
        let rules = DefaultRules;
        assert!(RuleTrigger::Min.evaluate(&rules, "3", "abcd").unwrap());
        assert!(!RuleTrigger::Min.evaluate(&rules, "5", "abcd").unwrap());

        // Non-integer parameter for a length bound fails the trigger.
        assert!(!RuleTrigger::Min.evaluate(&rules, "three", "abcd").unwrap());

        assert!(RuleTrigger::Contains
            .evaluate(&rules, "gui", "penguin")
            .unwrap());
    }

    #[test]
    fn test_pattern_trigger_compiles_parameter() {
        let rules = DefaultRules;
        assert!(RuleTrigger::Pattern
            .evaluate(&rules, r"^\d+$", "12345")
            .unwrap());

        let err = RuleTrigger::Pattern
            .evaluate(&rules, r"([open", "12345")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_comparator_aliases() {
        let rules = DefaultRules;
        assert!(ComparatorTrigger::Number.evaluate(&rules, "12.5"));
        assert!(ComparatorTrigger::Integer.evaluate(&rules, "12"));
        assert!(ComparatorTrigger::Text.evaluate(&rules, "penguin"));
        assert!(ComparatorTrigger::Regex.evaluate(&rules, r"^\w+$"));
        assert!(!ComparatorTrigger::Require.evaluate(&rules, " "));
    }
}
