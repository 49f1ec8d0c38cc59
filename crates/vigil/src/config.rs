// File: src/config.rs
// Purpose: Engine configuration and deep-merge of user overrides

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

fn default_prefix() -> String {
    "data-vigil".to_string()
}

fn default_autostart() -> bool {
    true
}

/// Engine configuration, immutable after construction.
///
/// Built by deep-merging user overrides onto the defaults; see
/// [`FormConfig::with_overrides`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Attribute prefix marking managed fields and naming their triggers.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Wire listeners immediately at construction.
    #[serde(default = "default_autostart")]
    pub autostart: bool,

    /// Restrict or reorder the evaluated triggers. `None` means the full
    /// standard set. Names are resolved against the trigger registry at
    /// construction, so a typo fails fast instead of silently skipping.
    #[serde(default)]
    pub triggers: Option<Vec<String>>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            autostart: default_autostart(),
            triggers: None,
        }
    }
}

impl FormConfig {
    /// Build a config by layering `overrides` onto the defaults.
    ///
    /// `Value::Null` means "no overrides". Unknown keys are tolerated and
    /// ignored during deserialization.
    pub fn with_overrides(overrides: &Value) -> Result<Self, Error> {
        if overrides.is_null() {
            return Ok(Self::default());
        }

        let mut merged = serde_json::to_value(Self::default())?;
        merge_values(&mut merged, overrides);
        Ok(serde_json::from_value(merged)?)
    }
}

/// Structural deep merge of `overwrite` into `primary`.
///
/// For every key in `overwrite`: when both sides hold an object the merge
/// recurses (creating an empty object on the primary side if it was absent
/// or null); any other incoming value replaces the existing one outright —
/// scalars, arrays and nulls are copied in, never combined.
pub fn merge_values(primary: &mut Value, overwrite: &Value) {
    match overwrite {
        Value::Object(incoming) => {
            if !primary.is_object() {
                *primary = Value::Object(Map::new());
            }

            if let Value::Object(existing) = primary {
                for (key, value) in incoming {
                    if value.is_object() {
                        let slot = existing.entry(key.clone()).or_insert(Value::Null);
                        merge_values(slot, value);
                    } else {
                        existing.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        other => {
            *primary = other.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_merge_preserves_default_only_leaves() {
        let mut primary = json!({"a": 1, "nested": {"keep": true, "replace": 1}});
        let overwrite = json!({"nested": {"replace": 2}});

        merge_values(&mut primary, &overwrite);

        assert_eq!(
            primary,
            json!({"a": 1, "nested": {"keep": true, "replace": 2}})
        );
    }

    #[test]
    fn test_merge_contains_every_override_leaf() {
        let mut primary = json!({});
        let overwrite = json!({"x": {"y": {"z": 3}}, "flat": "v"});

        merge_values(&mut primary, &overwrite);

        assert_eq!(primary, json!({"x": {"y": {"z": 3}}, "flat": "v"}));
    }

    #[test]
    fn test_merge_replaces_non_mapping_values_outright() {
        let mut primary = json!({"list": [1, 2, 3], "scalar": "old"});
        let overwrite = json!({"list": [9], "scalar": null});

        merge_values(&mut primary, &overwrite);

        // Arrays are replaced, never concatenated; null is copied in.
        assert_eq!(primary, json!({"list": [9], "scalar": null}));
    }

    #[test]
    fn test_merge_creates_mapping_over_null() {
        let mut primary = json!({"slot": null});
        let overwrite = json!({"slot": {"inner": 1}});

        merge_values(&mut primary, &overwrite);

        assert_eq!(primary, json!({"slot": {"inner": 1}}));
    }

    #[test]
    fn test_merge_does_not_mutate_overrides() {
        let mut primary = json!({"a": 1});
        let overwrite = json!({"b": {"c": 2}});
        let snapshot = overwrite.clone();

        merge_values(&mut primary, &overwrite);

        assert_eq!(overwrite, snapshot);
    }

    #[test]
    fn test_config_defaults() {
        let config = FormConfig::with_overrides(&Value::Null).unwrap();
        assert_eq!(config.prefix, "data-vigil");
        assert!(config.autostart);
        assert!(config.triggers.is_none());
    }

    #[test]
    fn test_config_overrides() {
        let config =
            FormConfig::with_overrides(&json!({"prefix": "data-check", "autostart": false}))
                .unwrap();
        assert_eq!(config.prefix, "data-check");
        assert!(!config.autostart);
    }

    #[test]
    fn test_config_tolerates_unknown_keys() {
        let config = FormConfig::with_overrides(&json!({"theme": "dark"})).unwrap();
        assert_eq!(config.prefix, "data-vigil");
    }
}
