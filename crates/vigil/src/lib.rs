// Vigil - attribute-driven live form validation
// Declarative rules on form elements, re-validated on every keystroke

pub mod binder;
pub mod config;
pub mod controller;
pub mod discovery;
pub mod document;
pub mod error;
pub mod field;
pub mod handlers;
pub mod password;
pub mod plugin;
pub mod triggers;

// Re-export the engine surface
pub use binder::KeyCode;
pub use config::{merge_values, FormConfig};
pub use controller::{FormController, FormOptions};
pub use discovery::discover;
pub use document::{Element, ElementId, FieldSnapshot, FormDocument};
pub use error::Error;
pub use handlers::{FieldHandler, Handlers, PasswordHandlers, StrengthHandler};
pub use plugin::{FormPlugin, PLUGIN_NAME};
pub use triggers::{ComparatorTrigger, FormTrigger, RuleTrigger, Trigger, TriggerSet};

// Re-export the default evaluators for convenience
pub use vigil_validation::{
    DefaultRules, PasswordEvaluator, PasswordRules, Rules, StrengthRating, StrengthReport, Validly,
};
