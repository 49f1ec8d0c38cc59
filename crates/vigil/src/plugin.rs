// File: src/plugin.rs
// Purpose: Installable "form" extension on the validator facade

use vigil_validation::Validly;

use crate::controller::{FormController, FormOptions};
use crate::document::{ElementId, FormDocument};
use crate::error::Error;

/// Name this engine registers under on the validator facade.
pub const PLUGIN_NAME: &str = "form";

/// Extension point exposing the engine on a validator.
///
/// Consumes the validator: its rule and password evaluators move into the
/// returned controller, so filter state is never shared between
/// controllers.
pub trait FormPlugin {
    fn form(
        self,
        document: FormDocument,
        root: ElementId,
        options: FormOptions,
    ) -> Result<FormController, Error>;
}

impl FormPlugin for Validly {
    fn form(
        self,
        document: FormDocument,
        root: ElementId,
        options: FormOptions,
    ) -> Result<FormController, Error> {
        let Validly { rules, password } = self;
        FormController::new(document, root, Box::new(rules), Box::new(password), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;
    use serde_json::json;

    #[test]
    fn test_facade_constructs_a_controller() {
        let mut doc = FormDocument::new();
        let form = doc.append(None, Element::form());
        doc.append(Some(form), Element::input("text").with_marker("data-vigil"));

        let controller = Validly::new()
            .form(doc, form, FormOptions::new().settings(json!({"autostart": false})))
            .unwrap();

        assert_eq!(controller.nodes().len(), 0); // no autostart, no load yet
    }

    #[test]
    fn test_facade_rejects_non_form_root() {
        let mut doc = FormDocument::new();
        let div = doc.append(None, Element::new("div"));

        let err = Validly::new()
            .form(doc, div, FormOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::NotAForm));
    }

    #[test]
    fn test_plugin_name() {
        assert_eq!(PLUGIN_NAME, "form");
    }
}
