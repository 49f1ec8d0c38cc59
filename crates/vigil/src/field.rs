// File: src/field.rs
// Purpose: Per-field validation pass over the three trigger groups

use crate::binder::KeyCode;
use crate::controller::FormController;
use crate::document::ElementId;
use crate::error::Error;
use crate::triggers::{process_triggers, FormTrigger};

impl FormController {
    /// Run one validation pass over `element`.
    ///
    /// The pass is linear: comparator triggers, then parameterized rule
    /// triggers, then form-level triggers, each outcome ANDed into a single
    /// verdict. Password elements (without a `-confirm` marker) are handed
    /// to the password pipeline instead of the plain pass/fail handlers.
    ///
    /// Returns the verdict over the non-password triggers.
    pub fn validate_field(
        &mut self,
        element: ElementId,
        keypress: Option<KeyCode>,
    ) -> Result<bool, Error> {
        let prefix = self.config.prefix.clone();
        let mut passes = true;
        let mut cascade: Vec<String> = Vec::new();

        {
            let doc = &self.document;
            let rules = self.rules.as_ref();
            let triggers = &self.triggers;

            process_triggers(
                doc,
                element,
                &prefix,
                &triggers.comparators,
                |trigger, _raw, value| {
                    passes = passes && trigger.evaluate(rules, value);
                    Ok(())
                },
            )?;

            process_triggers(
                doc,
                element,
                &prefix,
                &triggers.rules,
                |trigger, raw, value| {
                    passes = passes && trigger.evaluate(rules, raw, value)?;
                    Ok(())
                },
            )?;

            process_triggers(
                doc,
                element,
                &prefix,
                &triggers.form,
                |trigger, raw, value| {
                    match trigger {
                        FormTrigger::Match => {
                            // This field's value first, the matched field's
                            // live value second.
                            let other = doc
                                .element_by_id(raw)
                                .ok_or_else(|| Error::UnknownElement(raw.to_string()))?;
                            passes = passes && rules.equals(value, doc.value(other));
                        }
                        FormTrigger::Trigger => {
                            // Side-effecting action, not a constraint; the
                            // dispatch happens after the group so the borrow
                            // of the document has ended.
                            cascade.extend(raw.split_whitespace().map(String::from));
                        }
                    }
                    Ok(())
                },
            )?;
        }

        // Cascading revalidation. A cycle back to this field is the caller's
        // responsibility to avoid; the engine does not detect it.
        for id in cascade {
            let target = self
                .document
                .element_by_id(&id)
                .ok_or_else(|| Error::UnknownElement(id.clone()))?;
            self.keyup(target, keypress.unwrap_or(0))?;
        }

        let confirm = format!("{}-confirm", prefix);
        let is_password = self
            .document
            .get(element)
            .is_some_and(|e| e.is_password());

        if is_password && !self.document.has_attr(element, &confirm) {
            // Password handling fully supersedes the plain handlers.
            self.validate_password(element, keypress)?;
        } else {
            let snapshot = self.document.snapshot(element);
            if passes {
                (self.handlers.pass)(&snapshot);
            } else {
                (self.handlers.fail)(&snapshot);
            }
        }

        Ok(passes)
    }
}
