// File: src/password.rs
// Purpose: Password pipeline: strength measurement and filter threshold

use tracing::warn;
use vigil_validation::PasswordRules;

use crate::binder::KeyCode;
use crate::controller::FormController;
use crate::document::ElementId;
use crate::error::Error;

/// Scoped filter registration: clears the evaluator's filters when dropped,
/// so no registration survives the pass — not even across a handler panic.
struct FilterGuard<'a> {
    password: &'a mut dyn PasswordRules,
}

impl<'a> FilterGuard<'a> {
    fn new(password: &'a mut dyn PasswordRules) -> Self {
        Self { password }
    }

    fn add_filter(&mut self, name: &str) -> bool {
        self.password.add_filter(name)
    }

    fn meets_minimum_filters(&self, value: &str, threshold: u32) -> bool {
        self.password.meets_minimum_filters(value, threshold)
    }
}

impl Drop for FilterGuard<'_> {
    fn drop(&mut self) {
        self.password.reset_filters();
    }
}

impl FormController {
    /// Run the multi-stage password pipeline for `element`.
    ///
    /// Reads `{prefix}-filters` (space-separated names, absent means none)
    /// and `{prefix}-meets` (integer threshold, absent or malformed means
    /// zero). When `{prefix}-strength` is present, strength is measured
    /// first; it never gates pass/fail. Filters are re-declared from
    /// attributes on every pass and cleared afterwards.
    pub fn validate_password(
        &mut self,
        element: ElementId,
        keypress: Option<KeyCode>,
    ) -> Result<(), Error> {
        let prefix = self.config.prefix.clone();

        let filters: Vec<String> = self
            .document
            .attr(element, &format!("{prefix}-filters"))
            .map(|raw| raw.split_whitespace().map(String::from).collect())
            .unwrap_or_default();

        let min_filters: u32 = self
            .document
            .attr(element, &format!("{prefix}-meets"))
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);

        if self.document.has_attr(element, &format!("{prefix}-strength")) {
            self.test_password_strength(element, keypress);
        }

        let snapshot = self.document.snapshot(element);
        let handlers = &self.handlers;
        let mut guard = FilterGuard::new(self.password.as_mut());

        for name in &filters {
            if !guard.add_filter(name) {
                warn!(filter = %name, "skipping unrecognized password filter");
            }
        }

        if guard.meets_minimum_filters(&snapshot.value, min_filters) {
            (handlers.password.pass)(&snapshot);
        } else {
            (handlers.password.fail)(&snapshot);
        }

        Ok(())
    }

    /// Measure the field's strength and forward the report to the strength
    /// handler. Observational only: the measurement completes and the
    /// handler returns before the pipeline continues.
    pub fn test_password_strength(&self, element: ElementId, _keypress: Option<KeyCode>) {
        let report = self.password.test_strength(self.document.value(element), None);
        (self.handlers.password.strength)(&report);
    }
}
