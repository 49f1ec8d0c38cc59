// File: src/handlers.rs
// Purpose: Pass/fail/strength handler surface

use tracing::info;
use vigil_validation::StrengthReport;

use crate::document::FieldSnapshot;

/// Callback invoked with the field that passed or failed a validation pass.
pub type FieldHandler = Box<dyn Fn(&FieldSnapshot)>;

/// Callback invoked with the result of a strength measurement.
pub type StrengthHandler = Box<dyn Fn(&StrengthReport)>;

/// Handlers for the password pipeline.
pub struct PasswordHandlers {
    pub pass: FieldHandler,
    pub fail: FieldHandler,
    pub strength: StrengthHandler,
}

impl Default for PasswordHandlers {
    fn default() -> Self {
        Self {
            pass: Box::new(|field| {
                info!(field = field.id.as_deref().unwrap_or("?"), "password passed enough filters");
            }),
            fail: Box::new(|field| {
                info!(field = field.id.as_deref().unwrap_or("?"), "password is not good enough");
            }),
            strength: Box::new(|report| {
                info!(score = report.score, rating = %report.rating, "password strength measured");
            }),
        }
    }
}

/// The full handler set. Defaults log through `tracing`; each member is
/// replaced wholesale by the builder methods, never combined.
pub struct Handlers {
    pub pass: FieldHandler,
    pub fail: FieldHandler,
    pub password: PasswordHandlers,
}

impl Default for Handlers {
    fn default() -> Self {
        Self {
            pass: Box::new(|field| {
                info!(field = field.id.as_deref().unwrap_or("?"), "field passed the restrictions");
            }),
            fail: Box::new(|field| {
                info!(field = field.id.as_deref().unwrap_or("?"), "field did not meet the restrictions");
            }),
            password: PasswordHandlers::default(),
        }
    }
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pass(mut self, handler: impl Fn(&FieldSnapshot) + 'static) -> Self {
        self.pass = Box::new(handler);
        self
    }

    pub fn on_fail(mut self, handler: impl Fn(&FieldSnapshot) + 'static) -> Self {
        self.fail = Box::new(handler);
        self
    }

    pub fn on_password_pass(mut self, handler: impl Fn(&FieldSnapshot) + 'static) -> Self {
        self.password.pass = Box::new(handler);
        self
    }

    pub fn on_password_fail(mut self, handler: impl Fn(&FieldSnapshot) + 'static) -> Self {
        self.password.fail = Box::new(handler);
        self
    }

    pub fn on_strength(mut self, handler: impl Fn(&StrengthReport) + 'static) -> Self {
        self.password.strength = Box::new(handler);
        self
    }
}
