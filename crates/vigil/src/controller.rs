// File: src/controller.rs
// Purpose: Top-level form controller: construction, load/start/run_all

use serde_json::Value;
use tracing::debug;
use vigil_validation::{PasswordRules, Rules};

use crate::config::FormConfig;
use crate::discovery::discover;
use crate::document::{ElementId, FormDocument};
use crate::error::Error;
use crate::handlers::Handlers;
use crate::triggers::TriggerSet;

/// Construction options: config overrides plus the handler set.
pub struct FormOptions {
    /// JSON overrides deep-merged onto [`FormConfig`] defaults. `Null`
    /// means no overrides.
    pub settings: Value,
    pub handlers: Handlers,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            settings: Value::Null,
            handlers: Handlers::default(),
        }
    }
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }

    pub fn handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = handlers;
        self
    }
}

/// The engine's external contract: owns the bound document, the injected
/// rule evaluators, and the set of managed nodes.
pub struct FormController {
    pub(crate) document: FormDocument,
    pub(crate) root: ElementId,
    pub(crate) config: FormConfig,
    pub(crate) handlers: Handlers,
    pub(crate) rules: Box<dyn Rules>,
    pub(crate) password: Box<dyn PasswordRules>,
    pub(crate) triggers: TriggerSet,
    pub(crate) nodes: Vec<ElementId>,
    pub(crate) bindings: Vec<ElementId>,
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("document", &self.document)
            .field("root", &self.root)
            .field("config", &self.config)
            .field("triggers", &self.triggers)
            .field("nodes", &self.nodes)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl FormController {
    /// Bind the engine to `root` inside `document`.
    ///
    /// The rule evaluators are constructor-injected and owned by this
    /// controller; nothing is shared across controllers. Fails with
    /// [`Error::NotAForm`] unless `root` is a form element. When
    /// `autostart` is left at its default of `true`, listeners are wired
    /// before this returns.
    pub fn new(
        document: FormDocument,
        root: ElementId,
        rules: Box<dyn Rules>,
        password: Box<dyn PasswordRules>,
        options: FormOptions,
    ) -> Result<Self, Error> {
        match document.get(root) {
            Some(element) if element.is_form() => {}
            _ => return Err(Error::NotAForm),
        }

        let config = FormConfig::with_overrides(&options.settings)?;
        let triggers = match &config.triggers {
            Some(names) => TriggerSet::from_names(names)?,
            None => TriggerSet::standard(),
        };

        let mut controller = Self {
            document,
            root,
            config,
            handlers: options.handlers,
            rules,
            password,
            triggers,
            nodes: Vec::new(),
            bindings: Vec::new(),
        };

        if controller.config.autostart {
            controller.start()?;
        }

        Ok(controller)
    }

    /// Re-run field discovery and replace the managed node set wholesale.
    pub fn load(&mut self) {
        self.nodes = discover(&self.document, self.root, &self.config.prefix);
        debug!(count = self.nodes.len(), "discovered managed fields");
    }

    /// Discover fields and wire a listener on each. Does not validate.
    pub fn start(&mut self) -> Result<(), Error> {
        self.load();
        for node in self.nodes.clone() {
            self.manage(node)?;
        }
        Ok(())
    }

    /// Discover fields and validate each one immediately, without needing a
    /// keystroke or any listeners. Useful for server-rendered values.
    pub fn run_all(&mut self) -> Result<(), Error> {
        self.load();
        for node in self.nodes.clone() {
            self.validate_field(node, None)?;
        }
        Ok(())
    }

    /// Fields currently under management, in document order.
    pub fn nodes(&self) -> &[ElementId] {
        &self.nodes
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    /// Mutable document access, e.g. to edit a field value before
    /// dispatching a keystroke.
    pub fn document_mut(&mut self) -> &mut FormDocument {
        &mut self.document
    }

    /// The injected password evaluator.
    pub fn password_rules(&self) -> &dyn PasswordRules {
        self.password.as_ref()
    }
}
