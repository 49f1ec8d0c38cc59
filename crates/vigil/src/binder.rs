// File: src/binder.rs
// Purpose: Listener bindings and keystroke dispatch

use crate::controller::FormController;
use crate::document::ElementId;
use crate::error::Error;

/// Key code of the keystroke that triggered a validation pass.
pub type KeyCode = u32;

impl FormController {
    /// Attach a change-detection listener to `node`.
    ///
    /// Fails with [`Error::InvalidTarget`] unless the node supports event
    /// listeners. Registration is not deduplicated: managing the same node
    /// twice attaches two listeners, and a keystroke then validates twice.
    pub fn manage(&mut self, node: ElementId) -> Result<(), Error> {
        let supports = self
            .document
            .get(node)
            .is_some_and(|element| element.supports_listeners());

        if !supports {
            return Err(Error::InvalidTarget);
        }

        self.bindings.push(node);
        Ok(())
    }

    /// Number of listeners currently attached to `node`.
    pub fn listener_count(&self, node: ElementId) -> usize {
        self.bindings.iter().filter(|&&bound| bound == node).count()
    }

    /// Deliver a keystroke to `node`: every listener attached to it re-enters
    /// the engine with the originating element and the key code.
    pub fn keyup(&mut self, node: ElementId, key: KeyCode) -> Result<(), Error> {
        for _ in 0..self.listener_count(node) {
            self.validate_field(node, Some(key))?;
        }
        Ok(())
    }
}
