// File: src/discovery.rs
// Purpose: Discovery of managed fields under the bound form

use crate::document::{ElementId, FormDocument};

/// Every element bearing the `prefix` attribute that is a descendant of
/// `root` (inclusive), in document order. No matches is not an error.
pub fn discover(doc: &FormDocument, root: ElementId, prefix: &str) -> Vec<ElementId> {
    doc.elements_with_attr(prefix)
        .into_iter()
        .filter(|&element| doc.contains(root, element))
        .collect()
}
