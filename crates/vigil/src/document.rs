// File: src/document.rs
// Purpose: In-memory form document the engine is scoped to

use std::collections::HashMap;

/// Handle to an element inside a [`FormDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A single element: tag, optional id, attributes and a current value.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    input_type: Option<String>,
    dom_id: Option<String>,
    attrs: HashMap<String, String>,
    value: String,
    parent: Option<ElementId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            input_type: None,
            dom_id: None,
            attrs: HashMap::new(),
            value: String::new(),
            parent: None,
        }
    }

    /// A `<form>` element.
    pub fn form() -> Self {
        Self::new("form")
    }

    /// An `<input>` with the given type, e.g. `"text"` or `"password"`.
    pub fn input(input_type: &str) -> Self {
        let mut element = Self::new("input");
        element.input_type = Some(input_type.to_string());
        element
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.dom_id = Some(id.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// A presence-only attribute (no value constraint).
    pub fn with_marker(self, name: &str) -> Self {
        self.with_attr(name, "")
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.dom_id.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn is_form(&self) -> bool {
        self.tag == "form"
    }

    pub fn is_password(&self) -> bool {
        self.input_type.as_deref() == Some("password")
    }

    /// Capability check: only interactive controls accept event listeners.
    pub fn supports_listeners(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select")
    }
}

/// Snapshot of a field handed to pass/fail handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub element: ElementId,
    pub id: Option<String>,
    pub value: String,
}

/// Arena of elements in document order.
///
/// Elements are appended under a parent and never removed, so an
/// [`ElementId`] stays valid for the life of the document.
#[derive(Debug, Default)]
pub struct FormDocument {
    elements: Vec<Element>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `element` under `parent` (or as a root when `None`) and return
    /// its handle.
    pub fn append(&mut self, parent: Option<ElementId>, mut element: Element) -> ElementId {
        element.parent = parent;
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.elements[id.0].value()
    }

    pub fn set_value(&mut self, id: ElementId, value: &str) {
        self.elements[id.0].value = value.to_string();
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements[id.0].attr(name)
    }

    pub fn has_attr(&self, id: ElementId, name: &str) -> bool {
        self.elements[id.0].has_attr(name)
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        self.elements[id.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, id: ElementId, name: &str) {
        self.elements[id.0].attrs.remove(name);
    }

    /// Look an element up by its id attribute.
    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element.id() == Some(id))
            .map(ElementId)
    }

    /// Inclusive containment: an element contains itself.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.elements[id.0].parent;
        }
        false
    }

    /// Every element bearing the named attribute, in document order.
    pub fn elements_with_attr(&self, name: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.has_attr(name))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    pub fn snapshot(&self, id: ElementId) -> FieldSnapshot {
        let element = &self.elements[id.0];
        FieldSnapshot {
            element: id,
            id: element.id().map(String::from),
            value: element.value().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_is_inclusive() {
        let mut doc = FormDocument::new();
        let form = doc.append(None, Element::form());
        let fieldset = doc.append(Some(form), Element::new("fieldset"));
        let input = doc.append(Some(fieldset), Element::input("text"));
        let outside = doc.append(None, Element::input("text"));

        assert!(doc.contains(form, form));
        assert!(doc.contains(form, fieldset));
        assert!(doc.contains(form, input));
        assert!(!doc.contains(form, outside));
    }

    #[test]
    fn test_elements_with_attr_follows_document_order() {
        let mut doc = FormDocument::new();
        let form = doc.append(None, Element::form());
        let first = doc.append(Some(form), Element::input("text").with_marker("data-vigil"));
        let _plain = doc.append(Some(form), Element::input("text"));
        let second = doc.append(Some(form), Element::input("text").with_marker("data-vigil"));

        assert_eq!(doc.elements_with_attr("data-vigil"), vec![first, second]);
    }

    #[test]
    fn test_element_lookup_by_id() {
        let mut doc = FormDocument::new();
        let form = doc.append(None, Element::form());
        let input = doc.append(Some(form), Element::input("text").with_id("email"));

        assert_eq!(doc.element_by_id("email"), Some(input));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn test_listener_capability() {
        assert!(Element::input("text").supports_listeners());
        assert!(Element::new("textarea").supports_listeners());
        assert!(!Element::new("div").supports_listeners());
        assert!(!Element::form().supports_listeners());
    }

    #[test]
    fn test_marker_attributes_are_present_but_empty() {
        let element = Element::input("password").with_marker("data-vigil-strength");
        assert!(element.has_attr("data-vigil-strength"));
        assert_eq!(element.attr("data-vigil-strength"), Some(""));
    }
}
