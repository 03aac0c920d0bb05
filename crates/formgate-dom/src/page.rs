//! Flat id-indexed page of elements.

use std::collections::HashMap;

use crate::element::Element;

/// An id → element map standing in for the host page.
///
/// Ids are unique; inserting an element under an id that already exists
/// replaces the previous element, like re-rendering the same node.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an element.
    #[must_use]
    pub fn element(mut self, element: Element) -> Self {
        self.insert(element);
        self
    }

    /// Inserts an element, replacing any element with the same id.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id().to_string(), element);
    }

    /// Looks an element up by id.
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Looks an element up by id, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Returns whether an element with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Returns the number of elements on the page.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the page has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
