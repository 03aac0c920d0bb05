//! Point-in-time reads of form field state.

use std::collections::HashMap;

use formgate_dom::{FieldValue, Page};

/// Field values captured from the page at the moment of submission.
///
/// Rules evaluate against the snapshot rather than the live page, so every
/// rule in a binding sees the same values, including cross-field rules.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    values: HashMap<String, FieldValue>,
}

impl FormSnapshot {
    /// Captures the named fields from the page. Ids without a matching
    /// element are skipped; the engine verifies ids before capturing.
    pub fn capture<'a>(page: &Page, fields: impl IntoIterator<Item = &'a str>) -> Self {
        let mut values = HashMap::new();
        for id in fields {
            if let Some(element) = page.get(id) {
                values.insert(id.to_string(), element.field_value());
            }
        }
        Self { values }
    }

    /// Returns the captured value for a field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Returns the captured text value for a field, if it is a text field.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(FieldValue::as_text)
    }
}
