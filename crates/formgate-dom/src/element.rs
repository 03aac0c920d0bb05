//! Page elements and their field state.

use serde::{Deserialize, Serialize};

/// The kinds of element the validation layer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A text-like input (`<input type="text|email|password">`).
    TextInput,
    /// A checkbox input.
    Checkbox,
    /// A form element.
    Form,
    /// Any non-input container (message `<div>`, `<span>`, ...).
    Block,
}

/// The submittable state of a field, read at one point in time.
///
/// Text inputs report their value string; checkboxes report whether they
/// are checked. The untagged serde representation means a JSON payload maps
/// strings to [`FieldValue::Text`] and booleans to [`FieldValue::Checked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// The current value of a text-like input.
    Text(String),
    /// Whether a checkbox is checked.
    Checked(bool),
}

impl FieldValue {
    /// Returns the text value, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Checked(_) => None,
        }
    }

    /// Returns the checked state, if this is a checkbox field.
    pub fn as_checked(&self) -> Option<bool> {
        match self {
            Self::Text(_) => None,
            Self::Checked(checked) => Some(*checked),
        }
    }
}

/// A single page element.
///
/// Carries the properties the validation layer reads and writes: `value`
/// and `checked` for inputs, `text` for message containers, and an ordered,
/// de-duplicated class list for the visual validity marker.
#[derive(Debug, Clone)]
pub struct Element {
    id: String,
    kind: ElementKind,
    value: String,
    checked: bool,
    text: String,
    classes: Vec<String>,
}

impl Element {
    fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            value: String::new(),
            checked: false,
            text: String::new(),
            classes: Vec::new(),
        }
    }

    /// Creates a text-like input element.
    pub fn text_input(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::TextInput)
    }

    /// Creates a checkbox element.
    pub fn checkbox(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Checkbox)
    }

    /// Creates a form element.
    pub fn form(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Form)
    }

    /// Creates a non-input container element.
    pub fn block(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Block)
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the initial checked state.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Returns the element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns the current input value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets the input value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns whether the checkbox is checked.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Sets the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Returns the element's inner text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the element's inner text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Adds a class. Adding a class that is already present is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class. Removing an absent class is a no-op.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Returns whether the class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the class list in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Reads the element's submittable state.
    ///
    /// Checkboxes report their checked flag, everything else its value
    /// string (empty for containers, which have no value).
    pub fn field_value(&self) -> FieldValue {
        match self.kind {
            ElementKind::Checkbox => FieldValue::Checked(self.checked),
            ElementKind::TextInput | ElementKind::Form | ElementKind::Block => {
                FieldValue::Text(self.value.clone())
            }
        }
    }
}
