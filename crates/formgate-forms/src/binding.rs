//! Field rules bound to a form.

use crate::rules::Rule;

/// A rule attached to a specific field, with an optional inline error
/// container that receives the failure message.
///
/// Some fields annotate only the visual marker (the registration terms
/// checkbox does), so the error container is optional.
pub struct FieldRule {
    /// Id of the field element the rule reads and marks.
    pub field: String,
    /// Id of the element that receives the failure message, if any.
    pub error_element: Option<String>,
    /// The rule to evaluate.
    pub rule: Box<dyn Rule>,
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("error_element", &self.error_element)
            .field("message", &self.rule.message())
            .finish_non_exhaustive()
    }
}

impl FieldRule {
    /// Creates a new field rule.
    pub fn new(field: impl Into<String>, rule: impl Rule + 'static) -> Self {
        Self {
            field: field.into(),
            error_element: None,
            rule: Box::new(rule),
        }
    }

    /// Sets the error container element id.
    #[must_use]
    pub fn error_element(mut self, id: impl Into<String>) -> Self {
        self.error_element = Some(id.into());
        self
    }
}

/// The association between a form and the ordered rules gating its
/// submission.
///
/// Built once at setup time and never mutated afterwards. Rule order is
/// declaration order; it only affects which messages end up visible when
/// several rules share an error container, never the allow/deny outcome.
#[derive(Debug)]
pub struct FormBinding {
    /// Id of the form element.
    pub form: String,
    /// The rules, in declaration order.
    pub rules: Vec<FieldRule>,
}

impl FormBinding {
    /// Creates an empty binding for the named form.
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            rules: Vec::new(),
        }
    }

    /// Adds a field rule.
    #[must_use]
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the ids of the fields the binding's rules read.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.field.as_str())
    }
}
