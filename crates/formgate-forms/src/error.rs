//! Error types for form validation.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Form configuration errors.
///
/// These surface at [`attach`](crate::FormValidator::attach) time when a
/// binding references ids the page does not supply. A failed field rule is
/// not an error in this sense; it only annotates the page and suppresses
/// the submission.
#[derive(Debug, Error)]
pub enum FormError {
    /// The bound form element does not exist on the page.
    #[error("no form element with id {0:?}")]
    MissingForm(String),

    /// A rule's field element does not exist on the page.
    #[error("form {form:?} binds missing field element {field:?}")]
    MissingField { form: String, field: String },

    /// A rule's error container does not exist on the page.
    #[error("form {form:?} binds missing error container {container:?}")]
    MissingErrorContainer { form: String, container: String },
}

/// Collection of validation failure messages by field.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty `ValidationErrors`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a failure message for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any failures.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the messages for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns all failures as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
