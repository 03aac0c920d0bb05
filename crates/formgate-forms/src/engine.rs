//! Submit-time validation engine.

use tracing::{debug, info};

use formgate_dom::Page;

use crate::binding::FormBinding;
use crate::error::{FormError, Result, ValidationErrors};
use crate::snapshot::FormSnapshot;

/// Class marking a field that failed its rule.
pub const INVALID_CLASS: &str = "is-invalid";

/// The outcome of a submit attempt.
#[derive(Debug, Clone)]
pub enum Submission {
    /// Every rule passed; the submission proceeds.
    Allowed,
    /// At least one rule failed; the submission is suppressed and the
    /// failures are collected by field.
    Suppressed(ValidationErrors),
}

impl Submission {
    /// Returns whether the submission was allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns whether the submission was suppressed.
    pub fn is_suppressed(&self) -> bool {
        !self.is_allowed()
    }

    /// Returns the collected failures, if the submission was suppressed.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Allowed => None,
            Self::Suppressed(errors) => Some(errors),
        }
    }
}

/// Intercepts submissions of a bound form.
///
/// Attaching verifies that every id the binding references exists on the
/// page, so a misconfigured page fails loudly at setup rather than silently
/// at submit time.
#[derive(Debug)]
pub struct FormValidator {
    binding: FormBinding,
}

impl FormValidator {
    /// Attaches a binding to a page.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] naming the first missing form, field, or
    /// error-container id.
    pub fn attach(binding: FormBinding, page: &Page) -> Result<Self> {
        if !page.contains(&binding.form) {
            return Err(FormError::MissingForm(binding.form));
        }
        for field_rule in &binding.rules {
            if !page.contains(&field_rule.field) {
                return Err(FormError::MissingField {
                    form: binding.form.clone(),
                    field: field_rule.field.clone(),
                });
            }
            if let Some(container) = &field_rule.error_element {
                if !page.contains(container) {
                    return Err(FormError::MissingErrorContainer {
                        form: binding.form.clone(),
                        container: container.clone(),
                    });
                }
            }
        }

        debug!(form = %binding.form, rules = binding.rules.len(), "validator attached");
        Ok(Self { binding })
    }

    /// Returns the binding this validator enforces.
    pub fn binding(&self) -> &FormBinding {
        &self.binding
    }

    /// Handles one submit attempt.
    ///
    /// Evaluates every rule in declaration order against a snapshot of the
    /// current field values; there is no short-circuit, so all failing
    /// fields are annotated in one pass. A failing rule adds
    /// [`INVALID_CLASS`] to its field and writes its message into the bound
    /// error container; a passing rule removes the class. Error text is not
    /// cleared on success, matching the pages this models, where only the
    /// marker class toggles both ways.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] only when the page no longer supplies an id
    /// the binding references, which cannot happen with the page the
    /// validator was attached against.
    pub fn handle_submit(&self, page: &mut Page) -> Result<Submission> {
        let snapshot = FormSnapshot::capture(page, self.binding.field_ids());
        debug!(
            form = %self.binding.form,
            rules = self.binding.rules.len(),
            "handling submit"
        );

        let mut errors = ValidationErrors::new();
        for field_rule in &self.binding.rules {
            let value = snapshot
                .get(&field_rule.field)
                .ok_or_else(|| FormError::MissingField {
                    form: self.binding.form.clone(),
                    field: field_rule.field.clone(),
                })?;

            match field_rule.rule.check(value, &snapshot) {
                Ok(()) => {
                    let element = page.get_mut(&field_rule.field).ok_or_else(|| {
                        FormError::MissingField {
                            form: self.binding.form.clone(),
                            field: field_rule.field.clone(),
                        }
                    })?;
                    element.remove_class(INVALID_CLASS);
                }
                Err(message) => {
                    let element = page.get_mut(&field_rule.field).ok_or_else(|| {
                        FormError::MissingField {
                            form: self.binding.form.clone(),
                            field: field_rule.field.clone(),
                        }
                    })?;
                    element.add_class(INVALID_CLASS);

                    if let Some(container_id) = &field_rule.error_element {
                        let container = page.get_mut(container_id).ok_or_else(|| {
                            FormError::MissingErrorContainer {
                                form: self.binding.form.clone(),
                                container: container_id.clone(),
                            }
                        })?;
                        container.set_text(message.clone());
                    }

                    debug!(form = %self.binding.form, field = %field_rule.field, "rule failed");
                    errors.add(&field_rule.field, message);
                }
            }
        }

        if errors.is_empty() {
            Ok(Submission::Allowed)
        } else {
            info!(
                form = %self.binding.form,
                fields = errors.len(),
                "submission suppressed"
            );
            Ok(Submission::Suppressed(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::FieldRule;
    use crate::rules::{EmailRule, RequiredRule};
    use formgate_dom::Element;

    fn forgot_binding() -> FormBinding {
        FormBinding::new("forgotForm")
            .rule(FieldRule::new("email", EmailRule::new()).error_element("emailError"))
            .rule(
                FieldRule::new("captcha", RequiredRule::with_message("Solve the captcha."))
                    .error_element("captchaError"),
            )
    }

    fn forgot_page(email: &str, captcha: &str) -> Page {
        Page::new()
            .element(Element::form("forgotForm"))
            .element(Element::text_input("email").with_value(email))
            .element(Element::block("emailError"))
            .element(Element::text_input("captcha").with_value(captcha))
            .element(Element::block("captchaError"))
    }

    #[test]
    fn test_attach_requires_form_element() {
        let page = Page::new();
        let err = FormValidator::attach(forgot_binding(), &page).unwrap_err();
        assert!(matches!(err, FormError::MissingForm(form) if form == "forgotForm"));
    }

    #[test]
    fn test_attach_requires_field_elements() {
        let page = Page::new().element(Element::form("forgotForm"));
        let err = FormValidator::attach(forgot_binding(), &page).unwrap_err();
        assert!(matches!(err, FormError::MissingField { field, .. } if field == "email"));
    }

    #[test]
    fn test_attach_requires_error_containers() {
        let page = Page::new()
            .element(Element::form("forgotForm"))
            .element(Element::text_input("email"))
            .element(Element::block("emailError"))
            .element(Element::text_input("captcha"));
        let err = FormValidator::attach(forgot_binding(), &page).unwrap_err();
        assert!(matches!(
            err,
            FormError::MissingErrorContainer { container, .. } if container == "captchaError"
        ));
    }

    #[test]
    fn test_all_rules_pass_allows_submission() {
        let mut page = forgot_page("a@b.com", "7");
        let validator = FormValidator::attach(forgot_binding(), &page).unwrap();

        let outcome = validator.handle_submit(&mut page).unwrap();

        assert!(outcome.is_allowed());
        assert!(!page.get("email").unwrap().has_class(INVALID_CLASS));
        assert!(!page.get("captcha").unwrap().has_class(INVALID_CLASS));
    }

    #[test]
    fn test_failure_marks_exactly_failing_fields() {
        let mut page = forgot_page("a@b", "7");
        let validator = FormValidator::attach(forgot_binding(), &page).unwrap();

        let outcome = validator.handle_submit(&mut page).unwrap();

        assert!(outcome.is_suppressed());
        assert!(page.get("email").unwrap().has_class(INVALID_CLASS));
        assert!(!page.get("captcha").unwrap().has_class(INVALID_CLASS));
        assert_eq!(page.get("emailError").unwrap().text(), "Enter a valid email.");
    }

    #[test]
    fn test_no_short_circuit_annotates_all_failures() {
        let mut page = forgot_page("a@b", "  ");
        let validator = FormValidator::attach(forgot_binding(), &page).unwrap();

        let outcome = validator.handle_submit(&mut page).unwrap();

        let errors = outcome.errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert!(page.get("email").unwrap().has_class(INVALID_CLASS));
        assert!(page.get("captcha").unwrap().has_class(INVALID_CLASS));
        assert_eq!(
            page.get("captchaError").unwrap().text(),
            "Solve the captcha."
        );
    }

    #[test]
    fn test_success_clears_marker_but_not_text() {
        let mut page = forgot_page("a@b", "7");
        let validator = FormValidator::attach(forgot_binding(), &page).unwrap();
        assert!(validator.handle_submit(&mut page).unwrap().is_suppressed());

        page.get_mut("email").unwrap().set_value("a@b.com");
        let outcome = validator.handle_submit(&mut page).unwrap();

        assert!(outcome.is_allowed());
        assert!(!page.get("email").unwrap().has_class(INVALID_CLASS));
        // The message container keeps its last text; only the marker toggles.
        assert_eq!(page.get("emailError").unwrap().text(), "Enter a valid email.");
    }

    #[test]
    fn test_resubmit_on_unchanged_values_is_idempotent() {
        let mut page = forgot_page("a@b", "7");
        let validator = FormValidator::attach(forgot_binding(), &page).unwrap();

        let first = validator.handle_submit(&mut page).unwrap();
        let second = validator.handle_submit(&mut page).unwrap();

        assert!(first.is_suppressed());
        assert!(second.is_suppressed());
        assert_eq!(page.get("email").unwrap().classes(), [INVALID_CLASS]);
        assert!(!page.get("captcha").unwrap().has_class(INVALID_CLASS));
    }
}
