//! Rule sets for the authentication forms.
//!
//! Ids and messages match the page templates exactly. The two
//! password-bearing forms word the weak-password message slightly
//! differently; both spellings are kept as-is.

use formgate_forms::rules::{
    AcceptedRule, EmailRule, GmailRule, MatchesRule, PasswordStrengthRule, RequiredRule,
};
use formgate_forms::{FieldRule, FormBinding};

/// Forgot-password form: any well-formed email plus the captcha.
pub fn forgot() -> FormBinding {
    FormBinding::new("forgotForm")
        .rule(FieldRule::new("email", EmailRule::new()).error_element("emailError"))
        .rule(
            FieldRule::new("captcha", RequiredRule::with_message("Solve the captcha."))
                .error_element("captchaError"),
        )
}

/// Reset-password form: a strong new password and its confirmation.
pub fn reset() -> FormBinding {
    FormBinding::new("resetForm")
        .rule(
            FieldRule::new("password", PasswordStrengthRule::new()).error_element("passError"),
        )
        .rule(
            FieldRule::new("confirm_password", MatchesRule::new("password"))
                .error_element("confirmError"),
        )
}

/// Registration form: Gmail-only email, strong password with confirmation,
/// accepted terms, and the captcha. The terms checkbox gets the visual
/// marker only, no message container.
pub fn registration() -> FormBinding {
    FormBinding::new("regForm")
        .rule(FieldRule::new("email", GmailRule::new()).error_element("emailError"))
        .rule(
            FieldRule::new(
                "password",
                PasswordStrengthRule::with_message(
                    "Weak password - must include uppercase, lowercase, digit and special char.",
                ),
            )
            .error_element("passError"),
        )
        .rule(
            FieldRule::new("confirm_password", MatchesRule::new("password"))
                .error_element("confirmError"),
        )
        .rule(FieldRule::new("terms", AcceptedRule::new()))
        .rule(
            FieldRule::new("captcha", RequiredRule::with_message("Solve the captcha."))
                .error_element("captchaError"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forgot_binding_shape() {
        let binding = forgot();
        assert_eq!(binding.form, "forgotForm");
        assert_eq!(
            binding.field_ids().collect::<Vec<_>>(),
            ["email", "captcha"]
        );
    }

    #[test]
    fn test_registration_terms_has_no_error_container() {
        let binding = registration();
        let terms = binding
            .rules
            .iter()
            .find(|rule| rule.field == "terms")
            .unwrap();
        assert!(terms.error_element.is_none());
    }

    #[test]
    fn test_password_messages_per_form() {
        let reset = reset();
        assert_eq!(
            reset.rules[0].rule.message(),
            "Weak password - include uppercase, lowercase, digit, special char."
        );

        let registration = registration();
        assert_eq!(
            registration.rules[1].rule.message(),
            "Weak password - must include uppercase, lowercase, digit and special char."
        );
    }
}
