//! Field rules.
//!
//! Each rule is a pure predicate over a field's submitted value (and, for
//! cross-field rules, the rest of the form snapshot), paired with the
//! failure message it reports. Rules carry no page state.

use once_cell::sync::Lazy;
use regex::Regex;

use formgate_dom::FieldValue;

use crate::snapshot::FormSnapshot;

// The patterns match the hosted templates' scripts verbatim, oddities
// included (consecutive dots in the local part or domain are accepted).
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static GMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@gmail\.com$").unwrap());

/// Special characters the password strength rule accepts.
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Trait for field rules.
pub trait Rule: Send + Sync {
    /// Evaluates the rule against the field's captured value. Returns the
    /// failure message if the rule does not hold.
    fn check(&self, value: &FieldValue, form: &FormSnapshot) -> Result<(), String>;

    /// Returns the failure message for this rule.
    fn message(&self) -> &str;
}

/// Rule that requires a loosely well-formed email address.
///
/// The value is trimmed before matching.
#[derive(Debug, Clone)]
pub struct EmailRule {
    message: String,
}

impl EmailRule {
    /// Creates a new `EmailRule` with the default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid email.".to_string(),
        }
    }

    /// Creates a new `EmailRule` with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EmailRule {
    fn check(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
        match value.as_text() {
            Some(text) if EMAIL_REGEX.is_match(text.trim()) => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule that requires a Gmail address specifically.
///
/// The value is trimmed before matching. The domain match is
/// case-sensitive, like the registration page it mirrors.
#[derive(Debug, Clone)]
pub struct GmailRule {
    message: String,
}

impl GmailRule {
    /// Creates a new `GmailRule` with the default message.
    pub fn new() -> Self {
        Self {
            message: "Use a valid Gmail address".to_string(),
        }
    }

    /// Creates a new `GmailRule` with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for GmailRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for GmailRule {
    fn check(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
        match value.as_text() {
            Some(text) if GMAIL_REGEX.is_match(text.trim()) => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule that requires a strong password.
///
/// At least 8 characters with at least one ASCII lowercase letter, one
/// ASCII uppercase letter, one digit, and one of `!@#$%^&*`. The `regex`
/// crate has no lookahead, so the classes are checked with char scans; the
/// value is not trimmed.
#[derive(Debug, Clone)]
pub struct PasswordStrengthRule {
    message: String,
}

impl PasswordStrengthRule {
    /// Creates a new `PasswordStrengthRule` with the default message.
    pub fn new() -> Self {
        Self {
            message: "Weak password - include uppercase, lowercase, digit, special char."
                .to_string(),
        }
    }

    /// Creates a new `PasswordStrengthRule` with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn is_strong(password: &str) -> bool {
        password.chars().count() >= 8
            && password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
    }
}

impl Default for PasswordStrengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PasswordStrengthRule {
    fn check(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
        match value.as_text() {
            Some(text) if Self::is_strong(text) => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule that requires the value to equal another field's value exactly.
///
/// No trimming; two empty values match.
#[derive(Debug, Clone)]
pub struct MatchesRule {
    other: String,
    message: String,
}

impl MatchesRule {
    /// Creates a new `MatchesRule` against the named field.
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            message: "Passwords do not match.".to_string(),
        }
    }

    /// Creates a new `MatchesRule` with a custom message.
    pub fn with_message(other: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            message: message.into(),
        }
    }
}

impl Rule for MatchesRule {
    fn check(&self, value: &FieldValue, form: &FormSnapshot) -> Result<(), String> {
        match (value.as_text(), form.text(&self.other)) {
            (Some(text), Some(other)) if text == other => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule that requires a non-empty value after trimming.
#[derive(Debug, Clone)]
pub struct RequiredRule {
    message: String,
}

impl RequiredRule {
    /// Creates a new `RequiredRule` with the default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new `RequiredRule` with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RequiredRule {
    fn check(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
        match value.as_text() {
            Some(text) if !text.trim().is_empty() => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule that requires a checkbox to be checked.
#[derive(Debug, Clone)]
pub struct AcceptedRule {
    message: String,
}

impl AcceptedRule {
    /// Creates a new `AcceptedRule` with the default message.
    pub fn new() -> Self {
        Self {
            message: "You must accept to continue.".to_string(),
        }
    }

    /// Creates a new `AcceptedRule` with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for AcceptedRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for AcceptedRule {
    fn check(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
        match value.as_checked() {
            Some(true) => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    fn empty_form() -> FormSnapshot {
        FormSnapshot::default()
    }

    #[test]
    fn test_email_rule() {
        let rule = EmailRule::new();
        let form = empty_form();

        assert!(rule.check(&text("a@b.com"), &form).is_ok());
        assert!(rule.check(&text("  a@b.com  "), &form).is_ok());
        assert!(rule.check(&text("a@b"), &form).is_err());
        assert!(rule.check(&text("a b@c.com"), &form).is_err());
        assert!(rule.check(&text(""), &form).is_err());
    }

    #[test]
    fn test_email_rule_keeps_loose_edge_cases() {
        // Consecutive dots pass the pattern; that behavior is intentional.
        let rule = EmailRule::new();
        assert!(rule.check(&text("a@b..com"), &empty_form()).is_ok());
    }

    #[test]
    fn test_gmail_rule() {
        let rule = GmailRule::new();
        let form = empty_form();

        assert!(rule.check(&text("user@gmail.com"), &form).is_ok());
        assert!(rule.check(&text("first.last+tag@gmail.com"), &form).is_ok());
        assert!(rule.check(&text(" user@gmail.com "), &form).is_ok());
        assert!(rule.check(&text("user@yahoo.com"), &form).is_err());
        assert!(rule.check(&text("user@Gmail.com"), &form).is_err());
        assert!(rule.check(&text("user@gmail.com.evil.io"), &form).is_err());
    }

    #[test]
    fn test_gmail_rule_keeps_loose_edge_cases() {
        let rule = GmailRule::new();
        assert!(rule.check(&text("a..b@gmail.com"), &empty_form()).is_ok());
    }

    #[test]
    fn test_password_strength_rule() {
        let rule = PasswordStrengthRule::new();
        let form = empty_form();

        assert!(rule.check(&text("Abcdefg1!"), &form).is_ok());
        // No uppercase, no special char.
        assert!(rule.check(&text("abcdefg1"), &form).is_err());
        // No lowercase.
        assert!(rule.check(&text("ABCDEFG1!"), &form).is_err());
        // No digit.
        assert!(rule.check(&text("Abcdefgh!"), &form).is_err());
        // No special char.
        assert!(rule.check(&text("Abcdefg1"), &form).is_err());
        // Too short.
        assert!(rule.check(&text("Ab1!"), &form).is_err());
        // '?' is outside the accepted special set.
        assert!(rule.check(&text("Abcdefg1?"), &form).is_err());
    }

    #[test]
    fn test_matches_rule() {
        let rule = MatchesRule::new("password");
        let page = formgate_dom::Page::new()
            .element(formgate_dom::Element::text_input("password").with_value("Abcdefg1!"));
        let form = FormSnapshot::capture(&page, ["password"]);

        assert!(rule.check(&text("Abcdefg1!"), &form).is_ok());
        assert!(rule.check(&text("Abcdefg1"), &form).is_err());
    }

    #[test]
    fn test_matches_rule_passes_on_equal_empties() {
        let rule = MatchesRule::new("password");
        let page =
            formgate_dom::Page::new().element(formgate_dom::Element::text_input("password"));
        let form = FormSnapshot::capture(&page, ["password"]);

        assert!(rule.check(&text(""), &form).is_ok());
    }

    #[test]
    fn test_matches_rule_fails_without_other_field() {
        let rule = MatchesRule::new("password");
        assert!(rule.check(&text("x"), &empty_form()).is_err());
    }

    #[test]
    fn test_required_rule() {
        let rule = RequiredRule::new();
        let form = empty_form();

        assert!(rule.check(&text("7"), &form).is_ok());
        assert!(rule.check(&text(""), &form).is_err());
        assert!(rule.check(&text("   "), &form).is_err());
    }

    #[test]
    fn test_accepted_rule() {
        let rule = AcceptedRule::new();
        let form = empty_form();

        assert!(rule.check(&FieldValue::Checked(true), &form).is_ok());
        assert!(rule.check(&FieldValue::Checked(false), &form).is_err());
    }

    #[test]
    fn test_text_rules_reject_checkbox_values() {
        let form = empty_form();
        let checked = FieldValue::Checked(true);

        assert!(EmailRule::new().check(&checked, &form).is_err());
        assert!(RequiredRule::new().check(&checked, &form).is_err());
        assert!(AcceptedRule::new().check(&text("true"), &form).is_err());
    }

    #[test]
    fn test_custom_messages() {
        let rule = RequiredRule::with_message("Solve the captcha.");
        assert_eq!(rule.message(), "Solve the captcha.");

        let err = rule.check(&text(""), &empty_form()).unwrap_err();
        assert_eq!(err, "Solve the captcha.");
    }
}
