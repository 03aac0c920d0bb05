//! # formgate-forms
//!
//! Declarative form validation: a form is bound to an ordered list of field
//! rules, and a submit attempt is allowed only when every rule passes.
//!
//! This crate provides:
//! - Field rules as pure predicates over submitted values
//! - Form bindings (form id + ordered rule list)
//! - A submit-time engine that toggles the `is-invalid` marker class,
//!   writes inline error text, and decides allow/suppress
//! - Validation error collection by field
//!
//! Rules never panic and never abort evaluation early: every rule runs on
//! every submit, so all failing fields are annotated at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use formgate_forms::{
//!     Element, FieldRule, FormBinding, FormValidator, Page,
//!     rules::{EmailRule, RequiredRule},
//! };
//!
//! let binding = FormBinding::new("forgotForm")
//!     .rule(FieldRule::new("email", EmailRule::new()).error_element("emailError"))
//!     .rule(
//!         FieldRule::new("captcha", RequiredRule::with_message("Solve the captcha."))
//!             .error_element("captchaError"),
//!     );
//!
//! let mut page = Page::new()
//!     .element(Element::form("forgotForm"))
//!     .element(Element::text_input("email").with_value("a@b"))
//!     .element(Element::block("emailError"))
//!     .element(Element::text_input("captcha").with_value("7"))
//!     .element(Element::block("captchaError"));
//!
//! let validator = FormValidator::attach(binding, &page).unwrap();
//! let outcome = validator.handle_submit(&mut page).unwrap();
//!
//! assert!(outcome.is_suppressed());
//! assert!(page.get("email").unwrap().has_class("is-invalid"));
//! assert_eq!(page.get("emailError").unwrap().text(), "Enter a valid email.");
//! assert!(!page.get("captcha").unwrap().has_class("is-invalid"));
//! ```

mod binding;
mod engine;
mod error;
pub mod rules;
mod snapshot;

pub use binding::{FieldRule, FormBinding};
pub use engine::{FormValidator, Submission, INVALID_CLASS};
pub use error::{FormError, Result, ValidationErrors};
pub use snapshot::FormSnapshot;

pub use formgate_dom::{Element, ElementKind, FieldValue, Page};
