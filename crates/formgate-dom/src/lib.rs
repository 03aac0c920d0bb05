//! # formgate-dom
//!
//! A headless stand-in for the browser page, just big enough to carry the
//! state that form validation touches: element lookup by id, input values,
//! checkbox state, class lists, and the text of inline message containers.
//!
//! The host page owns structure and styling; this model is deliberately
//! flat. Elements are addressed by unique id, exactly like
//! `document.getElementById`.
//!
//! ## Quick Start
//!
//! ```rust
//! use formgate_dom::{Element, Page};
//!
//! let mut page = Page::new()
//!     .element(Element::form("loginForm"))
//!     .element(Element::text_input("email").with_value("user@example.com"))
//!     .element(Element::block("emailError"));
//!
//! let email = page.get_mut("email").unwrap();
//! email.add_class("is-invalid");
//! assert!(email.has_class("is-invalid"));
//! ```

mod element;
mod page;

pub use element::{Element, ElementKind, FieldValue};
pub use page::Page;
