//! Blank pages mirroring each flow's template.
//!
//! The real templates are served by the host application; these builders
//! reproduce just the element contract (field inputs, message containers,
//! the form element) so flows can be validated headlessly.

use formgate_dom::{Element, Page};

pub fn forgot() -> Page {
    Page::new()
        .element(Element::form("forgotForm"))
        .element(Element::text_input("email"))
        .element(Element::block("emailError"))
        .element(Element::text_input("captcha"))
        .element(Element::block("captchaError"))
}

pub fn reset() -> Page {
    Page::new()
        .element(Element::form("resetForm"))
        .element(Element::text_input("password"))
        .element(Element::block("passError"))
        .element(Element::text_input("confirm_password"))
        .element(Element::block("confirmError"))
}

pub fn registration() -> Page {
    Page::new()
        .element(Element::form("regForm"))
        .element(Element::text_input("email"))
        .element(Element::block("emailError"))
        .element(Element::text_input("password"))
        .element(Element::block("passError"))
        .element(Element::text_input("confirm_password"))
        .element(Element::block("confirmError"))
        .element(Element::checkbox("terms"))
        .element(Element::text_input("captcha"))
        .element(Element::block("captchaError"))
}
