//! # formgate-flows
//!
//! The concrete form bindings for the authentication pages: registration,
//! forgot-password, and reset-password. Each flow pins the element ids,
//! rule set, and failure messages its page template supplies, so one
//! validation engine serves all three forms.
//!
//! The captcha rule here is a non-empty check only; the server verifies
//! correctness, and nothing client-side should treat the captcha as solved.
//!
//! ## Quick Start
//!
//! ```rust
//! use formgate_flows::Flow;
//! use formgate_forms::FormValidator;
//!
//! let mut page = Flow::Forgot.blank_page();
//! page.get_mut("email").unwrap().set_value("a@b.com");
//! page.get_mut("captcha").unwrap().set_value("12");
//!
//! let validator = FormValidator::attach(Flow::Forgot.binding(), &page).unwrap();
//! assert!(validator.handle_submit(&mut page).unwrap().is_allowed());
//! ```

mod bindings;
mod pages;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use formgate_dom::Page;
use formgate_forms::FormBinding;

/// One of the authentication forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// The forgot-password form (email + captcha).
    Forgot,
    /// The reset-password form (new password + confirmation).
    Reset,
    /// The registration form (Gmail address, password, confirmation,
    /// terms, captcha).
    Registration,
}

/// Error returned when a flow name does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flow {0:?}, expected forgot, reset, or registration")]
pub struct ParseFlowError(String);

impl Flow {
    /// All flows, in page order.
    pub const ALL: [Self; 3] = [Self::Forgot, Self::Reset, Self::Registration];

    /// Returns the flow's name as used on the command line and in payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::Forgot => "forgot",
            Self::Reset => "reset",
            Self::Registration => "registration",
        }
    }

    /// Returns the id of the flow's form element.
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Forgot => "forgotForm",
            Self::Reset => "resetForm",
            Self::Registration => "regForm",
        }
    }

    /// Builds the flow's form binding.
    pub fn binding(self) -> FormBinding {
        match self {
            Self::Forgot => bindings::forgot(),
            Self::Reset => bindings::reset(),
            Self::Registration => bindings::registration(),
        }
    }

    /// Builds a page holding the elements the flow's template supplies,
    /// with every field blank.
    pub fn blank_page(self) -> Page {
        match self {
            Self::Forgot => pages::forgot(),
            Self::Reset => pages::reset(),
            Self::Registration => pages::registration(),
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flow {
    type Err = ParseFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forgot" => Ok(Self::Forgot),
            "reset" => Ok(Self::Reset),
            "registration" => Ok(Self::Registration),
            other => Err(ParseFlowError(other.to_string())),
        }
    }
}
