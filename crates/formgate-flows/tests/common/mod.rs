#![allow(dead_code)]

use formgate_dom::Page;
use formgate_flows::Flow;
use formgate_forms::{FormValidator, Submission, INVALID_CLASS};

/// Builds the flow's page with the given text fields filled in.
pub fn page_with(flow: Flow, fields: &[(&str, &str)]) -> Page {
    let mut page = flow.blank_page();
    for (id, value) in fields {
        page.get_mut(id)
            .unwrap_or_else(|| panic!("flow {flow} has no element {id}"))
            .set_value(*value);
    }
    page
}

pub fn check(page: &mut Page, id: &str, checked: bool) {
    page.get_mut(id)
        .unwrap_or_else(|| panic!("no element {id}"))
        .set_checked(checked);
}

/// Attaches the flow's binding and runs one submit attempt.
pub fn submit(flow: Flow, page: &mut Page) -> Submission {
    let validator = FormValidator::attach(flow.binding(), page)
        .unwrap_or_else(|e| panic!("failed to attach {flow}: {e}"));
    validator
        .handle_submit(page)
        .unwrap_or_else(|e| panic!("submit failed for {flow}: {e}"))
}

pub fn marked(page: &Page, id: &str) -> bool {
    page.get(id)
        .unwrap_or_else(|| panic!("no element {id}"))
        .has_class(INVALID_CLASS)
}

pub fn error_text<'p>(page: &'p Page, id: &str) -> &'p str {
    page.get(id)
        .unwrap_or_else(|| panic!("no element {id}"))
        .text()
}
