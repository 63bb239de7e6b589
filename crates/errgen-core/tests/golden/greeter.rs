// Code generated by errgen. DO NOT EDIT.

//! Error catalog `greeter` for service `greet`.
#![allow(dead_code, non_upper_case_globals)]

use errgen_runtime::PublicError;

pub const farewell: &str = "Bye {{.Name}}";

pub const greeting: &str = "Hello {{.Name}}";

const TEMPLATE_KEYS: &[(&str, &str)] = &[
    ("Name", "World"),
];

/// Unexpected failure while greeting.
///
/// Kind `1`, HTTP status `500`.
pub fn err_internal() -> PublicError {
    PublicError::new("greet", 1, 500, "internal failure")
}

/// greeting not found
///
/// Kind `2`, HTTP status `404`.
pub fn err_not_found() -> PublicError {
    PublicError::new("greet", 2, 404, "greeting not found")
        .with_details(["check the name"])
}

/// Render `text` against the catalog keys.
///
/// Parse and execution failures are returned as their message text.
pub fn render_template(text: &str) -> String {
    let template = match errgen_runtime::template::parse(text) {
        Ok(template) => template,
        Err(err) => return err.to_string(),
    };
    match template.execute(TEMPLATE_KEYS) {
        Ok(rendered) => rendered,
        Err(err) => err.to_string(),
    }
}
