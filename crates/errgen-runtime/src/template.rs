//! Template parsing and execution for generated renderers.
//!
//! Uses Handlebars configured for plain-text substitution:
//! - strict mode: referencing a key that is not bound is an execution failure
//! - no HTML escaping
//! - dot-context references (`{{.Name}}`, `{{ .Name }}`, `{{.}}`) are
//!   rewritten to Handlebars paths before parsing

use handlebars::{no_escape, Handlebars, Template};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

const TEMPLATE_NAME: &str = "template";

/// `{{.}}` refers to the whole context.
static DOT_SELF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(~?\s*)\.(\s*~?\}\})").unwrap());

/// `{{.Name}}` refers to a field of the context.
static DOT_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(~?\s*)\.([A-Za-z_])").unwrap());

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("TEMPLATE/PARSE: {0}")]
    Parse(#[from] handlebars::TemplateError),
    #[error("TEMPLATE/EXEC: {0}")]
    Execute(#[from] handlebars::RenderError),
}

/// A template that parsed successfully and can be executed repeatedly.
pub struct ParsedTemplate {
    registry: Handlebars<'static>,
}

impl std::fmt::Debug for ParsedTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedTemplate").finish_non_exhaustive()
    }
}

/// Rewrite dot-context references into Handlebars path syntax.
pub fn normalize_dot_context(text: &str) -> String {
    let text = DOT_SELF.replace_all(text, "{{${1}this${2}");
    DOT_FIELD.replace_all(&text, "{{${1}${2}").into_owned()
}

/// Parse `text` as a template.
pub fn parse(text: &str) -> Result<ParsedTemplate, TemplateError> {
    let template = Template::compile(&normalize_dot_context(text))?;

    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(no_escape);
    registry.register_template(TEMPLATE_NAME, template);

    Ok(ParsedTemplate { registry })
}

impl ParsedTemplate {
    /// Execute against a set of bound keys.
    pub fn execute(&self, keys: &[(&str, &str)]) -> Result<String, TemplateError> {
        let data: BTreeMap<&str, &str> = keys.iter().copied().collect();
        Ok(self.registry.render(TEMPLATE_NAME, &data)?)
    }
}

/// Parse and execute `text`, reporting any failure as its message.
///
/// This is the contract of the generated `render_template` function: the
/// return value is either the rendered text or a failure message, never a
/// structured error.
pub fn render_or_message(text: &str, keys: &[(&str, &str)]) -> String {
    let template = match parse(text) {
        Ok(template) => template,
        Err(err) => return err.to_string(),
    };
    match template.execute(keys) {
        Ok(rendered) => rendered,
        Err(err) => err.to_string(),
    }
}
