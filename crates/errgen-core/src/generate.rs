//! Source generation for validated catalogs.
//!
//! A generated module contains, in order: the generated-code marker, one
//! `pub const` per template (sorted by template name), the catalog keys as a
//! `TEMPLATE_KEYS` slice, one constructor per error (ascending kind), and a
//! single `render_template` function.

use crate::error::CatalogError;
use crate::error_object::ErrorObject;
use crate::model::{Catalog, RawCatalog};
use errgen_emit::ident::{is_identifier, to_identifier};
use errgen_emit::{Const, Function, Literal, SourceFile};
use std::io::Write;
use tracing::info;

pub const GENERATED_MARKER: &str = "Code generated by errgen. DO NOT EDIT.";

pub const RENDERER_FN: &str = "render_template";

pub const KEYS_CONST: &str = "TEMPLATE_KEYS";

/// How the generated `render_template` reports template failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RendererFailures {
    /// `render_template(text) -> String`: parse and execution failures come
    /// back as their message text, so generated modules never expose a
    /// structured error type.
    #[default]
    Message,
    /// `render_template(text) -> Result<String, errgen_runtime::TemplateError>`.
    Structured,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub renderer_failures: RendererFailures,
}

/// Template keys that already are identifiers are used verbatim; anything
/// else is normalized.
pub fn template_const_name(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        to_identifier(key)
    }
}

impl Catalog {
    /// Build the generated source unit without rendering it.
    pub fn source_file(&self) -> Result<SourceFile, CatalogError> {
        self.source_file_with(&GenerateOptions::default())
    }

    pub fn source_file_with(&self, options: &GenerateOptions) -> Result<SourceFile, CatalogError> {
        let mut file = SourceFile::new(self.name.clone());
        file.header_comment(GENERATED_MARKER)
            .inner_doc(format!("Error catalog `{}` for service `{}`.", self.name, self.sid))
            .inner_attr("allow(dead_code, non_upper_case_globals)")
            .use_path("errgen_runtime::PublicError");

        for (name, text) in &self.templates {
            file.constant(
                Const::new(template_const_name(name), "&str", Literal::Str(text.clone())).public(),
            )?;
        }

        let keys = self
            .keys
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        file.constant(Const::new(KEYS_CONST, "&[(&str, &str)]", Literal::Pairs(keys)))?;

        for error in &self.errors {
            file.function(error.declaration())?;
        }

        file.function(renderer(options.renderer_failures))?;
        Ok(file)
    }

    /// Write the generated module to `sink`. Nothing is written unless the
    /// whole unit was built successfully.
    pub fn generate_source<W: Write>(&self, sink: W) -> Result<(), CatalogError> {
        self.generate_source_with(sink, &GenerateOptions::default())
    }

    pub fn generate_source_with<W: Write>(
        &self,
        sink: W,
        options: &GenerateOptions,
    ) -> Result<(), CatalogError> {
        let file = self.source_file_with(options)?;
        file.write_to(sink)?;
        info!(
            module = %self.name,
            templates = self.templates.len(),
            errors = self.errors.len(),
            "generated catalog source"
        );
        Ok(())
    }

    pub fn generate_source_string(&self) -> Result<String, CatalogError> {
        Ok(self.source_file()?.render())
    }
}

impl RawCatalog {
    /// Validate, then generate. Validation failures are returned unchanged
    /// and nothing is written.
    pub fn generate_source<W: Write>(&self, sink: W) -> Result<(), CatalogError> {
        self.validate()?.generate_source(sink)
    }

    pub fn generate_source_string(&self) -> Result<String, CatalogError> {
        self.validate()?.generate_source_string()
    }
}

fn renderer(failures: RendererFailures) -> Function {
    let f = Function::new(RENDERER_FN)
        .public()
        .param("text", "&str");
    match failures {
        RendererFailures::Message => f
            .doc("Render `text` against the catalog keys.\n\nParse and execution failures are returned as their message text.")
            .returns("String")
            .line(
                "let template = match errgen_runtime::template::parse(text) {\n    \
                 Ok(template) => template,\n    \
                 Err(err) => return err.to_string(),\n\
                 };",
            )
            .line(format!(
                "match template.execute({}) {{\n    \
                 Ok(rendered) => rendered,\n    \
                 Err(err) => err.to_string(),\n\
                 }}",
                KEYS_CONST
            )),
        RendererFailures::Structured => f
            .doc("Render `text` against the catalog keys.")
            .returns("Result<String, errgen_runtime::TemplateError>")
            .line("let template = errgen_runtime::template::parse(text)?;")
            .line(format!("template.execute({})", KEYS_CONST)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorDef;
    use std::collections::BTreeMap;

    fn catalog() -> RawCatalog {
        RawCatalog {
            name: "billing".to_string(),
            sid: "bill".to_string(),
            errors: vec![ErrorDef::new("b", 2, 402), ErrorDef::new("a", 1, 400)],
            templates: BTreeMap::from([
                ("zeta".to_string(), "z".to_string()),
                ("alpha".to_string(), "a".to_string()),
            ]),
            keys: None,
        }
    }

    #[test]
    fn test_declaration_order() {
        let file = catalog().validate().unwrap().source_file().unwrap();
        let names: Vec<&str> = file.items().iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec!["alpha", "zeta", "TEMPLATE_KEYS", "err_a", "err_b", "render_template"]
        );
    }

    #[test]
    fn test_empty_keys_literal() {
        let source = catalog().generate_source_string().unwrap();
        assert!(source.contains("const TEMPLATE_KEYS: &[(&str, &str)] = &[];"));
        assert!(source.starts_with("// Code generated by errgen. DO NOT EDIT.\n"));
    }

    #[test]
    fn test_exactly_one_renderer() {
        let source = catalog().generate_source_string().unwrap();
        assert_eq!(source.matches("pub fn render_template(text: &str) -> String").count(), 1);
    }

    #[test]
    fn test_validation_failure_writes_nothing() {
        let mut raw = catalog();
        raw.errors.push(ErrorDef::new("dup", 1, 500));

        let mut sink = Vec::new();
        let err = raw.generate_source(&mut sink).unwrap_err();
        assert_eq!(err, CatalogError::ConflictingKind { kind: 1 });
        assert!(sink.is_empty());
    }

    #[test]
    fn test_template_keys_used_verbatim() {
        let mut raw = catalog();
        raw.templates.insert("Greeting".to_string(), "Hi".to_string());
        raw.templates.insert("greeting".to_string(), "hi".to_string());
        raw.templates.insert("NOT_FOUND".to_string(), "gone".to_string());

        let source = raw.generate_source_string().unwrap();
        assert!(source.contains("pub const Greeting: &str = \"Hi\";"));
        assert!(source.contains("pub const greeting: &str = \"hi\";"));
        assert!(source.contains("pub const NOT_FOUND: &str = \"gone\";"));
    }

    #[test]
    fn test_non_identifier_keys_are_normalized() {
        let mut raw = catalog();
        raw.templates.insert("user greeting".to_string(), "Hi".to_string());
        raw.templates.insert("type".to_string(), "t".to_string());

        let source = raw.generate_source_string().unwrap();
        assert!(source.contains("pub const user_greeting: &str = \"Hi\";"));
        assert!(source.contains("pub const type_: &str = \"t\";"));
    }

    #[test]
    fn test_colliding_normalized_keys_write_nothing() {
        let mut raw = catalog();
        raw.templates.insert("user greeting".to_string(), "a".to_string());
        raw.templates.insert("user_greeting".to_string(), "b".to_string());

        let mut sink = Vec::new();
        let err = raw.generate_source(&mut sink).unwrap_err();
        assert!(matches!(err, CatalogError::Generation(ref msg) if msg.contains("user_greeting")));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_multiline_sid_stays_in_doc_comment() {
        let mut raw = catalog();
        raw.sid = "svc\nfn broken".to_string();

        let source = raw.generate_source_string().unwrap();
        assert!(source.contains("//! Error catalog `billing` for service `svc\n//! fn broken`.\n"));
        assert!(!source.lines().any(|line| line.starts_with("fn broken")));
        assert!(source.contains("PublicError::new(\"svc\\nfn broken\", 1, 400, \"\")"));
    }

    #[test]
    fn test_structured_renderer_option() {
        let catalog = catalog().validate().unwrap();
        let options = GenerateOptions {
            renderer_failures: RendererFailures::Structured,
        };
        let mut sink = Vec::new();
        catalog.generate_source_with(&mut sink, &options).unwrap();
        let source = String::from_utf8(sink).unwrap();

        assert!(source.contains(
            "pub fn render_template(text: &str) -> Result<String, errgen_runtime::TemplateError> {\n    \
             let template = errgen_runtime::template::parse(text)?;\n    \
             template.execute(TEMPLATE_KEYS)\n}"
        ));
        assert_ne!(source, catalog.generate_source_string().unwrap());
    }

    #[test]
    fn test_template_name_without_identifier() {
        let mut raw = catalog();
        raw.templates.insert("???".to_string(), "x".to_string());
        let err = raw.generate_source_string().unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Generation);
    }
}
