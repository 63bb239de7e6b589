//! ErrorObject: how an error definition is projected for consumers
use crate::model::ErrorDef;
use errgen_emit::ident::to_identifier;
use errgen_emit::{str_literal, Function};
use errgen_runtime::PublicError;

/// Conversions the generator and the JSON view need from an error definition.
pub trait ErrorObject {
    /// Public representation, as served to API consumers.
    fn to_public(&self) -> PublicError;

    /// Generated constructor returning the public representation.
    fn declaration(&self) -> Function;
}

impl ErrorObject for ErrorDef {
    fn to_public(&self) -> PublicError {
        PublicError::new(self.sid.clone(), self.kind, self.status_http, self.message.clone())
            .with_details(self.details.iter().cloned())
    }

    fn declaration(&self) -> Function {
        let mut call = format!(
            "PublicError::new({}, {}, {}, {})",
            str_literal(&self.sid),
            self.kind,
            self.status_http,
            str_literal(&self.message)
        );
        if !self.details.is_empty() {
            let details = self
                .details
                .iter()
                .map(|d| str_literal(d))
                .collect::<Vec<_>>()
                .join(", ");
            call.push_str(&format!("\n    .with_details([{}])", details));
        }

        Function::new(constructor_name(self))
            .public()
            .doc(constructor_doc(self))
            .returns("PublicError")
            .line(call)
    }
}

/// `err_<name>`, falling back to `err_kind_<kind>` for unnamed errors.
pub fn constructor_name(error: &ErrorDef) -> String {
    let mut base = to_identifier(&error.name);
    if base.is_empty() {
        base = format!("kind_{}", error.kind);
    }
    to_identifier(&format!("err_{}", base))
}

fn constructor_doc(error: &ErrorDef) -> String {
    let summary = format!("Kind `{}`, HTTP status `{}`.", error.kind, error.status_http);
    let text = error
        .comment
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(&error.message)
        .trim();
    if text.is_empty() {
        summary
    } else {
        format!("{}\n\n{}", text, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errgen_emit::render::render_item;
    use errgen_emit::Item;

    #[test]
    fn test_constructor_name() {
        assert_eq!(constructor_name(&ErrorDef::new("NotFound", 1, 404)), "err_not_found");
        assert_eq!(constructor_name(&ErrorDef::new("2fa required", 1, 401)), "err_2fa_required");
        assert_eq!(constructor_name(&ErrorDef::new("type", 1, 400)), "err_type");
        assert_eq!(constructor_name(&ErrorDef::new("", 7, 400)), "err_kind_7");
    }

    #[test]
    fn test_to_public() {
        let mut def = ErrorDef::new("NotFound", 4, 404)
            .message("user not found")
            .detail("check the id");
        def.sid = "auth".to_string();

        let public = def.to_public();
        assert_eq!(public.sid(), "auth");
        assert_eq!(public.kind(), 4);
        assert_eq!(public.status_http, 404);
        assert_eq!(public.details, vec!["check the id".to_string()]);
    }

    #[test]
    fn test_declaration_source() {
        let mut def = ErrorDef::new("NotFound", 4, 404)
            .message("user \"x\" not found")
            .detail("check the id");
        def.sid = "auth".to_string();

        let expected = "/// user \"x\" not found\n///\n/// Kind `4`, HTTP status `404`.\n\
pub fn err_not_found() -> PublicError {\n    \
PublicError::new(\"auth\", 4, 404, \"user \\\"x\\\" not found\")\n        \
.with_details([\"check the id\"])\n}";
        assert_eq!(render_item(&Item::Function(def.declaration())), expected);
    }
}
