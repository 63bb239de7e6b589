//! Data Model: RawCatalog, Catalog, ErrorDef
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One error definition as authored in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDef {
    /// Names the generated constructor (`err_<name>`)
    #[serde(default)]
    pub name: String,
    /// Discriminator, unique and non-zero within a catalog
    #[serde(default)]
    pub kind: u64,
    /// HTTP status, non-zero
    #[serde(default, alias = "status_code", alias = "statusHTTP")]
    pub status_http: u16,
    /// Owning service; overwritten during validation
    #[serde(default, alias = "service_id")]
    pub sid: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
    /// Doc comment for the generated constructor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ErrorDef {
    pub fn new(name: impl Into<String>, kind: u64, status_http: u16) -> Self {
        Self {
            name: name.into(),
            kind,
            status_http,
            ..Default::default()
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A catalog as loaded, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "service_id")]
    pub sid: String,
    #[serde(default, alias = "error")]
    pub errors: Vec<ErrorDef>,
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<BTreeMap<String, String>>,
}

/// A validated catalog. Only [`crate::validate`] constructs one.
///
/// `name` is a valid identifier, every error carries the catalog `sid`, and
/// `errors` is sorted by strictly ascending `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) name: String,
    pub(crate) sid: String,
    pub(crate) errors: Vec<ErrorDef>,
    pub(crate) templates: BTreeMap<String, String>,
    pub(crate) keys: BTreeMap<String, String>,
}

impl Catalog {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sid(&self) -> &str {
        &self.sid
    }

    pub fn errors(&self) -> &[ErrorDef] {
        &self.errors
    }

    pub fn templates(&self) -> &BTreeMap<String, String> {
        &self.templates
    }

    pub fn keys(&self) -> &BTreeMap<String, String> {
        &self.keys
    }

    /// Keys as borrowed pairs, in key order.
    pub fn key_pairs(&self) -> Vec<(&str, &str)> {
        self.keys.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    pub fn into_raw(self) -> RawCatalog {
        RawCatalog {
            name: self.name,
            sid: self.sid,
            errors: self.errors,
            templates: self.templates,
            keys: Some(self.keys),
        }
    }
}
