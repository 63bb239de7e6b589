//! JSON projection of a catalog.
use crate::error::CatalogError;
use crate::error_object::ErrorObject;
use crate::model::{Catalog, RawCatalog};
use errgen_runtime::PublicError;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct CatalogView<'a> {
    name: &'a str,
    sid: &'a str,
    errors: Vec<PublicError>,
    templates: &'a BTreeMap<String, String>,
    keys: &'a BTreeMap<String, String>,
}

impl Catalog {
    /// Two-space indented JSON. Errors keep their ascending kind order.
    pub fn to_json(&self) -> Result<Vec<u8>, CatalogError> {
        let view = CatalogView {
            name: &self.name,
            sid: &self.sid,
            errors: self.errors.iter().map(ErrorObject::to_public).collect(),
            templates: &self.templates,
            keys: &self.keys,
        };
        Ok(serde_json::to_vec_pretty(&view)?)
    }
}

impl RawCatalog {
    /// Validate, then project. Validation failures are returned to the caller.
    pub fn to_json(&self) -> Result<Vec<u8>, CatalogError> {
        self.validate()?.to_json()
    }
}
