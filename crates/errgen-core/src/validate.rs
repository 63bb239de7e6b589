//! Catalog validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. service id present (any non-empty text, kept verbatim)
//! 2. name present, then normalized into an identifier
//! 3. no duplicated kinds
//! 4. every error gets the catalog sid and must have a kind and a status
//! 5. errors sorted by kind
//! 6. missing keys default to an empty map
//!
//! The input is never modified; a new [`Catalog`] is built from a copy.

use crate::conflict::check_conflicts;
use crate::error::CatalogError;
use crate::model::{Catalog, RawCatalog};
use errgen_emit::ident::to_identifier;
use tracing::{debug, warn};

pub fn validate(raw: &RawCatalog) -> Result<Catalog, CatalogError> {
    let result = normalize(raw.clone());
    match &result {
        Ok(catalog) => debug!(
            name = %catalog.name,
            sid = %catalog.sid,
            errors = catalog.errors.len(),
            "catalog validated"
        ),
        Err(err) => warn!(name = %raw.name, sid = %raw.sid, error = %err, "catalog rejected"),
    }
    result
}

fn normalize(raw: RawCatalog) -> Result<Catalog, CatalogError> {
    let RawCatalog {
        name,
        sid,
        mut errors,
        templates,
        keys,
    } = raw;

    if sid.is_empty() {
        return Err(CatalogError::UndefinedSid);
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::UndefinedName);
    }
    let name = to_identifier(name);
    if name.is_empty() {
        return Err(CatalogError::UndefinedName);
    }

    check_conflicts(&errors)?;

    for (index, error) in errors.iter_mut().enumerate() {
        error.sid = sid.clone();
        if error.kind == 0 {
            return Err(CatalogError::UndefinedKind { index });
        }
        if error.status_http == 0 {
            return Err(CatalogError::UndefinedStatus {
                index,
                kind: error.kind,
            });
        }
    }

    errors.sort_by_key(|e| e.kind);

    Ok(Catalog {
        name,
        sid,
        errors,
        templates,
        keys: keys.unwrap_or_default(),
    })
}

impl RawCatalog {
    pub fn validate(&self) -> Result<Catalog, CatalogError> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorDef;

    fn raw(errors: Vec<ErrorDef>) -> RawCatalog {
        RawCatalog {
            name: "Auth Service".to_string(),
            sid: "auth".to_string(),
            errors,
            ..Default::default()
        }
    }

    #[test]
    fn test_sorts_by_kind() {
        let catalog = validate(&raw(vec![
            ErrorDef::new("c", 30, 500),
            ErrorDef::new("a", 10, 400),
            ErrorDef::new("b", 20, 404),
        ]))
        .unwrap();

        let kinds: Vec<u64> = catalog.errors().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![10, 20, 30]);
        assert!(catalog.errors().iter().all(|e| e.sid == "auth"));
    }

    #[test]
    fn test_normalizes_name_and_defaults_keys() {
        let catalog = validate(&raw(vec![])).unwrap();
        assert_eq!(catalog.name(), "auth_service");
        assert!(catalog.keys().is_empty());
    }

    #[test]
    fn test_undefined_sid_wins() {
        let mut catalog = raw(vec![ErrorDef::new("x", 0, 0), ErrorDef::new("y", 0, 0)]);
        catalog.sid = String::new();
        catalog.name = String::new();
        assert_eq!(validate(&catalog), Err(CatalogError::UndefinedSid));

    }

    #[test]
    fn test_whitespace_sid_kept_verbatim() {
        let mut catalog = raw(vec![ErrorDef::new("x", 1, 400)]);
        catalog.sid = "   ".to_string();

        let validated = validate(&catalog).unwrap();
        assert_eq!(validated.sid(), "   ");
        assert_eq!(validated.errors()[0].sid, "   ");
    }

    #[test]
    fn test_undefined_name() {
        let mut catalog = raw(vec![]);
        catalog.name = "   ".to_string();
        assert_eq!(validate(&catalog), Err(CatalogError::UndefinedName));

        catalog.name = " --- ".to_string();
        assert_eq!(validate(&catalog), Err(CatalogError::UndefinedName));
    }

    #[test]
    fn test_conflicting_kind() {
        let catalog = raw(vec![ErrorDef::new("a", 5, 400), ErrorDef::new("b", 5, 0)]);
        assert_eq!(validate(&catalog), Err(CatalogError::ConflictingKind { kind: 5 }));
    }

    #[test]
    fn test_undefined_kind_and_status() {
        let catalog = raw(vec![ErrorDef::new("a", 0, 400)]);
        assert_eq!(validate(&catalog), Err(CatalogError::UndefinedKind { index: 0 }));

        let catalog = raw(vec![ErrorDef::new("a", 1, 400), ErrorDef::new("b", 3, 0)]);
        assert_eq!(
            validate(&catalog),
            Err(CatalogError::UndefinedStatus { index: 1, kind: 3 })
        );
    }

    #[test]
    fn test_input_untouched_on_failure() {
        let catalog = raw(vec![ErrorDef::new("a", 2, 400), ErrorDef::new("b", 1, 0)]);
        let before = catalog.clone();
        assert!(validate(&catalog).is_err());
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_idempotent() {
        let first = validate(&raw(vec![
            ErrorDef::new("b", 2, 404),
            ErrorDef::new("a", 1, 400),
        ]))
        .unwrap();
        let second = first.clone().into_raw().validate().unwrap();
        assert_eq!(first, second);
    }
}
