use crate::error::CatalogError;
use crate::model::ErrorDef;
use std::collections::HashSet;

/// First kind (in input order) that appears more than once.
pub fn find_conflicting_kind(errors: &[ErrorDef]) -> Option<u64> {
    let mut seen = HashSet::with_capacity(errors.len());
    errors.iter().map(|e| e.kind).find(|kind| !seen.insert(*kind))
}

pub fn check_conflicts(errors: &[ErrorDef]) -> Result<(), CatalogError> {
    match find_conflicting_kind(errors) {
        Some(kind) => Err(CatalogError::ConflictingKind { kind }),
        None => Ok(()),
    }
}
