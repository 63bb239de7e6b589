//! Catalog document loading.
//!
//! Catalogs are YAML documents (JSON works too, being a YAML subset):
//!
//! ```yaml
//! name: auth
//! sid: auth-service
//! errors:
//!   - name: UserNotFound
//!     kind: 1
//!     status_http: 404
//!     message: user not found
//! templates:
//!   greeting: "Hello {{.Name}}"
//! keys:
//!   Name: World
//! ```

use crate::error::CatalogError;
use crate::model::RawCatalog;
use std::path::Path;

impl RawCatalog {
    /// Load a catalog from a YAML or JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse a catalog from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CatalogError::Load(format!("invalid catalog document: {}", e)))
    }
}
