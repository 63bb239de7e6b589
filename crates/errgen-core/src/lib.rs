//! errgen core: error catalog validation, source generation and JSON view.
//!
//! A [`RawCatalog`] is validated into a [`Catalog`]; only a validated
//! catalog can be turned into generated source or JSON. The convenience
//! methods on `RawCatalog` validate first and return the validation failure
//! unchanged.
//!
//! # Example
//!
//! ```
//! use errgen_core::{ErrorDef, RawCatalog};
//!
//! # fn main() -> Result<(), errgen_core::CatalogError> {
//! let raw = RawCatalog {
//!     name: "auth".to_string(),
//!     sid: "auth-service".to_string(),
//!     errors: vec![ErrorDef::new("UserNotFound", 1, 404).message("user not found")],
//!     ..Default::default()
//! };
//!
//! let catalog = raw.validate()?;
//! let source = catalog.generate_source_string()?;
//! let json = catalog.to_json()?;
//!
//! assert!(source.contains("pub fn err_user_not_found() -> PublicError"));
//! assert!(!json.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod conflict;
pub mod error;
pub mod error_object;
pub mod generate;
pub mod json;
pub mod loader;
pub mod model;
pub mod validate;

pub use conflict::{check_conflicts, find_conflicting_kind};
pub use error::{CatalogError, ErrorCategory};
pub use error_object::ErrorObject;
pub use generate::{GenerateOptions, RendererFailures, GENERATED_MARKER};
pub use model::{Catalog, ErrorDef, RawCatalog};
pub use validate::validate;
