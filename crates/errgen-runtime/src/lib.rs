//! errgen runtime: the error objects and template renderer that
//! errgen-generated modules link against.
//!
//! # Example
//!
//! ```
//! use errgen_runtime::{template, PublicError};
//!
//! let err = PublicError::new("auth", 1, 404, "user not found")
//!     .with_details(["check the user id"]);
//! assert_eq!(err.to_string(), "[auth/1] user not found");
//!
//! let text = template::render_or_message("Hello {{.Name}}", &[("Name", "World")]);
//! assert_eq!(text, "Hello World");
//! ```

pub mod error;
pub mod template;

pub use error::{ErrorId, PublicError};
pub use template::{parse, render_or_message, ParsedTemplate, TemplateError};
