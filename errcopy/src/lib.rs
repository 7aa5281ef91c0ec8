//! User-facing copy for caught errors
//!
//! Two entry points cover what UI call sites need:
//!
//! - [`format_error_message`] maps any caught value to a short line for a
//!   toast or alert.
//! - [`format_validation_error`] summarizes a field-keyed validation payload.
//!
//! Both are pure and never panic. [`Classifier`] binds the same rules to a
//! custom [`MessageCatalog`].

pub mod catalog;
pub mod classify;
pub mod error;
pub mod raw;
pub mod rules;
pub mod validation;

pub use catalog::MessageCatalog;
pub use classify::{classify, format_error_message, Classification, Classifier, ErrorCategory};
pub use error::{CatalogError, ValidationError};
pub use raw::RawError;
pub use validation::{field_errors, format_validation_error, FieldError, ValidationErrorPayload};
