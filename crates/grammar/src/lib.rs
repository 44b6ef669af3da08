//! DocDraw grammar validation.
//!
//! Accepts or rejects a document and pinpoints the first error with a
//! stable error code and 1-based line number. Validation is a pure,
//! single-pass function; rendering is only ever invoked on text that has
//! already passed it.

mod error;
mod inline;
mod validator;

pub use error::{ErrorCode, Validation, ValidationError};
pub use inline::validate_inline;
pub use validator::validate;
