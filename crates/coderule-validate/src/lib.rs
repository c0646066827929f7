//! Field validation for code rule segment forms.
//!
//! Validation never fails as an operation: it returns a map of field name to
//! [`FieldFailure`], and an empty map means the field set is acceptable.

mod failure;
mod report;
mod validator;

pub use failure::{FieldFailure, FieldFailures};
pub use report::{RuleReport, validate_rule};
pub use validator::validate;
