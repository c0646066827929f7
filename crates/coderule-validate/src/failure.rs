use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a single form field was rejected.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldFailure {
    #[error("content is required")]
    ContentRequired,
    #[error("parameter name is required")]
    ParameterNameRequired,
    #[error("data is required")]
    DataRequired,
    #[error("invalid input")]
    InvalidInput,
    #[error("maximum value {max} must not be exceeded")]
    MaximumExceeded { max: u128 },
}

impl Serialize for FieldFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Field name to failure. An empty map means the form is valid.
pub type FieldFailures = BTreeMap<&'static str, FieldFailure>;
