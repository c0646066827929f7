use coderule_model::SegmentKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("note is {len} characters long; at most {max} are allowed")]
    NoteTooLong { len: usize, max: usize },
    #[error("user input is {len} characters long; the segment holds {max}")]
    UserInputTooLong { len: usize, max: usize },
    #[error("segment index {index} is out of range for a rule of {len} segments")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("field `{field}` does not apply to {kind} segments")]
    NotApplicable { field: &'static str, kind: String },
    #[error("segment kind {0} is not offered by this editor")]
    ExcludedKind(SegmentKind),
}

pub type Result<T> = std::result::Result<T, EditError>;
