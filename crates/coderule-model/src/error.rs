use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown segment kind: {0}")]
    UnknownKind(String),
    #[error("unknown reset period: {0}")]
    UnknownPeriod(String),
    #[error("unsupported year width: {0} (expected 2 or 4)")]
    UnsupportedYearWidth(u32),
}

pub type Result<T> = std::result::Result<T, ModelError>;
