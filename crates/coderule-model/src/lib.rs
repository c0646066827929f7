//! Code rule data model.
//!
//! A code rule is an ordered list of typed segments (fixed text, calendar
//! fields, a counter, a checksum slot, a parameter placeholder or user input)
//! that together describe how an identifier string is assembled.
//!
//! - **segment**: the serialized exchange format (`type`, `note`, name/value settings)
//! - **form**: typed in-memory forms, one body per kind
//! - **codec**: `decode`/`encode` between the two
//! - **coerce**: the single table of string-to-number/character coercions
//! - **kind**: the closed set of segment kinds and related enums
//! - **label**: display-label lookup seam

pub mod codec;
pub mod coerce;
pub mod error;
pub mod form;
pub mod kind;
pub mod label;
pub mod segment;

pub use codec::{decode, decode_all, encode, encode_all};
pub use error::{ModelError, Result};
pub use form::{
    AutoIncrementForm, CRC32_ALGORITHM, CalendarForm, ChecksumForm, DEFAULT_SCOPE, FormBody,
    LENGTH_MAX, LiteralForm, ParameterValueForm, SegmentForm, UserInputForm, YearForm,
};
pub use kind::{ResetPeriod, SegmentKind, YearWidth, selectable_kinds};
pub use label::{EnglishLabels, KindLabels, kind_label, segment_label};
pub use segment::{NOTE_MAX_CHARS, Rule, Segment, SegmentType, Setting};
